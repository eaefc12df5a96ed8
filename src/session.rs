//! One game run: market + colonist + command application.
//!
//! The session is the logic layer between the prompt and the engine. It
//! applies parsed commands, decides which of them cost a cycle, and tracks
//! how the run ends. Player-facing text flows through a single-slot notice
//! taken by the shell after each command; the logic layer never touches UI
//! types.

use crate::commands::Command;
use crate::constants::HAB_COST;
use crate::market::{create_market, MarketEngine};
use crate::player::{trade, Player};

/// Tone of a prompt notice, mapped to a color by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Success,
    Error,
}

/// One-shot message from a command handler to the renderer.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Error,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameOutcome {
    /// The habitat was bought before the collapse.
    Victory { cycle: u32, lux_left: f64 },
    /// Supplies ran out mid-run.
    Starved { cycle: u32 },
    /// The cycle budget expired with no habitat.
    Collapsed { net_worth: f64 },
}

/// A single run of the game.
pub struct GameSession {
    pub market: MarketEngine,
    pub player: Player,
    notice: Option<Notice>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Start a fresh run. A fixed seed reproduces the whole market.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            market: create_market(seed),
            player: Player::new(),
            notice: None,
            outcome: None,
        }
    }

    /// Apply one parsed command. `Help` and `Quit` are shell concerns and are
    /// ignored here. After a cycle-costing command succeeds, the market ticks
    /// and one supply unit burns.
    pub fn apply(&mut self, cmd: Command) {
        if self.outcome.is_some() {
            return;
        }

        match cmd {
            Command::Buy { id, qty } => {
                let (price, name) = match self.market.find(id) {
                    Ok(asset) => (asset.price, asset.name),
                    Err(e) => {
                        self.notice = Some(Notice::error(e.to_string()));
                        return;
                    }
                };
                match trade::buy(&mut self.player, id, price, qty) {
                    Ok(cost) => {
                        self.notice = Some(Notice::success(format!(
                            "Bought {} × {} for Ⱡ{:.2}",
                            qty, name, cost
                        )));
                        self.advance_cycle();
                    }
                    Err(e) => self.notice = Some(Notice::error(e.to_string())),
                }
            }

            Command::Sell { id, qty } => {
                let (price, name) = match self.market.find(id) {
                    Ok(asset) => (asset.price, asset.name),
                    Err(e) => {
                        self.notice = Some(Notice::error(e.to_string()));
                        return;
                    }
                };
                match trade::sell(&mut self.player, id, price, qty) {
                    Ok(proceeds) => {
                        self.notice = Some(Notice::success(format!(
                            "Sold {} × {} for Ⱡ{:.2}",
                            qty, name, proceeds
                        )));
                        self.advance_cycle();
                    }
                    Err(e) => self.notice = Some(Notice::error(e.to_string())),
                }
            }

            Command::Stock { qty } => match trade::buy_supplies(&mut self.player, qty) {
                Ok(cost) => {
                    self.notice = Some(Notice::success(format!(
                        "Restocked {} supply unit{} for Ⱡ{:.2}",
                        qty,
                        if qty == 1 { "" } else { "s" },
                        cost
                    )));
                    self.advance_cycle();
                }
                Err(e) => self.notice = Some(Notice::error(e.to_string())),
            },

            Command::Wait => {
                self.notice = Some(Notice::info("You wait. The floor churns on without you."));
                self.advance_cycle();
            }

            Command::Hab => {
                if self.player.lux >= HAB_COST {
                    self.player.lux -= HAB_COST;
                    self.outcome = Some(GameOutcome::Victory {
                        cycle: self.market.cycle(),
                        lux_left: self.player.lux,
                    });
                } else {
                    self.notice = Some(Notice::error(format!(
                        "The habitat costs Ⱡ{:.0} — you are Ⱡ{:.2} short",
                        HAB_COST,
                        HAB_COST - self.player.lux
                    )));
                }
            }

            Command::Status => {
                let worth = trade::net_worth(&self.player, &self.market.snapshot());
                self.notice = Some(Notice::info(format!(
                    "Net worth Ⱡ{:.2} | supplies {} | {} cycles until collapse",
                    worth,
                    self.player.supplies,
                    self.market.total_cycles().saturating_sub(self.market.cycle())
                )));
            }

            // Shell-level commands; nothing to do at the session layer.
            Command::Help | Command::Quit => {}
        }
    }

    /// Take (and clear) the pending notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// How the run ended, if it has.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Current net worth marked to the live snapshot.
    pub fn net_worth(&self) -> f64 {
        trade::net_worth(&self.player, &self.market.snapshot())
    }

    fn advance_cycle(&mut self) {
        self.market.tick();
        trade::consume_supplies(&mut self.player);

        if !self.player.alive {
            self.outcome = Some(GameOutcome::Starved {
                cycle: self.market.cycle(),
            });
        } else if self.market.collapsed() {
            self.outcome = Some(GameOutcome::Collapsed {
                net_worth: self.net_worth(),
            });
        }
    }
}
