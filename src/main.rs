//! Feld, a terminal market-collapse trading game.
//!
//! The binary is the shell: terminal setup, the input loop, and screen
//! dispatch. All game logic lives in the library ([`feld::session`] down).

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use feld::commands::{self, Command};
use feld::session::{GameOutcome, GameSession, Notice};
use feld::{build_info, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

enum Screen {
    Game,
    GameOver,
}

fn main() -> io::Result<()> {
    let mut seed: Option<u64> = None;

    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!(
                    "feld {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Feld - Terminal Market-Collapse Trading Game\n");
                println!("Usage: feld [OPTIONS]\n");
                println!("Options:");
                println!("  --seed <N>  Fix the market's random seed (reproducible run)");
                println!("  --version   Show version information");
                println!("  --help      Show this help message");
                std::process::exit(0);
            }
            "--seed" | "-s" => {
                let Some(raw) = args.get(i + 1) else {
                    eprintln!("--seed needs a number");
                    std::process::exit(1);
                };
                match raw.parse::<u64>() {
                    Ok(parsed) => {
                        seed = Some(parsed);
                        i += 1;
                    }
                    Err(_) => {
                        eprintln!("'{}' is not a valid seed", raw);
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'feld --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut session = GameSession::new(seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Restore terminal before printing anything
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match session.outcome() {
        Some(GameOutcome::Victory { cycle, lux_left }) => {
            println!(
                "Habitat secured on cycle {} with Ⱡ{:.2} left over. Sleep well, colonist.",
                cycle, lux_left
            );
        }
        Some(GameOutcome::Starved { cycle }) => {
            println!("Life support gave out on cycle {}. The exchange noted your passing.", cycle);
        }
        Some(GameOutcome::Collapsed { net_worth }) => {
            println!(
                "The market collapsed around you. Final net worth: Ⱡ{:.2}.",
                net_worth
            );
        }
        None => println!("You walk off the exchange floor. The tickers keep falling behind you."),
    }

    result
}

/// The interactive loop. Returns when the player quits or the run ends and a
/// key is pressed on the game-over screen.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    let mut screen = Screen::Game;
    let mut input = String::new();
    let mut last_notice: Option<Notice> = None;
    let mut help_open = false;

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            ui::draw_ui(frame, session, last_notice.as_ref(), &input, help_open);
            if let (Screen::GameOver, Some(outcome)) = (&screen, session.outcome()) {
                ui::game_over::render_game_over(frame, area, &outcome);
            }
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Ctrl-C leaves cleanly from any screen
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(());
        }

        match screen {
            Screen::GameOver => return Ok(()),
            Screen::Game => {
                if help_open {
                    help_open = false;
                    continue;
                }
                match key.code {
                    KeyCode::Char(c) => input.push(c),
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Esc => input.clear(),
                    KeyCode::Enter => {
                        let line = std::mem::take(&mut input);
                        match commands::parse_command(&line) {
                            Ok(Command::Help) => help_open = true,
                            Ok(Command::Quit) => return Ok(()),
                            Ok(cmd) => {
                                session.apply(cmd);
                                last_notice = session.take_notice();
                                if session.outcome().is_some() {
                                    screen = Screen::GameOver;
                                }
                            }
                            Err(e) => last_notice = Some(Notice::error(e.to_string())),
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
