//! Text command parsing for the trade prompt.
//!
//! The prompt is the only input surface: every action the player can take is
//! a short typed command. Parsing never touches game state: a malformed line
//! produces a [`ParseError`] and nothing else.

use crate::market::AssetId;
use std::fmt;

/// A fully parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Market order: buy `qty` shares of asset `id` at the current price.
    Buy { id: AssetId, qty: u64 },
    /// Liquidate `qty` shares of asset `id` at the current price.
    Sell { id: AssetId, qty: u64 },
    /// Buy `qty` supply units at the fixed supply price.
    Stock { qty: u32 },
    /// Let one cycle pass without trading.
    Wait,
    /// Buy the habitat and win the run.
    Hab,
    /// Report net worth and supplies without spending a cycle.
    Status,
    /// Show the command reference overlay.
    Help,
    /// Leave the run.
    Quit,
}

impl Command {
    /// True for actions that advance the market by one cycle.
    pub fn costs_cycle(&self) -> bool {
        matches!(
            self,
            Self::Buy { .. } | Self::Sell { .. } | Self::Stock { .. } | Self::Wait
        )
    }
}

/// Why a command line failed to parse. Surfaced as a prompt message; no state
/// is mutated and no cycle passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    /// The command needs an argument that was not given.
    MissingArgument(&'static str),
    /// A quantity argument was non-numeric or zero.
    InvalidQuantity(String),
    /// An asset id argument was non-numeric.
    InvalidAssetId(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "type a command, or 'help'"),
            Self::UnknownCommand(word) => write!(f, "unknown command '{}' — try 'help'", word),
            Self::MissingArgument(what) => write!(f, "missing {}", what),
            Self::InvalidQuantity(raw) => write!(f, "'{}' is not a valid quantity", raw),
            Self::InvalidAssetId(raw) => write!(f, "'{}' is not an asset number", raw),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_qty(raw: &str) -> Result<u64, ParseError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(ParseError::InvalidQuantity(raw.to_string())),
        Ok(qty) => Ok(qty),
    }
}

fn parse_id(raw: &str) -> Result<AssetId, ParseError> {
    raw.parse::<u32>()
        .map(AssetId)
        .map_err(|_| ParseError::InvalidAssetId(raw.to_string()))
}

/// Parse one prompt line. Case-insensitive, whitespace-separated, with short
/// aliases for the common commands.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let lowered = line.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let verb = words.next().ok_or(ParseError::Empty)?;
    let arg1 = words.next();
    let arg2 = words.next();

    match verb {
        "buy" | "b" => {
            let id = parse_id(arg1.ok_or(ParseError::MissingArgument("asset number"))?)?;
            let qty = parse_qty(arg2.ok_or(ParseError::MissingArgument("quantity"))?)?;
            Ok(Command::Buy { id, qty })
        }
        "sell" | "s" => {
            let id = parse_id(arg1.ok_or(ParseError::MissingArgument("asset number"))?)?;
            let qty = parse_qty(arg2.ok_or(ParseError::MissingArgument("quantity"))?)?;
            Ok(Command::Sell { id, qty })
        }
        "stock" | "supplies" => {
            let qty = parse_qty(arg1.ok_or(ParseError::MissingArgument("quantity"))?)?;
            let qty = u32::try_from(qty)
                .map_err(|_| ParseError::InvalidQuantity(arg1.unwrap_or_default().to_string()))?;
            Ok(Command::Stock { qty })
        }
        "wait" | "w" => Ok(Command::Wait),
        "hab" | "habitat" => Ok(Command::Hab),
        "status" | "port" | "p" => Ok(Command::Status),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buy() {
        assert_eq!(
            parse_command("buy 3 10"),
            Ok(Command::Buy {
                id: AssetId(3),
                qty: 10
            })
        );
        assert_eq!(
            parse_command("  B 1 1  "),
            Ok(Command::Buy {
                id: AssetId(1),
                qty: 1
            })
        );
    }

    #[test]
    fn test_parse_sell() {
        assert_eq!(
            parse_command("sell 5 2"),
            Ok(Command::Sell {
                id: AssetId(5),
                qty: 2
            })
        );
    }

    #[test]
    fn test_parse_bare_words() {
        assert_eq!(parse_command("wait"), Ok(Command::Wait));
        assert_eq!(parse_command("w"), Ok(Command::Wait));
        assert_eq!(parse_command("hab"), Ok(Command::Hab));
        assert_eq!(parse_command("status"), Ok(Command::Status));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_command("stock 3"), Ok(Command::Stock { qty: 3 }));
        assert_eq!(parse_command("supplies 1"), Ok(Command::Stock { qty: 1 }));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("dance"),
            Err(ParseError::UnknownCommand("dance".to_string()))
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            parse_command("buy"),
            Err(ParseError::MissingArgument("asset number"))
        );
        assert_eq!(
            parse_command("buy 3"),
            Err(ParseError::MissingArgument("quantity"))
        );
        assert_eq!(
            parse_command("stock"),
            Err(ParseError::MissingArgument("quantity"))
        );
    }

    #[test]
    fn test_malformed_quantity() {
        assert_eq!(
            parse_command("buy 3 lots"),
            Err(ParseError::InvalidQuantity("lots".to_string()))
        );
        assert_eq!(
            parse_command("buy 3 0"),
            Err(ParseError::InvalidQuantity("0".to_string()))
        );
        assert_eq!(
            parse_command("buy 3 -2"),
            Err(ParseError::InvalidQuantity("-2".to_string()))
        );
    }

    #[test]
    fn test_malformed_asset_id() {
        assert_eq!(
            parse_command("buy helios 2"),
            Err(ParseError::InvalidAssetId("helios".to_string()))
        );
    }

    #[test]
    fn test_cycle_costs() {
        assert!(Command::Wait.costs_cycle());
        assert!(Command::Buy {
            id: AssetId(1),
            qty: 1
        }
        .costs_cycle());
        assert!(Command::Stock { qty: 1 }.costs_cycle());
        assert!(!Command::Status.costs_cycle());
        assert!(!Command::Hab.costs_cycle());
        assert!(!Command::Help.costs_cycle());
        assert!(!Command::Quit.costs_cycle());
    }
}
