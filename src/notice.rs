//! User-facing notices emitted by the transitions.
//!
//! Exactly two severities exist: `Info` covers blocking guidance (including
//! a lost casino round), `Success` covers positive reinforcement. The
//! frontend decides how to toast each one; the core never waits for an
//! acknowledgement.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Success,
}

/// A tagged, ready-to-display message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }
}

/// The fixed message catalog.
pub mod messages {
    use super::Notice;

    pub fn cant_buy_item() -> Notice {
        Notice::info("💸 You can't buy this item")
    }

    pub fn cant_buy_stock() -> Notice {
        Notice::info("You can't buy more Stock....")
    }

    pub fn cant_buy_capacity() -> Notice {
        Notice::info("You can't buy it")
    }

    pub fn no_stock() -> Notice {
        Notice::info("You don't have Stock!")
    }

    /// Shown by the frontend when the casino is opened below the level gate.
    pub fn casino_level_required() -> Notice {
        Notice::info("You must have 10 lvl!")
    }

    pub fn casino_check_stake() -> Notice {
        Notice::info("You can't play... Check stake or select multiplier")
    }

    pub fn min_stake() -> Notice {
        Notice::info("Minimum stake-value is 500!")
    }

    pub fn level_up(level: u32) -> Notice {
        Notice::success(format!("You have reached the level {level}!"))
    }

    pub fn casino_win(amount: f64) -> Notice {
        Notice::success(format!("You win. Your award: {amount}"))
    }

    pub fn casino_lose() -> Notice {
        Notice::info("You lose... Try again :-D")
    }
}
