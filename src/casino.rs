//! Casino odds — pure functions, no `GameState` mutation here.
//!
//! The multiplier table carries both the payout and the win threshold, so a
//! new tier is a new variant plus two table rows, not new branch logic.

use serde::Serialize;

/// Lowest allowed stake, and the step for raising/lowering it.
pub const MIN_STAKE: f64 = 500.0;
pub const STAKE_INCREMENT: f64 = 500.0;

/// Level the player must reach before the frontend opens the casino. This is
/// a presentation-layer gate; `Play` itself does not re-check it.
pub const MIN_LEVEL: u32 = 10;

/// Selectable payout multipliers. Lower payout means better odds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Multiplier {
    Low,
    Medium,
    High,
}

impl Multiplier {
    /// All multipliers in display order.
    pub fn all() -> &'static [Multiplier] {
        &[Multiplier::Low, Multiplier::Medium, Multiplier::High]
    }

    /// Stake multiple credited back on a win.
    pub fn payout(&self) -> f64 {
        match self {
            Multiplier::Low => 1.25,
            Multiplier::Medium => 1.50,
            Multiplier::High => 2.00,
        }
    }

    /// A roll in `[0, 100)` wins iff it is at most this threshold.
    pub fn win_threshold(&self) -> u32 {
        match self {
            Multiplier::Low => 33,
            Multiplier::Medium => 20,
            Multiplier::High => 10,
        }
    }

    /// Win/loss decision for a given roll.
    pub fn wins(&self, roll: u32) -> bool {
        roll <= self.win_threshold()
    }
}

/// Amount credited back on a win.
pub fn winnings(multiplier: Multiplier, stake: f64) -> f64 {
    multiplier.payout() * stake
}

/// A round may start only with a multiplier selected and the stake strictly
/// covered by the current balance.
pub fn can_play(clicks: f64, stake: f64, multiplier: Option<Multiplier>) -> bool {
    multiplier.is_some() && clicks - stake > 0.0
}

/// Whether the casino is open to a player of this level.
pub fn unlocked(level: u32) -> bool {
    level >= MIN_LEVEL
}

/// Wager state: Idle (`multiplier` unset, stake at the minimum) or
/// Configured (multiplier chosen, stake adjustable). A play resolves back
/// to Idle regardless of outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CasinoState {
    pub stake: f64,
    pub multiplier: Option<Multiplier>,
}

impl CasinoState {
    pub fn new() -> Self {
        Self {
            stake: MIN_STAKE,
            multiplier: None,
        }
    }

    /// Back to Idle: minimum stake, no multiplier.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for CasinoState {
    fn default() -> Self {
        Self::new()
    }
}
