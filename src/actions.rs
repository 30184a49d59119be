//! Player intents dispatched into the reducer.

use crate::casino::Multiplier;

/// How much stock a restock order asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RestockOrder {
    /// A fixed number of units (the stock station sells 1 or 10 at a time).
    Units(f64),
    /// Fill to exactly `stock_max`, costed per missing unit.
    FillToMax,
}

/// One discrete user action. Each is handled to completion before the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Produce and sell one alfajor.
    Click,
    Restock(RestockOrder),
    /// Buy this many units of stock capacity.
    BuyCapacity(f64),
    /// Buy the upgrade catalog slot at this index.
    BuyUpgrade(usize),
    /// Select a casino payout multiplier.
    SetMultiplier(Multiplier),
    /// Raise the casino stake by one increment.
    RaiseStake,
    /// Lower the casino stake by one increment (not below the minimum).
    LowerStake,
    /// Resolve one casino round.
    Play,
}
