//! Game state definitions: the `GameState` aggregate, the upgrade catalog,
//! tuning constants and the boundary-policy configuration.

use serde::Serialize;

use crate::casino::CasinoState;

// ── Tuning ────────────────────────────────────────────────────────────

/// XP granted per successful click.
pub const XP_PER_CLICK: u32 = 2;
/// How much the XP requirement grows at each level-up.
pub const XP_INCREMENT_PER_LEVEL: u32 = 100;
/// How much the per-unit stock price rises at each level-up.
pub const STOCK_PRICE_INCREMENT: f64 = 0.5;
/// Capacity price is always this multiple of the current stock price.
pub const CAPACITY_PRICE_MULTIPLIER: f64 = 10.0;

/// Restock pack sizes offered by the stock station.
pub const RESTOCK_SMALL: f64 = 1.0;
pub const RESTOCK_MEDIUM: f64 = 10.0;

/// Capacity pack sizes offered by the capacity shop.
pub const CAPACITY_SMALL: f64 = 50.0;
pub const CAPACITY_MEDIUM: f64 = 100.0;
pub const CAPACITY_LARGE: f64 = 500.0;

// ── Boundary policies ─────────────────────────────────────────────────

/// Whether a boundary comparison treats exact equality as inside or outside.
///
/// Two comparisons are deliberate policy rather than hard-coded: whether a
/// click may drain stock to exactly zero, and whether a fixed restock may
/// land exactly on capacity. The defaults keep the strict readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Boundary {
    Exclusive,
    Inclusive,
}

/// Boundary policies for the two ambiguous comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundaryRules {
    /// Click: `Exclusive` requires `stock - stock_usage > 0`, `Inclusive`
    /// lets the last click drain stock to exactly zero.
    pub stock_drain: Boundary,
    /// Fixed-amount restock: `Exclusive` requires `stock + n < stock_max`,
    /// `Inclusive` allows filling exactly to capacity.
    pub restock_fill: Boundary,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        Self {
            stock_drain: Boundary::Exclusive,
            restock_fill: Boundary::Exclusive,
        }
    }
}

// ── Upgrades ──────────────────────────────────────────────────────────

/// What buying a slot does.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum UpgradeEffect {
    /// Adds to per-click demand and to per-click stock usage.
    Standard {
        demand_delta: f64,
        stock_usage_delta: f64,
    },
    /// Terminal slot: replaces the whole state with the prestige baseline.
    Prestige,
}

/// One entry of the upgrade catalog. The catalog itself is fixed
/// configuration; only `owned` ever changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpgradeSlot {
    pub name: String,
    pub price: f64,
    /// Capacity the player must have unlocked before this slot sells.
    pub min_stock_required: f64,
    pub effect: UpgradeEffect,
    /// How many times this slot has been bought.
    pub owned: u32,
}

impl UpgradeSlot {
    fn standard(
        name: &str,
        price: f64,
        min_stock_required: f64,
        demand_delta: f64,
        stock_usage_delta: f64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            min_stock_required,
            effect: UpgradeEffect::Standard {
                demand_delta,
                stock_usage_delta,
            },
            owned: 0,
        }
    }
}

/// The fixed nine-slot catalog. The last slot is the prestige reset.
pub fn upgrade_catalog() -> Vec<UpgradeSlot> {
    vec![
        UpgradeSlot::standard("Tapita", 100.0, 50.0, 1.0, 0.1),
        UpgradeSlot::standard("Dulce de leche", 300.0, 100.0, 3.0, 0.2),
        UpgradeSlot::standard("Coco rallado", 600.0, 150.0, 5.0, 0.3),
        UpgradeSlot::standard("Baño de chocolate", 800.0, 300.0, 7.0, 0.5),
        UpgradeSlot::standard("Triple tapa", 950.0, 450.0, 12.0, 1.0),
        UpgradeSlot::standard("Merengue italiano", 1_900.0, 600.0, 14.0, 1.2),
        UpgradeSlot::standard("Maicena premium", 2_800.0, 1_800.0, 21.0, 2.0),
        UpgradeSlot::standard("Envoltorio dorado", 5_000.0, 2_500.0, 49.0, 4.0),
        UpgradeSlot {
            name: "Receta nueva".into(),
            price: 10_000_000.0,
            min_stock_required: 5_000.0,
            effect: UpgradeEffect::Prestige,
            owned: 0,
        },
    ]
}

// ── Game state ────────────────────────────────────────────────────────

/// Full state of one play session. Created once at game start, mutated in
/// place by the transition functions, discarded at session end.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    /// Accumulated spendable resource.
    pub clicks: f64,
    /// Resource gained per successful click.
    pub demand: f64,
    /// Progression tier, starts at 1.
    pub level: u32,
    /// Current depletable inventory.
    pub stock: f64,
    /// Capacity ceiling for `stock`.
    pub stock_max: f64,
    /// Stock consumed per click.
    pub stock_usage: f64,
    /// Cost per unit of restock.
    pub stock_price: f64,
    /// Cost per unit of capacity.
    pub capacity_price: f64,
    pub xp: u32,
    pub xp_to_next: u32,
    /// Fixed catalog; only the per-slot `owned` counters mutate.
    pub upgrades: Vec<UpgradeSlot>,
    pub casino: CasinoState,
    /// Boundary policies (see [`BoundaryRules`]); survive prestige.
    pub rules: BoundaryRules,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            clicks: 0.0,
            demand: 1.0,
            level: 1,
            stock: 100.0,
            stock_max: 100.0,
            stock_usage: 0.6,
            stock_price: 1.0,
            capacity_price: 10.0,
            xp: 0,
            xp_to_next: 50,
            upgrades: upgrade_catalog(),
            casino: CasinoState::new(),
            rules: BoundaryRules::default(),
        }
    }

    /// The fixed state a prestige purchase resets to: less stock, pricier
    /// and hungrier production, everything else back to the start. The
    /// boundary rules are configuration, not progress, so they carry over.
    pub fn prestige_baseline(rules: BoundaryRules) -> Self {
        Self {
            clicks: 0.0,
            demand: 1.0,
            level: 1,
            stock: 80.0,
            stock_max: 100.0,
            stock_usage: 1.0,
            stock_price: 2.0,
            capacity_price: 10.0,
            xp: 0,
            xp_to_next: 50,
            upgrades: upgrade_catalog(),
            casino: CasinoState::new(),
            rules,
        }
    }

    /// Stock fill as a 0-100 percentage, for the stock bar.
    pub fn stock_percentage(&self) -> u32 {
        crate::math::percentage(self.stock, self.stock_max)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
