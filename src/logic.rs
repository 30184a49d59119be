//! Game transitions — pure functions over `GameState`, no rendering / IO.
//!
//! Every guard runs before any field is touched, so each transition either
//! applies fully or not at all. Failures come back as [`Notice`] values,
//! never as panics or errors.

use rand::Rng;

use crate::actions::{Action, RestockOrder};
use crate::casino::{self, Multiplier, MIN_STAKE, STAKE_INCREMENT};
use crate::math;
use crate::notice::{messages, Notice};
use crate::state::{
    Boundary, GameState, UpgradeEffect, STOCK_PRICE_INCREMENT,
    CAPACITY_PRICE_MULTIPLIER, XP_INCREMENT_PER_LEVEL, XP_PER_CLICK,
};

// ── Dispatch ──────────────────────────────────────────────────────────

/// Apply one action to the state, returning the notices to display.
/// The RNG is only consulted for `Action::Play`.
pub fn apply<R: Rng>(state: &mut GameState, action: Action, rng: &mut R) -> Vec<Notice> {
    match action {
        Action::Click => click(state),
        Action::Restock(order) => restock(state, order).into_iter().collect(),
        Action::BuyCapacity(amount) => buy_capacity(state, amount).into_iter().collect(),
        Action::BuyUpgrade(index) => buy_upgrade(state, index).into_iter().collect(),
        Action::SetMultiplier(m) => {
            set_multiplier(state, m);
            Vec::new()
        }
        Action::RaiseStake => {
            raise_stake(state);
            Vec::new()
        }
        Action::LowerStake => lower_stake(state).into_iter().collect(),
        Action::Play => play(state, rng),
    }
}

// ── Click / stock economy ─────────────────────────────────────────────

/// One click: drain stock, earn demand, earn XP, maybe level up.
pub fn click(state: &mut GameState) -> Vec<Notice> {
    let sufficient = match state.rules.stock_drain {
        Boundary::Exclusive => state.stock - state.stock_usage > 0.0,
        Boundary::Inclusive => state.stock - state.stock_usage >= 0.0,
    };
    if !sufficient {
        return vec![messages::no_stock()];
    }

    state.stock -= state.stock_usage;
    state.clicks += state.demand;
    state.xp += XP_PER_CLICK;
    check_level_up(state).into_iter().collect()
}

/// Level-up check, run after every successful click.
fn check_level_up(state: &mut GameState) -> Option<Notice> {
    if state.xp < state.xp_to_next {
        return None;
    }
    state.xp = 0;
    state.level += 1;
    state.xp_to_next += XP_INCREMENT_PER_LEVEL;
    state.stock_price += STOCK_PRICE_INCREMENT;
    state.capacity_price = CAPACITY_PRICE_MULTIPLIER * state.stock_price;
    log::info!("level up -> {}", state.level);
    Some(messages::level_up(state.level))
}

/// Buy stock, either a fixed pack or a fill to capacity. No partial fills.
pub fn restock(state: &mut GameState, order: RestockOrder) -> Option<Notice> {
    match order {
        RestockOrder::FillToMax => {
            let cost =
                math::full_restock_cost(state.stock, state.stock_max, state.stock_price);
            if cost <= state.clicks {
                state.clicks -= cost;
                state.stock = state.stock_max;
                None
            } else {
                Some(messages::cant_buy_stock())
            }
        }
        RestockOrder::Units(amount) => {
            let cost = state.stock_price * amount;
            let has_space = state.stock_max > state.stock;
            let can_afford = state.clicks > cost;
            let within = math::within_bounds(
                state.stock,
                amount,
                state.stock_max,
                state.rules.restock_fill,
            );
            if has_space && can_afford && within {
                state.clicks -= cost;
                state.stock += amount;
                None
            } else {
                Some(messages::cant_buy_stock())
            }
        }
    }
}

/// Buy `amount` units of stock capacity. Cost must be strictly below the
/// current balance.
pub fn buy_capacity(state: &mut GameState, amount: f64) -> Option<Notice> {
    let cost = state.capacity_price * amount;
    if cost < state.clicks {
        state.stock_max += amount;
        state.clicks -= cost;
        None
    } else {
        Some(messages::cant_buy_capacity())
    }
}

// ── Upgrades ──────────────────────────────────────────────────────────

/// Buy the catalog slot at `index`. A standard slot applies its deltas
/// linearly per purchase; the prestige slot replaces the whole state.
pub fn buy_upgrade(state: &mut GameState, index: usize) -> Option<Notice> {
    let slot = match state.upgrades.get(index) {
        Some(slot) => slot,
        None => return Some(messages::cant_buy_item()),
    };
    if state.clicks < slot.price || slot.min_stock_required > state.stock_max {
        return Some(messages::cant_buy_item());
    }

    let price = slot.price;
    match slot.effect.clone() {
        UpgradeEffect::Prestige => {
            log::info!("prestige reset at level {}", state.level);
            *state = GameState::prestige_baseline(state.rules);
        }
        UpgradeEffect::Standard {
            demand_delta,
            stock_usage_delta,
        } => {
            state.clicks -= price;
            state.demand += demand_delta;
            state.stock_usage = math::round2(state.stock_usage + stock_usage_delta);
            state.upgrades[index].owned += 1;
        }
    }
    None
}

// ── Casino ────────────────────────────────────────────────────────────

pub fn set_multiplier(state: &mut GameState, multiplier: Multiplier) {
    state.casino.multiplier = Some(multiplier);
}

/// Stake goes up unconditionally.
pub fn raise_stake(state: &mut GameState) {
    state.casino.stake += STAKE_INCREMENT;
}

/// Stake goes down only while above the minimum.
pub fn lower_stake(state: &mut GameState) -> Option<Notice> {
    if state.casino.stake > MIN_STAKE {
        state.casino.stake -= STAKE_INCREMENT;
        None
    } else {
        Some(messages::min_stake())
    }
}

/// Play one casino round: draw a roll in `[0, 100)` and resolve it.
pub fn play<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<Notice> {
    let stake = state.casino.stake;
    let multiplier = match state.casino.multiplier {
        Some(m) if casino::can_play(state.clicks, stake, Some(m)) => m,
        _ => return vec![messages::casino_check_stake()],
    };
    let roll = rng.gen_range(0..100u32);
    vec![resolve_round(state, multiplier, stake, roll)]
}

/// Resolve a round for an already-drawn roll: deduct the stake, credit the
/// winnings on a win, and drop back to the idle wager state either way.
/// Split from [`play`] so outcomes are testable without randomness.
pub fn resolve_round(
    state: &mut GameState,
    multiplier: Multiplier,
    stake: f64,
    roll: u32,
) -> Notice {
    state.clicks -= stake;
    let notice = if multiplier.wins(roll) {
        let winnings = casino::winnings(multiplier, stake);
        state.clicks += winnings;
        log::debug!("casino roll {roll}: won {winnings}");
        messages::casino_win(winnings)
    } else {
        log::debug!("casino roll {roll}: lost {stake}");
        messages::casino_lose()
    };
    state.casino.reset();
    notice
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::state::BoundaryRules;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arb_multiplier() -> impl Strategy<Value = Multiplier> {
        prop_oneof![
            Just(Multiplier::Low),
            Just(Multiplier::Medium),
            Just(Multiplier::High),
        ]
    }

    proptest! {
        #[test]
        fn prop_click_conserves_or_rejects(
            stock in 0.0f64..500.0,
            usage in 0.1f64..5.0,
            demand in 1.0f64..50.0,
            clicks in 0.0f64..10_000.0,
        ) {
            let mut state = GameState::new();
            state.stock = stock;
            state.stock_max = 500.0;
            state.stock_usage = usage;
            state.demand = demand;
            state.clicks = clicks;
            let before = state.clone();

            let notices = click(&mut state);

            if stock - usage > 0.0 {
                prop_assert!((state.clicks - (before.clicks + demand)).abs() < 1e-9);
                prop_assert!((state.stock - (before.stock - usage)).abs() < 1e-9);
            } else {
                prop_assert_eq!(&state, &before);
                prop_assert_eq!(notices.len(), 1);
            }
        }

        #[test]
        fn prop_restock_keeps_stock_within_capacity(
            stock in 0.0f64..100.0,
            amount in 0.5f64..50.0,
            clicks in 0.0f64..1_000.0,
        ) {
            let mut state = GameState::new();
            state.stock = stock;
            state.clicks = clicks;
            let before = state.clone();

            let notice = restock(&mut state, RestockOrder::Units(amount));

            prop_assert!(state.stock <= state.stock_max);
            if notice.is_some() {
                prop_assert_eq!(&state, &before);
            } else {
                let cost = before.stock_price * amount;
                prop_assert!((state.clicks - (before.clicks - cost)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_fill_to_max_all_or_nothing(
            stock in 0.0f64..100.0,
            price in 0.5f64..10.0,
            clicks in 0.0f64..2_000.0,
        ) {
            let mut state = GameState::new();
            state.stock = stock;
            state.stock_price = price;
            state.clicks = clicks;
            let before = state.clone();

            let notice = restock(&mut state, RestockOrder::FillToMax);

            if notice.is_none() {
                prop_assert_eq!(state.stock, state.stock_max);
            } else {
                prop_assert_eq!(&state, &before);
            }
        }

        #[test]
        fn prop_buy_capacity_strict_affordability(
            amount in 1.0f64..500.0,
            clicks in 0.0f64..10_000.0,
        ) {
            let mut state = GameState::new();
            state.clicks = clicks;
            let cost = state.capacity_price * amount;
            let before = state.clone();

            let notice = buy_capacity(&mut state, amount);

            if cost < before.clicks {
                prop_assert!(notice.is_none());
                prop_assert!((state.stock_max - (before.stock_max + amount)).abs() < 1e-9);
            } else {
                prop_assert_eq!(&state, &before);
            }
        }

        #[test]
        fn prop_play_is_zero_sum_or_better_transfer(
            seed in 0u64..1_000,
            extra_raises in 0u32..5,
            multiplier in arb_multiplier(),
            clicks in 10_000.0f64..100_000.0,
        ) {
            let mut state = GameState::new();
            state.clicks = clicks;
            set_multiplier(&mut state, multiplier);
            for _ in 0..extra_raises {
                raise_stake(&mut state);
            }
            let stake = state.casino.stake;
            let mut rng = Pcg32::seed_from_u64(seed);

            play(&mut state, &mut rng);

            let lost = (state.clicks - (clicks - stake)).abs() < 1e-9;
            let won = (state.clicks - (clicks - stake + multiplier.payout() * stake)).abs() < 1e-9;
            prop_assert!(lost || won, "clicks {} not a valid post-round balance", state.clicks);
            // Wager always drops back to idle
            prop_assert!(state.casino.multiplier.is_none());
            prop_assert!((state.casino.stake - MIN_STAKE).abs() < 1e-9);
        }

        #[test]
        fn prop_prestige_always_lands_on_baseline(
            clicks in 10_000_000.0f64..50_000_000.0,
            stock_max in 5_000.0f64..20_000.0,
            level in 1u32..100,
        ) {
            let mut state = GameState::new();
            state.clicks = clicks;
            state.stock_max = stock_max;
            state.level = level;

            let notice = buy_upgrade(&mut state, 8);

            prop_assert!(notice.is_none());
            prop_assert_eq!(state, GameState::prestige_baseline(BoundaryRules::default()));
        }

        #[test]
        fn prop_transitions_never_panic(
            action_id in 0usize..9,
            clicks in 0.0f64..1_000_000.0,
            stock in 0.0f64..200.0,
            seed in 0u64..100,
        ) {
            let mut state = GameState::new();
            state.clicks = clicks;
            state.stock = stock.min(state.stock_max);
            let mut rng = Pcg32::seed_from_u64(seed);
            let action = match action_id {
                0 => Action::Click,
                1 => Action::Restock(RestockOrder::Units(10.0)),
                2 => Action::Restock(RestockOrder::FillToMax),
                3 => Action::BuyCapacity(50.0),
                4 => Action::BuyUpgrade(seed as usize % 10),
                5 => Action::SetMultiplier(Multiplier::High),
                6 => Action::RaiseStake,
                7 => Action::LowerStake,
                _ => Action::Play,
            };
            let _ = apply(&mut state, action, &mut rng);
            prop_assert!(state.stock <= state.stock_max + 1e-9);
        }
    }
}
