//! Game-state core of an alfajor-themed incremental clicker game.
//!
//! Pure logic, no rendering or IO: the embedding frontend reads
//! [`GameState`], dispatches [`Action`]s through [`logic::apply`], and
//! displays the returned [`Notice`]s. All mutation is synchronous and
//! event-driven; every transition applies fully or not at all.

pub mod actions;
pub mod casino;
pub mod logic;
pub mod math;
pub mod notice;
pub mod state;

pub use actions::{Action, RestockOrder};
pub use casino::Multiplier;
pub use notice::{Notice, Severity};
pub use state::GameState;
