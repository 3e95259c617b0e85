//! Game module - computer move, round bookkeeping and the page session
//!
//! Re-exports only. All logic in submodules.

mod choice;
mod round;
mod session;

pub use choice::{judge, Choice, Outcome};
pub use round::{Round, RoundState, Transition};
pub use session::GameSession;
