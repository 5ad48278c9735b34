//! One round of play: match resolution, power-ups and the controller.
//!
//! ## Key Types
//!
//! - `Round`: owns the board and drives it one tick at a time
//! - `Resolver`: the pending pair and the counters derived from it
//! - `PowerupWallet`: remaining shuffle/bomb/freeze uses
//! - `RoundSpec` / `Mode`: what a round is started with
//! - `RoundReport`: what a finished round hands to progression

pub mod controller;
pub mod mode;
pub mod powerup;
pub mod report;
pub mod resolver;

pub use controller::Round;
pub use mode::{Mode, RoundSpec};
pub use powerup::PowerupWallet;
pub use report::RoundReport;
pub use resolver::{Resolution, Resolver};
