//! Monte Carlo driver for Blotkarz vs Figurant
//!
//! Each round deals one five card hand per side, each from that side's own
//! deck, scores both with the tier evaluator and counts the round as a
//! Blotkarz win only when its tier is strictly higher. Ties and Figurant wins
//! are tracked separately but both count against the headline win chance.
//!
//! # Example
//!
//! ```
//! use blotkarz::simulation::SimulationBuilder;
//!
//! let result = SimulationBuilder::new()
//!     .num_rounds(1000)
//!     .seed(42)
//!     .workers(2)
//!     .build()
//!     .unwrap()
//!     .run();
//!
//! assert_eq!(1000, result.rounds);
//! println!("{result}");
//! println!("{}", result.to_markdown());
//! ```

mod builder;
mod config;
mod error;
mod exact;
mod result;
mod runner;
mod stats;

pub use builder::SimulationBuilder;
pub use config::{DEFAULT_NUM_ROUNDS, Side, SimulationConfig};
pub use error::{Result, SimulationError};
pub use exact::{ExactOdds, exact_odds, tier_distribution};
pub use result::{RoundOutcome, SimulationResult};
pub use runner::{Simulation, run_simulation};
pub use stats::TierHistogram;
