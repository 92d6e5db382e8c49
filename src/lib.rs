//! Blotkarz vs Figurant.
//!
//! Estimates how often a five card hand dealt from the numbered cards
//! (Blotkarz, two through ten) beats a five card hand dealt from the face
//! cards (Figurant, Jack through Ace) under a simplified hand ranking.
//!
//! Each side draws from its own deck, the side's ranks crossed with the four
//! suits, so both sides can hold the very same card in the same round.
//!
//! # Evaluating a hand
//!
//! ```
//! use blotkarz::core::{Hand, Rankable, Tier};
//!
//! let hand = Hand::new_from_str("2s3s4s5s6s").unwrap();
//! assert_eq!(Tier::Poker, hand.tier());
//! ```
//!
//! # Running a simulation
//!
//! ```
//! use blotkarz::simulation::SimulationBuilder;
//!
//! let result = SimulationBuilder::new()
//!     .num_rounds(5_000)
//!     .seed(42)
//!     .build()
//!     .unwrap()
//!     .run();
//!
//! assert!(result.win_rate() > 0.0 && result.win_rate() < 1.0);
//! println!("{result}");
//! ```

/// Cards, hands, pools and the tier evaluator.
pub mod core;

/// Configuration, the Monte Carlo driver and its results.
pub mod simulation;
