//! NFL Schedule Builder Library
//!
//! Generates a randomized 18-week schedule for one NFL team from a static
//! league table of 32 teams in 8 divisions.
//!
//! # Examples
//!
//! ```rust
//! use nfl_sched_builder::schedule::generate_schedule;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let schedule = generate_schedule("Buffalo Bills", &mut rng).unwrap();
//!
//! assert_eq!(schedule.weeks().len(), 18);
//! print!("{}", schedule.render_text());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod league;
pub mod logging;
pub mod schedule;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use league::{Conference, Division, find_division};
pub use schedule::{Game, Location, Schedule, generate_schedule, generate_schedule_with_entropy};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
