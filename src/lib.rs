//! # Tally
//!
//! Parallel word-frequency counting with a MapReduce-style worker pool.
//!
//! ## Usage
//!
//! ```bash
//! tally input.txt [--workers N] [--json]
//! ```
//!
//! ## Modules
//!
//! - `count` - Partition/map/reduce pipeline and the coordinator that runs it
//! - `logging` - Tracing subscriber setup for binaries
pub mod count;
pub mod logging;
