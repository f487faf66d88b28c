//! Statistical building blocks for the samplab simulator.
//!
//! This crate provides the numeric kernels the simulation engine is built on:
//!
//! - **Descriptive statistics**: mean, median, sample standard deviation, and
//!   proportion over raw sample values
//! - **Weighted summaries**: mean, population standard deviation, and median
//!   over binned (histogram) counts, all in O(bins)
//! - **Domain mapping**: mapping values into fixed-width bins over a closed
//!   range, and back to bin-center values
//!
//! # Modules
//!
//! - [`descriptive`]: point statistics over raw samples
//! - [`weighted`]: summaries over histogram weights
//! - [`domain`]: value range and bin index mapping
//!
//! # Examples
//!
//! ## Computing sample statistics
//!
//! ```
//! use samplab_stats::descriptive;
//!
//! let values = [0.2, 0.4, 0.6, 0.8];
//! assert_eq!(descriptive::mean(&values), Some(0.5));
//! assert_eq!(descriptive::median(&values), Some(0.5));
//! ```
//!
//! ## Mapping a value into a domain bin
//!
//! ```
//! use samplab_stats::domain::Domain;
//!
//! let domain = Domain::UNIT;
//! assert_eq!(domain.bin_of(0.51, 10), 5);
//! assert_eq!(domain.bin_of(1.0, 10), 9); // clamped into the last bin
//! ```

pub mod descriptive;
pub mod domain;
pub mod weighted;
