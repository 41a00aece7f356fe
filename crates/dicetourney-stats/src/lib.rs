//! Statistical utilities for die roll histories.
//!
//! This crate provides the numeric building blocks used by the tournament analyzer:
//!
//! - **Descriptive statistics**: mean, median, population variance and standard deviation
//! - **Face counts**: frequency of each die face in a roll history
//! - **Rounding**: fixed-precision rounding used for derived scores
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing roll histories
//! - [`faces`]: Per-face frequency counting for six-sided dice
//! - [`rounding`]: Decimal rounding helpers
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use dicetourney_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::from_rolls(&[2, 4, 4, 4, 5, 5, 6, 2]).unwrap();
//! assert_eq!(stats.count, 8);
//! assert_eq!(stats.mean, 4.0);
//! ```
//!
//! ## Counting faces
//!
//! ```
//! use dicetourney_stats::faces::FaceCounts;
//!
//! let counts = FaceCounts::from_rolls(&[1, 1, 6, 3]);
//! assert_eq!(counts.count(1), 2);
//! assert_eq!(counts.distinct_faces(), 3);
//! assert!(!counts.covers_all_faces());
//! ```
//!
//! ## Rounding to one decimal place
//!
//! ```
//! use dicetourney_stats::rounding::round_to_tenths;
//!
//! assert_eq!(round_to_tenths(566.666_666), 566.7);
//! ```

pub mod descriptive;
pub mod faces;
pub mod rounding;
