//! Statistics and classification of dice tournament participants.
//!
//! This crate answers questions about a snapshot of
//! [`Participant`](dicetourney_engine::Participant)s and their recorded rolls.
//!
//! # Overview
//!
//! The [`analyzer::Analyzer`] exposes ten independent queries:
//!
//! | Query                      | Result                                         |
//! |----------------------------|------------------------------------------------|
//! | `average_scores`           | mean roll per participant                      |
//! | `top_three_by_average`     | three best averages, best first                |
//! | `losers`                   | rolled a 1 at least three times                |
//! | `lucky`                    | rolled a 6 at least four times                 |
//! | `grouped_by_chips`         | participants per [`chip_tier::ChipTier`]       |
//! | `stable_players`           | at least eight rolls of 4 or higher            |
//! | `risky_players`            | two 1s in a row                                |
//! | `balanced_dice_players`    | every face seen at least once                  |
//! | `luck_index`               | `(sum / 6) * chips`, rounded to one decimal    |
//! | `max_variance_player`      | widest spread of rolls, if any participant     |
//!
//! [`report::TournamentReport`] collects every result into serializable form.
//!
//! # Example
//!
//! ```
//! use dicetourney_analysis::analyzer::Analyzer;
//! use dicetourney_engine::{Die, Roster};
//!
//! let mut roster = Roster::default_lineup()?;
//! roster.play_rounds(&mut Die::new(), 10)?;
//!
//! let analyzer = Analyzer::new(roster.participants());
//! let top = analyzer.top_three_by_average();
//! assert_eq!(top.len(), 3);
//!
//! let groups = analyzer.grouped_by_chips();
//! assert_eq!(groups.len(), 3);
//! # Ok::<(), dicetourney_engine::RosterError>(())
//! ```

pub mod analyzer;
pub mod chip_tier;
pub mod report;
