//! Chip balance tiers.

use serde::{Deserialize, Serialize};

/// Partition of participants by chip balance.
///
/// The variant order is the display order: `High`, then `Medium`, then `Low`.
/// Ordered collections keyed by `ChipTier` iterate in that order.
///
/// | Tier     | Chips           |
/// |----------|-----------------|
/// | `High`   | `> 1000`        |
/// | `Medium` | `500 ..= 1000`  |
/// | `Low`    | `< 500`         |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChipTier {
    #[display("HIGH")]
    High,
    #[display("MEDIUM")]
    Medium,
    #[display("LOW")]
    Low,
}

impl ChipTier {
    /// All tiers in display order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Lowest chip balance of the medium tier.
    pub const MEDIUM_MIN_CHIPS: u32 = 500;
    /// Highest chip balance of the medium tier.
    pub const MEDIUM_MAX_CHIPS: u32 = 1000;

    /// Returns the tier for a chip balance.
    ///
    /// ```
    /// use dicetourney_analysis::chip_tier::ChipTier;
    ///
    /// assert_eq!(ChipTier::of(1001), ChipTier::High);
    /// assert_eq!(ChipTier::of(1000), ChipTier::Medium);
    /// assert_eq!(ChipTier::of(499), ChipTier::Low);
    /// ```
    #[must_use]
    pub const fn of(chips: u32) -> Self {
        if chips > Self::MEDIUM_MAX_CHIPS {
            Self::High
        } else if chips >= Self::MEDIUM_MIN_CHIPS {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
