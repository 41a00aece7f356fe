use std::ops::RangeInclusive;

/// The faces of a six-sided die.
pub const FACES: RangeInclusive<u8> = 1..=6;

/// Number of faces on the die.
pub const NUM_FACES: usize = 6;

/// Frequency of each face in a roll history.
///
/// Index `i` holds the number of times face `i + 1` was rolled. Values outside
/// [`FACES`] are not counted.
///
/// # Examples
///
/// ```
/// use dicetourney_stats::faces::FaceCounts;
///
/// let counts = FaceCounts::from_rolls(&[6, 3, 5, 6, 2, 1, 6, 4, 4, 6]);
/// assert_eq!(counts.count(6), 4);
/// assert_eq!(counts.count_at_least(4), 7);
/// assert!(counts.covers_all_faces());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceCounts {
    counts: [usize; NUM_FACES],
}

impl FaceCounts {
    /// Counts faces in a roll history.
    #[must_use]
    pub fn from_rolls(rolls: &[u8]) -> Self {
        let mut counts = [0; NUM_FACES];
        for &roll in rolls {
            debug_assert!(FACES.contains(&roll), "roll out of range: {roll}");
            if let Some(slot) = Self::index(roll).and_then(|i| counts.get_mut(i)) {
                *slot += 1;
            }
        }
        Self { counts }
    }

    fn index(face: u8) -> Option<usize> {
        FACES
            .contains(&face)
            .then(|| usize::from(face) - 1)
    }

    /// Number of times `face` was rolled. Returns 0 for values outside [`FACES`].
    #[must_use]
    pub fn count(&self, face: u8) -> usize {
        Self::index(face).map_or(0, |i| self.counts[i])
    }

    /// Number of rolls whose value is `min_face` or higher.
    #[must_use]
    pub fn count_at_least(&self, min_face: u8) -> usize {
        FACES
            .filter(|&face| face >= min_face)
            .map(|face| self.count(face))
            .sum()
    }

    /// Number of distinct faces that appeared at least once.
    #[must_use]
    pub fn distinct_faces(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Returns `true` if every face appeared at least once.
    #[must_use]
    pub fn covers_all_faces(&self) -> bool {
        self.distinct_faces() == NUM_FACES
    }

    /// Total number of counted rolls.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns an iterator over `(face, count)` pairs in face order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        FACES.zip(self.counts.iter().copied())
    }
}
