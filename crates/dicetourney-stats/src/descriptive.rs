/// Descriptive statistics summarizing a roll history.
///
/// This structure contains common measures of central tendency and dispersion
/// for a dataset of `f64` values. Variance is the *population* variance
/// (mean of squared deviations, denominator = count).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The sum of all values.
    pub sum: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset (upper median for even counts).
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use dicetourney_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from a die roll history.
    ///
    /// Returns `None` for an empty history.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dicetourney_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_rolls(&[6, 1, 6, 1]).unwrap();
    /// assert_eq!(stats.mean, 3.5);
    /// assert_eq!(stats.variance, 6.25);
    /// assert!(DescriptiveStats::from_rolls(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_rolls(rolls: &[u8]) -> Option<Self> {
        Self::new(rolls.iter().copied().map(f64::from))
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This skips the sorting step. Use this when the data is already sorted.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let sum = sorted_values.iter().copied().sum::<f64>();
        let n = count as f64;
        let mean = sum / n;
        let median = sorted_values[count / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            sum,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

/// Arithmetic mean of a roll history, `0.0` when the history is empty.
///
/// ```
/// # use dicetourney_stats::descriptive::mean_or_zero;
/// assert_eq!(mean_or_zero(&[2, 2]), 2.0);
/// assert_eq!(mean_or_zero(&[]), 0.0);
/// ```
#[must_use]
pub fn mean_or_zero(rolls: &[u8]) -> f64 {
    DescriptiveStats::from_rolls(rolls).map_or(0.0, |stats| stats.mean)
}

/// Population variance of a roll history, `0.0` when the history is empty.
///
/// ```
/// # use dicetourney_stats::descriptive::variance_or_zero;
/// assert_eq!(variance_or_zero(&[1, 3]), 1.0);
/// assert_eq!(variance_or_zero(&[]), 0.0);
/// ```
#[must_use]
pub fn variance_or_zero(rolls: &[u8]) -> f64 {
    DescriptiveStats::from_rolls(rolls).map_or(0.0, |stats| stats.variance)
}
