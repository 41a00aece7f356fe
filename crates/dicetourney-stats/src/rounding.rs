/// Rounds a value to one decimal place.
///
/// The value is scaled by 10, rounded to the nearest integer (halves away from
/// zero, which equals round-half-up for non-negative inputs), then scaled back.
///
/// # Examples
///
/// ```
/// use dicetourney_stats::rounding::round_to_tenths;
///
/// assert_eq!(round_to_tenths(1466.666_666), 1466.7);
/// assert_eq!(round_to_tenths(0.25), 0.3);
/// assert_eq!(round_to_tenths(400.0), 400.0);
/// ```
#[must_use]
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
