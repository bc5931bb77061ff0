//! Numeric helpers.

/// Restrict `value` to the range `[min, max]`.
///
/// Computed as `max(min, min(value, max))`. Unlike [`Ord::clamp`] this never
/// panics: when `min > max` the result is simply `min`. A `NaN` `value`
/// passes through unchanged.
///
/// # Examples
///
/// ```
/// # use utilkit::clamp;
/// assert_eq!(clamp(5, 1, 10), 5);
/// assert_eq!(clamp(-5, 1, 10), 1);
/// assert_eq!(clamp(15.5, 1.0, 10.0), 10.0);
/// ```
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let capped = if max < value { max } else { value };
    if capped < min { min } else { capped }
}
