use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record `name` as invalid unless `value` lies in `range`. NaN never does.
pub(crate) fn check_range<T>(
    errors: &mut Vec<String>,
    name: &str,
    value: T,
    range: RangeInclusive<T>,
) where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} must be between {} and {}",
            range.start(),
            range.end()
        ));
    }
}
