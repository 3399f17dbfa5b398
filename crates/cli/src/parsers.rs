// crates/cli/src/parsers.rs
use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input. Underscores are ignored.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a `usize` constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a half-open `LOW..HIGH` range of `i64`.
///
/// # Errors
/// Returns an error if either bound is not a number or `LOW >= HIGH`.
pub fn parse_value_range(s: &str) -> Result<Range<i64>, String> {
    let (low, high) = s
        .split_once("..")
        .ok_or_else(|| format!("Expected LOW..HIGH: {s}"))?;
    let low: i64 = parse_bounded_number(low, i64::MIN, None)?;
    let high: i64 = parse_bounded_number(high, i64::MIN, None)?;
    if low >= high {
        return Err(format!("empty range: {s}"));
    }
    Ok(low..high)
}
