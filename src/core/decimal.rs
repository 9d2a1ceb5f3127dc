use rust_decimal::Decimal;

use crate::error::{ChartError, ChartResult};

/// Converts a float into a decimal through its shortest round-trip text form.
///
/// `0.1` becomes decimal `0.1`, never the binary expansion
/// `0.1000000000000000055511151231257827`.
///
/// Text needing more than 28 fractional digits, or more than a 96-bit
/// mantissa, is rejected rather than rounded.
pub fn decimal_from_f64(value: f64) -> ChartResult<Decimal> {
    if !value.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "numeric value must be finite, got {value}"
        )));
    }
    parse_exact(&value.to_string())
}

pub fn decimal_from_f32(value: f32) -> ChartResult<Decimal> {
    if !value.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "numeric value must be finite, got {value}"
        )));
    }
    parse_exact(&value.to_string())
}

/// Parses a plain or scientific decimal literal such as `"12.50"` or `"1e3"`.
pub fn decimal_from_str(value: &str) -> ChartResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChartError::InvalidInput(
            "numeric string must not be empty".to_owned(),
        ));
    }
    if trimmed.contains(['e', 'E']) {
        return Decimal::from_scientific(trimmed).map_err(|e| {
            ChartError::InvalidInput(format!("`{trimmed}` is not a decimal number: {e}"))
        });
    }
    parse_exact(trimmed)
}

fn parse_exact(text: &str) -> ChartResult<Decimal> {
    Decimal::from_str_exact(text)
        .map_err(|e| ChartError::InvalidInput(format!("`{text}` is not a decimal number: {e}")))
}

/// Fallible conversion into the decimal representation used for chart data.
pub trait ToDecimal {
    fn to_decimal(&self) -> ChartResult<Decimal>;
}

impl ToDecimal for Decimal {
    fn to_decimal(&self) -> ChartResult<Decimal> {
        Ok(*self)
    }
}

impl ToDecimal for f64 {
    fn to_decimal(&self) -> ChartResult<Decimal> {
        decimal_from_f64(*self)
    }
}

impl ToDecimal for f32 {
    fn to_decimal(&self) -> ChartResult<Decimal> {
        decimal_from_f32(*self)
    }
}

impl ToDecimal for str {
    fn to_decimal(&self) -> ChartResult<Decimal> {
        decimal_from_str(self)
    }
}

impl ToDecimal for String {
    fn to_decimal(&self) -> ChartResult<Decimal> {
        decimal_from_str(self)
    }
}

impl<T: ToDecimal + ?Sized> ToDecimal for &T {
    fn to_decimal(&self) -> ChartResult<Decimal> {
        (**self).to_decimal()
    }
}

macro_rules! impl_to_decimal_for_int {
    ($($ty:ty),*) => {
        $(
            impl ToDecimal for $ty {
                fn to_decimal(&self) -> ChartResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_to_decimal_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Converts every item, failing on the first malformed one.
pub fn decimals_from<I>(values: I) -> ChartResult<Vec<Decimal>>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    values.into_iter().map(|value| value.to_decimal()).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{decimal_from_f32, decimal_from_f64, decimal_from_str, decimals_from};

    #[test]
    fn float_conversion_keeps_short_digits() {
        assert_eq!(decimal_from_f64(0.1).expect("decimal").to_string(), "0.1");
        assert_eq!(decimal_from_f64(2.5).expect("decimal").to_string(), "2.5");
        assert_eq!(decimal_from_f64(-3.0).expect("decimal").to_string(), "-3");
        assert_eq!(decimal_from_f32(0.1).expect("decimal").to_string(), "0.1");
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(decimal_from_f64(f64::NAN).is_err());
        assert!(decimal_from_f64(f64::INFINITY).is_err());
        assert!(decimal_from_f32(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn floats_at_the_decimal_range_edges_are_kept_exactly() {
        assert_eq!(
            decimal_from_f64(1e28).expect("largest power of ten"),
            Decimal::from_i128_with_scale(10_i128.pow(28), 0)
        );
        assert_eq!(
            decimal_from_f64(1e-28).expect("smallest step"),
            Decimal::new(1, 28)
        );
        assert_eq!(
            decimal_from_f64(1.25e-26).expect("28 fractional digits"),
            Decimal::new(125, 28)
        );
    }

    #[test]
    fn floats_beyond_decimal_range_are_rejected_not_rounded() {
        assert!(decimal_from_f64(1e29).is_err());
        assert!(decimal_from_f64(1e40).is_err());
        assert!(decimal_from_f64(1e-29).is_err());
        assert!(decimal_from_f64(1.2345678901234566e-13).is_err());
    }

    #[test]
    fn string_conversion_accepts_plain_and_scientific_forms() {
        assert_eq!(decimal_from_str(" 12.50 ").expect("decimal").to_string(), "12.50");
        assert_eq!(decimal_from_str("1e3").expect("decimal"), Decimal::from(1000));
        assert!(decimal_from_str("abc").is_err());
        assert!(decimal_from_str("").is_err());
    }

    #[test]
    fn batch_conversion_fails_on_first_bad_item() {
        assert!(decimals_from(["1", "x", "3"]).is_err());
        let values = decimals_from([1.5f64, 2.0]).expect("decimals");
        assert_eq!(values.len(), 2);
    }
}
