//! Numeric conversion from raw JSON lexemes.
//!
//! The parser keeps numbers as their exact source text, so every conversion
//! here decides range and precision against the requested target type, not
//! against some intermediate binary representation. Integer targets demand a
//! value that is exactly integral and in range; float targets take the
//! nearest representable value and only reject magnitudes that overflow to
//! infinity.
//!
//! `TYPE_NAME` values are the diagnostic labels that appear verbatim in
//! "does not fit" and "Expected to decode" messages.

/// A fixed-width or platform-width integer target.
pub(crate) trait JsonInteger: Sized + Copy {
    /// Diagnostic name used in error messages.
    const TYPE_NAME: &'static str;

    /// Narrow an exact integer to this width, if it fits.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_json_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl JsonInteger for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_i128(value: i128) -> Option<Self> {
                    Self::try_from(value).ok()
                }
            }
        )*
    };
}

impl_json_integer! {
    i8 => "Int8",
    i16 => "Int16",
    i32 => "Int32",
    i64 => "Int64",
    isize => "Int",
    u8 => "UInt8",
    u16 => "UInt16",
    u32 => "UInt32",
    u64 => "UInt64",
    usize => "UInt",
}

/// A binary floating-point target.
pub(crate) trait JsonFloat: Sized + Copy {
    /// Diagnostic name used in error messages.
    const TYPE_NAME: &'static str;

    /// Parse the lexeme to the nearest representable value.
    ///
    /// Returns `None` when the magnitude overflows this precision.
    fn from_lexeme(raw: &str) -> Option<Self>;
}

impl JsonFloat for f32 {
    const TYPE_NAME: &'static str = "Float";

    fn from_lexeme(raw: &str) -> Option<Self> {
        raw.parse::<f32>().ok().filter(|value| value.is_finite())
    }
}

impl JsonFloat for f64 {
    const TYPE_NAME: &'static str = "Double";

    fn from_lexeme(raw: &str) -> Option<Self> {
        raw.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

/// Convert a number lexeme to an exact integer of the target width.
///
/// A lexeme with a fraction or exponent is accepted iff it still reduces to
/// an integral value in range (`1e2`, `3.0`); everything else is `None`.
pub(crate) fn integer_from_lexeme<T: JsonInteger>(raw: &str) -> Option<T> {
    if let Ok(value) = raw.parse::<i128>() {
        return T::from_i128(value);
    }
    if raw.bytes().any(|byte| matches!(byte, b'.' | b'e' | b'E')) {
        let value: f64 = raw.parse().ok()?;
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        // The cast saturates at the i128 bounds; anything that large fails
        // the width check anyway.
        return T::from_i128(value as i128);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(integer_from_lexeme::<u8>("25"), Some(25));
        assert_eq!(integer_from_lexeme::<i8>("-25"), Some(-25));
        assert_eq!(integer_from_lexeme::<u64>("18446744073709551615"), Some(u64::MAX));
        assert_eq!(integer_from_lexeme::<i64>("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_out_of_range_integers() {
        assert_eq!(integer_from_lexeme::<u8>("312"), None);
        assert_eq!(integer_from_lexeme::<u8>("-1"), None);
        assert_eq!(integer_from_lexeme::<i8>("128"), None);
        assert_eq!(integer_from_lexeme::<u64>("18446744073709551616"), None);
        // Wider than i128 altogether.
        assert_eq!(
            integer_from_lexeme::<u64>("99999999999999999999999999999999999999999"),
            None
        );
    }

    #[test]
    fn test_integral_fraction_and_exponent_forms() {
        assert_eq!(integer_from_lexeme::<u8>("3.0"), Some(3));
        assert_eq!(integer_from_lexeme::<u16>("1e2"), Some(100));
        assert_eq!(integer_from_lexeme::<u8>("2.5e1"), Some(25));
        assert_eq!(integer_from_lexeme::<u8>("-0.0"), Some(0));
    }

    #[test]
    fn test_non_integral_forms() {
        assert_eq!(integer_from_lexeme::<u8>("-3.14"), None);
        assert_eq!(integer_from_lexeme::<u8>("25.5"), None);
        assert_eq!(integer_from_lexeme::<u64>("1e-2"), None);
        assert_eq!(integer_from_lexeme::<u64>("1000e1000"), None);
    }

    #[test]
    fn test_float_lexemes() {
        assert_eq!(f32::from_lexeme("-3.14"), Some(-3.14_f32));
        assert_eq!(f64::from_lexeme("-3.14e12"), Some(-3.14e12_f64));
        // Excess precision rounds silently.
        assert!(f32::from_lexeme("3.14159265358979323846264338327950288").is_some());
        // Overflow to infinity is rejected.
        assert_eq!(f32::from_lexeme("1000e1000"), None);
        assert_eq!(f64::from_lexeme("1e999"), None);
        // Magnitudes representable in f64 but not f32.
        assert_eq!(f32::from_lexeme("1e39"), None);
        assert!(f64::from_lexeme("1e39").is_some());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(<u8 as JsonInteger>::TYPE_NAME, "UInt8");
        assert_eq!(<isize as JsonInteger>::TYPE_NAME, "Int");
        assert_eq!(<usize as JsonInteger>::TYPE_NAME, "UInt");
        assert_eq!(<f32 as JsonFloat>::TYPE_NAME, "Float");
        assert_eq!(<f64 as JsonFloat>::TYPE_NAME, "Double");
    }
}
