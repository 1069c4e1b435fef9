use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

use crate::model::FieldType;

/// Failure to coerce a raw flag value into a field's declared type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoerceError {
    /// The raw value is not a literal of the declared type.
    #[error("cannot parse '{token}' as {field_type}.")]
    MalformedLiteral {
        /// The raw value.
        token: String,
        /// The declared type.
        field_type: FieldType,
    },

    /// The raw value parsed, but lies outside the range of the declared type.
    #[error("overflow detected, cannot fit '{token}' into {field_type}.")]
    Overflow {
        /// The raw value.
        token: String,
        /// The declared type.
        field_type: FieldType,
    },

    /// The raw value carries a `-` sign, but the declared type is unsigned.
    #[error("underflow detected, cannot fit '{token}' into {field_type}.")]
    Underflow {
        /// The raw value.
        token: String,
        /// The declared type.
        field_type: FieldType,
    },
}

impl CoerceError {
    fn malformed(token: &str, field_type: FieldType) -> Self {
        CoerceError::MalformedLiteral {
            token: token.to_string(),
            field_type,
        }
    }

    fn overflow(token: &str, field_type: FieldType) -> Self {
        CoerceError::Overflow {
            token: token.to_string(),
            field_type,
        }
    }

    fn underflow(token: &str, field_type: FieldType) -> Self {
        CoerceError::Underflow {
            token: token.to_string(),
            field_type,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Behaviour for the primitive types which a field may declare.
///
/// Implemented for `String`, `bool`, `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32` and `f64`.
/// This trait is sealed; any other field type is rejected at compile time.
pub trait Bindable: sealed::Sealed + Sized {
    /// The type tag of this type.
    const FIELD_TYPE: FieldType;

    /// Coerce a raw flag value into this type.
    fn coerce(token: &str) -> Result<Self, CoerceError>;

    /// Render this value so that [`Bindable::coerce`] reads it back.
    fn render(&self) -> String;
}

impl sealed::Sealed for String {}

impl Bindable for String {
    const FIELD_TYPE: FieldType = FieldType::Str;

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        Ok(token.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl sealed::Sealed for bool {}

impl Bindable for bool {
    const FIELD_TYPE: FieldType = FieldType::Bool;

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        Ok(token.eq_ignore_ascii_case("true"))
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

// Signed integers are parsed at 64 bits, then narrowed.
fn coerce_signed<T: TryFrom<i64>>(token: &str, field_type: FieldType) -> Result<T, CoerceError> {
    let value = i64::from_str(token).map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CoerceError::overflow(token, field_type)
        }
        _ => CoerceError::malformed(token, field_type),
    })?;
    T::try_from(value).map_err(|_| CoerceError::overflow(token, field_type))
}

// Unsigned integers reject any '-' before parsing, then are parsed at 64 bits and narrowed.
fn coerce_unsigned<T: TryFrom<u64>>(token: &str, field_type: FieldType) -> Result<T, CoerceError> {
    if token.contains('-') {
        return Err(CoerceError::underflow(token, field_type));
    }

    // A sign prefix is not permitted on unsigned literals.
    if token.starts_with('+') {
        return Err(CoerceError::malformed(token, field_type));
    }

    let value = u64::from_str(token).map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => CoerceError::overflow(token, field_type),
        _ => CoerceError::malformed(token, field_type),
    })?;
    T::try_from(value).map_err(|_| CoerceError::overflow(token, field_type))
}

// Floats are parsed at 64 bits; the magnitude must fit the declared width.
// Infinities (including literals too large for f64) are overflows, NaN passes through.
fn coerce_float(token: &str, field_type: FieldType, max: f64) -> Result<f64, CoerceError> {
    let value = f64::from_str(token).map_err(|_| CoerceError::malformed(token, field_type))?;

    if value.is_nan() || value.abs() <= max {
        Ok(value)
    } else {
        Err(CoerceError::overflow(token, field_type))
    }
}

macro_rules! bindable_signed {
    ($($t:ty => $field_type:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Bindable for $t {
                const FIELD_TYPE: FieldType = $field_type;

                fn coerce(token: &str) -> Result<Self, CoerceError> {
                    coerce_signed(token, Self::FIELD_TYPE)
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! bindable_unsigned {
    ($($t:ty => $field_type:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Bindable for $t {
                const FIELD_TYPE: FieldType = $field_type;

                fn coerce(token: &str) -> Result<Self, CoerceError> {
                    coerce_unsigned(token, Self::FIELD_TYPE)
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

bindable_signed!(
    i8 => FieldType::I8,
    i16 => FieldType::I16,
    i32 => FieldType::I32,
    i64 => FieldType::I64,
    isize => FieldType::Isize,
);

bindable_unsigned!(
    u8 => FieldType::U8,
    u16 => FieldType::U16,
    u32 => FieldType::U32,
    u64 => FieldType::U64,
    usize => FieldType::Usize,
);

impl sealed::Sealed for f32 {}

impl Bindable for f32 {
    const FIELD_TYPE: FieldType = FieldType::F32;

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        coerce_float(token, Self::FIELD_TYPE, f32::MAX as f64).map(|value| value as f32)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl sealed::Sealed for f64 {}

impl Bindable for f64 {
    const FIELD_TYPE: FieldType = FieldType::F64;

    fn coerce(token: &str) -> Result<Self, CoerceError> {
        coerce_float(token, Self::FIELD_TYPE, f64::MAX)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Render a field as its canonical `--name=value` token.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::canonical_token;
///
/// assert_eq!(canonical_token("size", &3u8), "--size=3");
/// assert_eq!(canonical_token("verbose", &false), "--verbose=false");
/// ```
pub fn canonical_token<T: Bindable>(name: &str, value: &T) -> String {
    format!("--{name}={}", value.render())
}
