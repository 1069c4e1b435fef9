use std::collections::HashMap;

/// The raw flag values produced by tokenizing the Cli, keyed by flag name.
///
/// An empty value means the flag was present without a value (ex: `--verbose` or `-v`).
pub type FlagMap = HashMap<String, String>;

/// The declared type of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `String`: takes the raw value verbatim.
    Str,
    /// `bool`: `true` when the raw value is (case-insensitively) `true`.
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl FieldType {
    /// The Rust type name of this field type.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Str => "String",
            FieldType::Bool => "bool",
            FieldType::I8 => "i8",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::Isize => "isize",
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
            FieldType::Usize => "usize",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Parse configuration.
///
/// Currently carries no settings; it is accepted by every entry point so that settings may be added without breaking callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {}

impl Config {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldType::Str, "String")]
    #[case(FieldType::Bool, "bool")]
    #[case(FieldType::I8, "i8")]
    #[case(FieldType::Isize, "isize")]
    #[case(FieldType::U64, "u64")]
    #[case(FieldType::F32, "f32")]
    fn field_type_display(#[case] field_type: FieldType, #[case] expected: &str) {
        assert_eq!(field_type.to_string(), expected);
        assert_eq!(field_type.type_name(), expected);
    }

    #[test]
    fn config_is_inert() {
        assert_eq!(Config::new(), Config::default());
    }
}
