use crate::api::Binding;
use crate::model::Config;
use crate::parser::{validate, Binder, ParseError};

/// The destination of a parse: the binding table of a record's fields.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Binding, Destination};
///
/// let mut verbose: bool = false;
/// let mut depth: u8 = 0;
/// let binder = Destination::new()
///     .add(Binding::field(&mut verbose, "v"))
///     .add(Binding::field(&mut depth, "depth"))
///     .build()
///     .unwrap();
///
/// binder.parse_tokens(&["-v", "--depth", "3"]).unwrap();
///
/// assert!(verbose);
/// assert_eq!(depth, 3);
/// ```
#[derive(Debug, Default)]
pub struct Destination<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> Destination<'a> {
    /// Create an empty destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field binding to the destination.
    ///
    /// The order of bindings is the order in which fields are bound.
    pub fn add(mut self, binding: Binding<'a>) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Build the binder.
    /// This finalizes the destination and checks for errors (ex: a repeated field name).
    pub fn build(self) -> Result<Binder<'a>, ParseError> {
        validate(&self.bindings)?;
        Ok(Binder::new(self.bindings))
    }
}

/// Behaviour for a struct whose fields may be bound from the Cli.
///
/// Typically implemented via `#[derive(Record)]`, but may be implemented by hand.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{canonical_token, Binding, Config, Destination, Record};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Parameters {
///     name: String,
///     count: u32,
/// }
///
/// impl Record for Parameters {
///     fn destination(&mut self) -> Destination<'_> {
///         Destination::new()
///             .add(Binding::field(&mut self.name, "name"))
///             .add(Binding::field(&mut self.count, "count"))
///     }
///
///     fn canonical_tokens(&self) -> Vec<String> {
///         vec![
///             canonical_token("name", &self.name),
///             canonical_token("count", &self.count),
///         ]
///     }
/// }
///
/// let parameters = Parameters::from_tokens(&["--name=abc", "--count", "2"], &Config::default()).unwrap();
/// assert_eq!(parameters, Parameters { name: "abc".to_string(), count: 2 });
/// assert_eq!(parameters.canonical_tokens(), vec!["--name=abc", "--count=2"]);
/// ```
pub trait Record {
    /// The binding table of this record's fields, in declaration order.
    fn destination(&mut self) -> Destination<'_>;

    /// This record rendered as `--name=value` tokens, one per field, in declaration order.
    fn canonical_tokens(&self) -> Vec<String>;

    /// Bind a default record from the input tokens.
    fn from_tokens<S: AsRef<str>>(tokens: &[S], config: &Config) -> Result<Self, ParseError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        parse_tokens(&mut record, tokens, config)?;
        Ok(record)
    }

    /// Bind a default record from the Cli [`std::env::args`].
    fn from_env(config: &Config) -> Result<Self, ParseError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        parse(&mut record, config)?;
        Ok(record)
    }
}

/// Parse the Cli [`std::env::args`] (excluding the program name) onto the record.
///
/// The record's binding table is checked before any argument is read.
/// On failure, the fields bound before the failing field keep their new values and the later fields are untouched.
///
/// The `config` is reserved for future use.
pub fn parse<R: Record + ?Sized>(record: &mut R, _config: &Config) -> Result<(), ParseError> {
    record.destination().build()?.parse()
}

/// Parse the input tokens onto the record.
///
/// See [`parse`] for details.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{parse_tokens, Binding, Config, Destination, Record};
///
/// struct Limits {
///     low: i8,
/// }
///
/// impl Record for Limits {
///     fn destination(&mut self) -> Destination<'_> {
///         Destination::new().add(Binding::field(&mut self.low, "low"))
///     }
///
///     fn canonical_tokens(&self) -> Vec<String> {
///         vec![argbind::canonical_token("low", &self.low)]
///     }
/// }
///
/// let mut limits = Limits { low: 0 };
/// let error = parse_tokens(&mut limits, &["--low=300"], &Config::default()).unwrap_err();
///
/// assert_eq!(
///     error.to_string(),
///     "Parse error for field 'low': overflow detected, cannot fit '300' into i8."
/// );
/// ```
pub fn parse_tokens<R, S>(record: &mut R, tokens: &[S], _config: &Config) -> Result<(), ParseError>
where
    R: Record + ?Sized,
    S: AsRef<str>,
{
    record.destination().build()?.parse_tokens(tokens)
}
