use std::env;

use crate::api::Binding;
use crate::model::FlagMap;
use crate::parser::base::ParseError;
use crate::tokens::tokenize;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured binder.
/// Built via [`Destination::build`](crate::Destination::build).
#[derive(Debug)]
pub struct Binder<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(bindings: Vec<Binding<'a>>) -> Self {
        Self { bindings }
    }

    /// Bind the raw flag values onto the destination fields.
    ///
    /// Fields are bound in the order they were added.
    /// A field whose flag is absent is bound from the empty string:
    /// `String` fields become empty, `bool` fields become `false`, and numeric fields fail as malformed.
    ///
    /// Binding stops at the first field which fails; the later fields are not touched.
    /// Flags which name no field are ignored.
    pub fn bind(self, flags: &FlagMap) -> Result<(), ParseError> {
        for mut binding in self.bindings {
            let token = flags.get(binding.name()).map(String::as_str).unwrap_or_default();

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Binding '{token}' onto {binding:?}.");
            }

            if let Err(error) = binding.assign(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Failed to bind {binding:?}: {error}");
                }

                return Err(ParseError::field(binding.name(), error));
            }
        }

        Ok(())
    }

    /// Run the binder against the input tokens.
    ///
    /// Parsing happens in two phases:
    /// 1. Tokenizing maps the tokens to raw flag values (see [`tokenize`](crate::tokenize)).
    /// 2. Binding coerces the raw flag values by their respective field types (see [`Binder::bind`]).
    /// This phase will actually mutate your program variables.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Binding, Destination};
    ///
    /// let mut x: i32 = 0;
    /// let mut y: String = String::default();
    /// let binder = Destination::new()
    ///     .add(Binding::field(&mut x, "x"))
    ///     .add(Binding::field(&mut y, "y"))
    ///     .build()
    ///     .unwrap();
    ///
    /// binder.parse_tokens(&["--x=5", "--y", "hello"]).unwrap();
    ///
    /// assert_eq!(x, 5);
    /// assert_eq!(y, "hello");
    /// ```
    pub fn parse_tokens<S: AsRef<str>>(self, tokens: &[S]) -> Result<(), ParseError> {
        let flags = tokenize(tokens);
        self.bind(&flags)
    }

    /// Run the binder against the Cli [`env::args`], excluding the program name.
    ///
    /// See [`Binder::parse_tokens`] for details.
    pub fn parse(self) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(command_input.as_slice())
    }
}
