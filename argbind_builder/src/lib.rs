//! Builder module for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{Binder, ParseError};
pub use tokens::tokenize;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
