//! Derive Api for `argbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a parameter struct `S` with `#[derive(Record)]`.
//! This implements [`Record`](crate::Record) for `S`, so that `S::from_env(..)` parses the Cli into a default `S`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ### Field Configuration
//! Each named field binds to the flag of the same name (raw identifiers drop their `r#`).
//! The field type must be one of:
//! ```console
//! String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
//! ```
//! Any other type is rejected at compile time: `unsupported type 'Vec < u8 >' in field 'items'`.
//!
//! Fields accept the following attribute:
//! * `#[argbind(rename = "NAME")]` to bind the field to the flag `NAME`.
//!
//! ```ignore
//! #[derive(Default, Record)]
//! struct Parameters {
//!     quick: usize,
//!     // the above generates:
//!     //  .add(Binding::field(&mut self.quick, "quick"))
//!
//!     #[argbind(rename = "b")]
//!     brown: bool,
//!     // the above generates:
//!     //  .add(Binding::field(&mut self.brown, "b"))
//!
//!     r#type: String,
//!     // the above generates:
//!     //  .add(Binding::field(&mut self.r#type, "type"))
//! }
//! ```
//!
//! `Record` may only be derived for non-generic structs with named fields (or unit structs).
pub use argbind_derive::*;
