//! `argbind` binds command line flags onto the fields of a struct.
//!
//! `argbind` is deliberately small.
//! There are no sub-commands, no positional arguments and no help messages.
//! Instead, `argbind` focuses on the following design concerns:
//! * *Struct binding*:
//! Each field of the struct is bound from the flag of the same name.
//! * *Strict numeric bounds*:
//! A value which does not fit the field's type is rejected, never truncated.
//! For example, `--n=300` cannot bind to an `i8` field.
//! * *No reflection*:
//! The fields are described by an explicit binding table, generated via `#[derive(Record)]` or built by hand.
//! A field of an unsupported type is a compile error.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_builder.rs")]
//! ```
//!
//! ```console
//! $ demo_derived --name world --count=2 -v --ratio 0
//! Parameters { name: "world", count: 2, verbose: true, ratio: 0.0 }
//! Hello world (0).
//! Hello world (0).
//!
//! $ demo_derived --name world --count=300 --ratio 0
//! Parse error for field 'count': overflow detected, cannot fit '300' into u8.
//!
//! $ demo_derived --name world --count=-1 --ratio 0
//! Parse error for field 'count': underflow detected, cannot fit '-1' into u8.
//!
//! $ demo_derived --name world
//! Parse error for field 'count': cannot parse '' as u8.
//! ```
//!
//! # Cli Semantics
//! `argbind` parses in two phases.
//!
//! **Tokenizing** maps the Cli tokens to raw flag values (see [`tokenize`]):
//! * `--name=value` sets `name` to `value`.
//! Only the first `=` character is used as a separator.
//! For example, `--key=123=456` sets `key` to `123=456`.
//! * `--name value` sets `name` to `value`, as long as `value` does not start with `-`.
//! * `--name` (followed by a dash-prefixed token, or by nothing) sets `name` to the empty value.
//! * `-abc` is a cluster of switches, equivalent to `--a=true --b=true --c=true`.
//! * Any other token is kept under its own name with the empty value.
//! * When a flag repeats, the last occurrence wins.
//!
//! **Binding** coerces each field's raw flag value by the field's type (see [`Binder::bind`]).
//! A flag which is absent is treated as the empty value.
//! ```console
//! Type            | Accepts                               | Rejects
//! --------------------------------------------------------------------------------------------------
//! String          | any text, verbatim                    | -
//! bool            | `true` (any case); all else is false  | -
//! i8 .. i64       | base-10 integers within range         | malformed, overflow
//! isize           | base-10 integers within range         | malformed, overflow
//! u8 .. u64       | base-10 integers within range         | any `-` (underflow), malformed, overflow
//! usize           | base-10 integers within range         | any `-` (underflow), malformed, overflow
//! f32, f64        | floats whose magnitude is in range    | malformed, overflow
//! ```
//!
//! Fields are bound in declaration order, and binding stops at the first failure.
//! Fields after the failing field are left as they were.
//! Flags which do not name a field are ignored.
//!
//! ### Defaults & Initials
//! `argbind` does not take part in setting defaults: every field is written on a successful parse.
//! In particular, an absent `String` flag binds the empty string, and an absent `bool` flag binds `false`.
//! An absent numeric flag is an error.
//!
//! ### Round trip
//! [`Record::canonical_tokens`] renders a record as `--name=value` tokens.
//! Parsing these tokens reproduces the record for `String`, `bool` and integer fields.
//! Floats may lose precision across the round trip.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while tokenizing and binding.
pub mod derive;
pub use argbind_builder::*;
pub use argbind_derive::Record;
