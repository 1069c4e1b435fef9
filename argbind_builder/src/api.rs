mod binding;
mod coerce;
mod core;

pub use self::binding::*;
pub use self::coerce::*;
pub use self::core::*;
