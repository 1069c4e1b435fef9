mod base;
mod middleware;

pub use base::ParseError;
pub(crate) use base::validate;
pub use middleware::Binder;
