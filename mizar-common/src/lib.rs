mod exception;

pub mod prelude;

#[macro_use]
pub(crate) mod macros;
