//! Python AST building blocks.

mod decorators;
mod enums;
mod functions;

pub use decorators::Decorator;
pub use enums::EnumClass;
pub use functions::{Function, MainGuard, Statements};
