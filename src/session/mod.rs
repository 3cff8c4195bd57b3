//! Quiz session module

mod checker;
mod selection;
mod state;

#[cfg(test)]
mod property_tests;

pub use checker::*;
pub use selection::*;
pub use state::*;
