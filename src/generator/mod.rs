//! Question generation module

mod batch;
pub mod synth;


pub use batch::*;
pub use synth::*;
