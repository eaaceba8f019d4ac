pub mod action;
pub mod context;
pub mod strategy;
pub mod synthesizer;

pub use action::*;
pub use context::*;
pub use strategy::*;
pub use synthesizer::*;
