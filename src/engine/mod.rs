pub mod config;
pub mod dispatcher;
pub mod engine;

pub use config::*;
pub use dispatcher::*;
pub use engine::*;
