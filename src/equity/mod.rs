pub mod equity;
pub mod simulator;

pub use equity::*;
pub use simulator::*;
