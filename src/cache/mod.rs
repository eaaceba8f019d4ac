pub mod cache;
pub mod table;

pub use cache::*;
pub use table::*;
