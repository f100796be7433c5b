pub mod project;
pub mod store;

pub use project::*;
pub use store::*;
