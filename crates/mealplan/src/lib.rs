mod plan;
mod scope;
mod store;
mod week;

pub use plan::*;
pub use scope::*;
pub use store::*;
pub use week::*;
