mod system;
mod tools;

pub use system::*;
pub use tools::*;
