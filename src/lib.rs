pub mod core;
pub mod cpp;

pub use cpp::*;
