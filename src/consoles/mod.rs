//! Console implementations

pub mod memory;
pub mod stdio;

pub use memory::MemoryConsole;
pub use stdio::StdConsole;

pub use crate::core::Console;
