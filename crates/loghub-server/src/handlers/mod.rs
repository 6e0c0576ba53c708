pub mod logs;
pub mod probe;

pub use logs::*;
pub use probe::*;
