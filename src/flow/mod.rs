pub mod conversion;
pub mod definition;
pub mod library;
mod loader;

pub use conversion::*;
pub use definition::*;
pub use library::*;
