pub mod conversion;
pub mod definition;
pub mod kind;
pub mod raw;

pub use conversion::*;
pub use definition::*;
pub use kind::*;
