pub mod automation;
pub mod schema;

pub use automation::*;
pub use schema::*;
