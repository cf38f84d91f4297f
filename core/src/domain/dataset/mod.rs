pub mod entities;
pub mod helpers;
pub mod ports;
pub mod schema;

pub use entities::*;
pub use ports::*;
pub use schema::*;
