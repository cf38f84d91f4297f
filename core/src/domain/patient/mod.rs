pub mod entities;
pub mod helpers;
pub mod policies;

pub use entities::*;
