pub mod entities;
pub mod helpers;
pub mod policies;
pub mod ports;
pub mod sampler;
pub mod services;

pub use entities::*;
pub use ports::*;
