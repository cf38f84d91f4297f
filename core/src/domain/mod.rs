pub mod common;
pub mod dataset;
pub mod patient;
pub mod recommendation;
