pub mod engine;
pub mod hazards;
pub mod signals;
