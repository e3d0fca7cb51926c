//! CLI commands for the varnika tool.

pub mod encode;
pub mod train;

pub use encode::EncodeCommand;
pub use train::TrainCommand;
