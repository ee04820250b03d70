pub mod board;
pub mod config;
pub mod gate;
pub mod stats;
