pub mod cli;
pub mod command;
pub mod engine;
pub mod error;
pub mod store;
