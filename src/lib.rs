pub mod analysis;
pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod sentiment;
pub mod topics;
