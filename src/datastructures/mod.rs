pub mod client;
pub mod config;
pub mod depth;
pub mod order;
pub mod query;
