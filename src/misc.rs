pub mod config;
pub mod rpc;
pub mod shared_init;
pub mod utils;
