pub mod file_server;

pub use file_server::*;
