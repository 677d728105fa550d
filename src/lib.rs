pub mod app;
pub mod client;
pub mod logging;
pub mod server;
pub mod shared;
pub mod time;
pub mod window;

pub use shared::*;
pub use time::{timestamp_as_msecs, timestamp_as_secs, timestamp_as_usecs};
pub use window::*;
