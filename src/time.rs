use lazy_static::lazy_static;

use std::time::{Duration, Instant};

lazy_static! {
    // Timestamp since the start of the program.
    pub static ref TIMESTAMP: Instant = Instant::now();
}

pub fn timestamp_as_usecs() -> u64 {
    Instant::now().duration_since(*TIMESTAMP).as_micros() as u64
}

pub fn timestamp_as_msecs() -> u64 {
    Instant::now().duration_since(*TIMESTAMP).as_millis() as u64
}

pub fn timestamp_as_secs() -> u64 {
    Instant::now().duration_since(*TIMESTAMP).as_secs()
}

// Sleep in slices of at most `granularity` usecs until `target` (usecs since
// program start) has passed. Returns the timestamp observed on wakeup.
pub fn wait(target: u64, granularity: u64) -> u64 {
    loop {
        let now = timestamp_as_usecs();
        if now >= target {
            return now;
        }
        std::thread::sleep(Duration::from_micros((target - now).min(granularity)));
    }
}
