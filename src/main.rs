use isowalk::app::App;
use isowalk::{logging, time};
use once_cell::sync::Lazy;
use std::path::PathBuf;

fn main() {
    // Initialize logging and the game start timestamp.
    logging::init();
    lazy_static::initialize(&time::TIMESTAMP);

    // Get working directory.
    static PATH: Lazy<PathBuf> = Lazy::new(|| {
        std::env::current_exe()
            .expect("Could not get CWD.")
            .parent()
            .unwrap()
            .to_owned()
    });

    // Start/Run/Free app.
    App::launch(&PATH);
}
