use isowalk::server::{FileServer, FILE_SERVER_PORT};
use isowalk::{logging, time};
use once_cell::sync::Lazy;
use std::path::PathBuf;

fn main() {
    logging::init();
    lazy_static::initialize(&time::TIMESTAMP);

    static PATH: Lazy<PathBuf> = Lazy::new(|| {
        std::env::current_exe()
            .expect("Could not get CWD.")
            .parent()
            .unwrap()
            .to_owned()
    });

    let server = match FileServer::bind(&PATH, FILE_SERVER_PORT) {
        Ok(server) => server,
        Err(err) => {
            log::error!("{err:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "serving {} at http://localhost:{}",
        PATH.display(),
        server.port()
    );

    // Launch the game alongside the server.
    match std::process::Command::new(PATH.join("isowalk")).spawn() {
        Ok(_) => log::info!("game window should open separately"),
        Err(err) => log::warn!("could not start game: {err}"),
    }

    loop {
        for event in server.recv() {
            log::info!("{} {}", event.status, event.path);
        }
        std::thread::sleep(std::time::Duration::from_millis(250));
    }
}
