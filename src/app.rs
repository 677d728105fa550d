use crate::client::Client;
use crate::shared::{GridConfig, GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_WIDTH};
use crate::window::{EventLoop, Window};
use std::path::Path;

pub struct App;

impl App {
    pub fn launch(root: &'static Path) -> ! {
        // Window.
        let event_loop = winit::event_loop::EventLoop::new().unwrap();
        let window = winit::window::WindowBuilder::new()
            .with_title("Isometric Grid")
            .with_inner_size(winit::dpi::PhysicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false)
            .build(&event_loop)
            .unwrap();

        // Wrappers.
        let mut event_loop = EventLoop::new(event_loop);
        let window = Window::new(window);

        // Grid layout, derived once and shared read-only from here on.
        let config = GridConfig::new(SCREEN_WIDTH, SCREEN_HEIGHT, TILE_WIDTH, GRID_SIZE);

        // Initialize client.
        let mut client = match Client::new(root, &window, config) {
            Ok(client) => client,
            Err(err) => {
                log::error!("startup failed: {err:#}");
                std::process::exit(1);
            }
        };

        loop {
            // Update client.
            let brk = client.update_once(&mut event_loop);
            if brk {
                break;
            }
        }

        std::process::exit(0);
    }
}
