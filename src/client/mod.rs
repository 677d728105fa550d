pub mod client;
mod game_frame;
mod game_render_state;
mod game_update_state;

pub use client::*;
use game_frame::*;
use game_render_state::*;
use game_update_state::*;
