use crate::client::GameFrame;
use crate::shared::{screen_to_cell, Cell, GridConfig, Player, SpriteBank};
use crate::window::{InputEvent, MouseButton, PressState};
use anyhow::Result;
use std::path::Path;

pub struct GameUpdateState {
    // Grid layout.
    config: GridConfig,

    // Input.
    mouse_x: f32,
    mouse_y: f32,
    hover: Cell,

    // Character.
    player: Player,
}

impl GameUpdateState {
    pub fn new(root: &'static Path, config: GridConfig) -> Result<Self> {
        let sprites = SpriteBank::load(&root.join("assets/character"))?;
        let player = Player::new(&config, Cell::new(2, 2), sprites);

        Ok(Self {
            config,
            mouse_x: 0.,
            mouse_y: 0.,
            hover: screen_to_cell(&config, 0., 0.),
            player,
        })
    }

    pub fn prestep<'a>(
        &mut self,
        _ts: u64,
        input_events: impl Iterator<Item = &'a InputEvent>,
    ) -> bool {
        for &event in input_events {
            match event {
                InputEvent::WindowClose => return true,

                InputEvent::MouseMove { x, y } => {
                    self.mouse_x = x;
                    self.mouse_y = y;
                }

                InputEvent::MouseClick {
                    mouse_button: MouseButton::Left,
                    press_state: PressState::Down,
                } => {
                    let target = screen_to_cell(&self.config, self.mouse_x, self.mouse_y);
                    self.player.request_move(&self.config, target);
                }

                _ => {}
            }
        }

        // Track the tile under the cursor every iteration.
        self.hover = screen_to_cell(&self.config, self.mouse_x, self.mouse_y);

        false
    }

    pub fn step(&mut self, _ts: u64, ft: u64) {
        self.player.tick(ft as f32 * 0.001);
    }

    pub fn poststep(&mut self, _ts: u64) -> GameFrame {
        let pixel = self.player.pixel();
        GameFrame {
            hover: self.config.contains(self.hover).then_some(self.hover),
            player_xy: [pixel.x, pixel.y],
            facing: self.player.facing(),
            frame: self.player.frame(),
        }
    }

    pub fn sprites(&self) -> &SpriteBank {
        self.player.sprites()
    }
}
