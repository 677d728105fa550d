use crate::shared::{cell_to_screen, Cell, Direction, GridConfig, DIRECTION_COUNT};
use anyhow::{bail, Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::warn;
use nalgebra_glm::Vec2;
use std::path::Path;

// Walk cycle length per direction.
pub const FRAMES_PER_DIRECTION: usize = 3;
// Milliseconds each walk frame stays on screen.
pub const FRAME_DURATION_MS: f32 = 100.;
// Pixels covered per simulation tick.
pub const PLAYER_SPEED: f32 = 4.;

/// Character frames addressed by (direction, frame index). Loaded once at
/// startup, read-only afterwards.
#[derive(Debug)]
pub struct SpriteBank {
    frames: [Vec<RgbaImage>; DIRECTION_COUNT],
    frame_w: u32,
    frame_h: u32,
}

impl SpriteBank {
    /// Load `cs_<dir><frame>.png` for all eight directions from `dir`. The
    /// art is authored at double resolution and halved here. A frame that
    /// fails to load is replaced by the first frame already loaded for its
    /// direction; a direction with no loadable frame at all is a
    /// construction error rather than a runtime surprise.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut banks: [Vec<RgbaImage>; DIRECTION_COUNT] = Default::default();

        for direction in Direction::ALL {
            let frames = &mut banks[direction as usize];
            for index in 0..FRAMES_PER_DIRECTION {
                let path = dir.join(format!("cs_{}{}.png", direction.code(), index));
                match image::open(&path) {
                    Ok(sprite) => {
                        let sprite = sprite.into_rgba8();
                        let (w, h) = sprite.dimensions();
                        frames.push(imageops::resize(
                            &sprite,
                            (w / 2).max(1),
                            (h / 2).max(1),
                            FilterType::Nearest,
                        ));
                    }
                    Err(err) => {
                        warn!("could not load {}: {err}", path.display());
                        if let Some(first) = frames.first() {
                            frames.push(first.clone());
                        }
                    }
                }
            }

            if frames.is_empty() {
                bail!(
                    "no frames loaded for direction {:?} in {}",
                    direction,
                    dir.display()
                );
            }
        }

        Self::from_frames(banks)
    }

    /// Build a bank from decoded frames. Every direction needs at least one
    /// frame; sizes are normalized to the first frame's dimensions.
    pub fn from_frames(mut frames: [Vec<RgbaImage>; DIRECTION_COUNT]) -> Result<Self> {
        let (frame_w, frame_h) = frames
            .iter()
            .flat_map(|bank| bank.first())
            .map(|frame| frame.dimensions())
            .next()
            .context("sprite bank has no frames")?;

        for (direction, bank) in Direction::ALL.into_iter().zip(&mut frames) {
            if bank.is_empty() {
                bail!("sprite bank has no frames for direction {direction:?}");
            }
            for frame in bank.iter_mut() {
                if frame.dimensions() != (frame_w, frame_h) {
                    *frame = imageops::resize(frame, frame_w, frame_h, FilterType::Nearest);
                }
            }
        }

        Ok(Self {
            frames,
            frame_w,
            frame_h,
        })
    }

    pub fn frame(&self, direction: Direction, index: usize) -> &RgbaImage {
        let bank = &self.frames[direction as usize];
        &bank[index % bank.len()]
    }

    pub fn frame_count(&self, direction: Direction) -> usize {
        self.frames[direction as usize].len()
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_w, self.frame_h)
    }
}

/// The controllable character: logical cell, continuous pixel position, and
/// walk animation, advanced once per simulation tick.
///
/// Outside a move, `pixel == target_pixel` and `cell == target_cell` hold
/// exactly.
pub struct Player {
    // Logical position.
    cell: Cell,
    target_cell: Cell,

    // Continuous position.
    pixel: Vec2,
    target_pixel: Vec2,
    moving: bool,
    speed: f32,

    // Animation.
    facing: Direction,
    frame: usize,
    frame_elapsed_ms: f32,

    // Art.
    sprites: SpriteBank,
}

impl Player {
    pub fn new(config: &GridConfig, start: Cell, sprites: SpriteBank) -> Self {
        let pixel = cell_to_screen(config, start.col, start.row);
        Self {
            cell: start,
            target_cell: start,
            pixel,
            target_pixel: pixel,
            moving: false,
            speed: PLAYER_SPEED,
            facing: Direction::South,
            frame: 0,
            frame_elapsed_ms: 0.,
            sprites,
        }
    }

    /// Start walking toward `target`. Targets off the grid and the current
    /// target are ignored. An ongoing move re-targets immediately; nothing
    /// queues.
    pub fn request_move(&mut self, config: &GridConfig, target: Cell) {
        if !config.contains(target) || target == self.target_cell {
            return;
        }

        // Face the walk direction. A click on the cell being crossed right
        // now has a zero delta; facing is kept for it.
        let dx = (target.col - self.cell.col) as f32;
        let dy = (target.row - self.cell.row) as f32;
        if (dx, dy) != (0., 0.) {
            self.facing = Direction::from_delta(dx, dy);
        }

        self.frame = 0;
        self.frame_elapsed_ms = 0.;
        self.target_cell = target;
        self.target_pixel = cell_to_screen(config, target.col, target.row);
        self.moving = true;
    }

    /// Advance the walk by one tick. Movement covers a constant number of
    /// pixels per tick rather than scaling with `dt_ms`; the loop runs at a
    /// fixed 60 Hz, so on-screen speed is stable. `dt_ms` drives the
    /// walk-cycle cadence only.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.moving {
            return;
        }
        debug_assert_ne!(self.cell, self.target_cell);

        // Walk cycle, independent of arrival below.
        self.frame_elapsed_ms += dt_ms;
        if self.frame_elapsed_ms > FRAME_DURATION_MS {
            self.frame = (self.frame + 1) % self.sprites.frame_count(self.facing);
            self.frame_elapsed_ms = 0.;
        }

        let remaining = self.target_pixel - self.pixel;
        let dist = remaining.magnitude();
        if dist < self.speed {
            // Arrived. The walk cycle stays wherever it left off.
            self.pixel = self.target_pixel;
            self.cell = self.target_cell;
            self.moving = false;
        } else {
            self.pixel += remaining * (self.speed / dist);
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn target_cell(&self) -> Cell {
        self.target_cell
    }

    pub fn pixel(&self) -> Vec2 {
        self.pixel
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn sprites(&self) -> &SpriteBank {
        &self.sprites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> SpriteBank {
        let frames = std::array::from_fn(|_| vec![RgbaImage::new(4, 4); FRAMES_PER_DIRECTION]);
        SpriteBank::from_frames(frames).unwrap()
    }

    fn config() -> GridConfig {
        GridConfig::new(1024, 768, 64, 12)
    }

    fn player() -> Player {
        Player::new(&config(), Cell::new(2, 2), bank())
    }

    #[test]
    fn starts_idle_at_its_cell() {
        let player = player();
        assert!(!player.is_moving());
        assert_eq!(player.cell(), player.target_cell());
        assert_eq!(player.pixel(), player.target_pixel);
        assert_eq!(player.facing(), Direction::South);
    }

    #[test]
    fn out_of_grid_targets_are_ignored() {
        let cfg = config();
        let mut player = player();
        for target in [
            Cell::new(-1, 0),
            Cell::new(0, -1),
            Cell::new(12, 0),
            Cell::new(0, 12),
        ] {
            player.request_move(&cfg, target);
            assert!(!player.is_moving(), "{target:?}");
            assert_eq!(player.target_cell(), Cell::new(2, 2), "{target:?}");
        }
    }

    #[test]
    fn repeating_the_current_target_is_a_no_op() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(5, 2));
        let (facing, frame, pixel) = (player.facing(), player.frame(), player.pixel());

        player.request_move(&cfg, Cell::new(5, 2));
        assert!(player.is_moving());
        assert_eq!(player.target_cell(), Cell::new(5, 2));
        assert_eq!(player.facing(), facing);
        assert_eq!(player.frame(), frame);
        assert_eq!(player.pixel(), pixel);
    }

    #[test]
    fn requesting_the_start_cell_is_a_no_op() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(2, 2));
        assert!(!player.is_moving());
    }

    #[test]
    fn retargets_mid_walk() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(5, 2));
        assert_eq!(player.facing(), Direction::East);
        player.tick(16.7);
        assert!(player.is_moving());

        player.request_move(&cfg, Cell::new(2, 5));
        assert!(player.is_moving());
        assert_eq!(player.target_cell(), Cell::new(2, 5));
        assert_eq!(player.facing(), Direction::South);
    }

    #[test]
    fn zero_delta_retarget_keeps_facing() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(5, 2));
        player.tick(16.7);

        // Logical cell is still (2, 2) until arrival, so walking back to it
        // is a zero delta.
        player.request_move(&cfg, Cell::new(2, 2));
        assert!(player.is_moving());
        assert_eq!(player.target_cell(), Cell::new(2, 2));
        assert_eq!(player.facing(), Direction::East);
    }

    #[test]
    fn walk_cycle_advances_past_frame_duration() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(5, 2));
        assert_eq!(player.frame(), 0);

        player.tick(60.);
        assert_eq!(player.frame(), 0);
        player.tick(60.);
        assert_eq!(player.frame(), 1);
        player.tick(60.);
        player.tick(60.);
        assert_eq!(player.frame(), 2);
        player.tick(60.);
        player.tick(60.);
        assert_eq!(player.frame(), 0);
    }

    #[test]
    fn walk_cycle_is_idle_while_standing() {
        let mut player = player();
        player.tick(1000.);
        assert_eq!(player.frame(), 0);
        assert_eq!(player.frame_elapsed_ms, 0.);
    }

    #[test]
    fn converges_to_the_target_exactly() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(5, 2));

        let start = player.pixel();
        let bound = ((player.target_pixel - start).magnitude() / PLAYER_SPEED).ceil() as usize + 1;
        let mut ticks = 0;
        while player.is_moving() {
            player.tick(16.7);
            ticks += 1;
            assert!(ticks <= bound, "did not converge in {bound} ticks");
        }

        assert_eq!(player.cell(), Cell::new(5, 2));
        assert_eq!(player.pixel(), player.target_pixel);
        assert_eq!(
            player.pixel(),
            cell_to_screen(&cfg, 5, 2),
            "arrival must be exact"
        );
    }

    #[test]
    fn arrival_keeps_the_last_walk_frame() {
        let cfg = config();
        let mut player = player();
        player.request_move(&cfg, Cell::new(5, 2));
        while player.is_moving() {
            player.tick(60.);
        }

        let frame = player.frame();
        player.tick(60.);
        player.tick(60.);
        assert_eq!(player.frame(), frame);
    }
}
