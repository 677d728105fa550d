use crate::shared::{Cell, Direction};

// Snapshot handed from the update state to the renderer once per frame.
#[derive(Clone, Copy, Debug)]
pub struct GameFrame {
    // Tile under the cursor, present only when it lies on the grid.
    pub hover: Option<Cell>,

    // Character sprite.
    pub player_xy: [f32; 2],
    pub facing: Direction,
    pub frame: usize,
}
