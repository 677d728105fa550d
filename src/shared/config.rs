use crate::shared::Cell;

/// Grid layout derived once at startup and passed read-only to whoever needs
/// it. Tiles are 2:1 diamonds; the lattice is centered on the screen.
#[derive(Copy, Clone, Debug)]
pub struct GridConfig {
    pub tile_width: f32,
    pub tile_height: f32,
    pub grid_size: i32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl GridConfig {
    pub fn new(screen_w: u32, screen_h: u32, tile_width: u32, grid_size: u32) -> Self {
        let tile_height = tile_width / 2;
        let offset_x = screen_w / 2 - grid_size * tile_width / 4;
        let offset_y = screen_h / 2 - grid_size * tile_height / 2;
        Self {
            tile_width: tile_width as f32,
            tile_height: tile_height as f32,
            grid_size: grid_size as i32,
            offset_x: offset_x as f32,
            offset_y: offset_y as f32,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.grid_size).contains(&cell.col) && (0..self.grid_size).contains(&cell.row)
    }
}
