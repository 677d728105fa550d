use crate::shared::GridConfig;
use nalgebra_glm::Vec2;

/// Logical grid position. Candidates produced by [`screen_to_cell`] may lie
/// outside the lattice; range-check with [`GridConfig::contains`] before
/// acting on one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Screen position of a cell's diamond anchor (top-left of its bounding box).
pub fn cell_to_screen(config: &GridConfig, col: i32, row: i32) -> Vec2 {
    Vec2::new(
        (col - row) as f32 * (config.tile_width / 2.) + config.offset_x,
        (col + row) as f32 * (config.tile_height / 2.) + config.offset_y,
    )
}

/// Inverse of [`cell_to_screen`]. Ties round away from zero (`f32::round`),
/// which decides tile ownership on diamond edges.
pub fn screen_to_cell(config: &GridConfig, x: f32, y: f32) -> Cell {
    let adj_x = x - config.offset_x;
    let adj_y = y - config.offset_y;
    Cell::new(
        ((2. * adj_y + adj_x) / (2. * config.tile_height)).round() as i32,
        ((2. * adj_y - adj_x) / (2. * config.tile_height)).round() as i32,
    )
}

/// The four screen-space corners of a cell's diamond: left, top, right,
/// bottom.
pub fn diamond_corners(config: &GridConfig, col: i32, row: i32) -> [Vec2; 4] {
    let anchor = cell_to_screen(config, col, row);
    let (tw, th) = (config.tile_width, config.tile_height);
    [
        Vec2::new(anchor.x, anchor.y + th / 2.),
        Vec2::new(anchor.x + tw / 2., anchor.y),
        Vec2::new(anchor.x + tw, anchor.y + th / 2.),
        Vec2::new(anchor.x + tw / 2., anchor.y + th),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_WIDTH};

    fn config() -> GridConfig {
        GridConfig::new(SCREEN_WIDTH, SCREEN_HEIGHT, TILE_WIDTH, GRID_SIZE)
    }

    #[test]
    fn derived_layout() {
        let cfg = config();
        assert_eq!(cfg.tile_height, 32.);
        assert_eq!(cfg.offset_x, 320.);
        assert_eq!(cfg.offset_y, 192.);
    }

    #[test]
    fn cell_to_screen_reference_point() {
        let cfg = config();
        let p = cell_to_screen(&cfg, 2, 2);
        assert_eq!((p.x, p.y), (320., 256.));
    }

    #[test]
    fn round_trips_every_cell() {
        let cfg = config();
        for row in 0..cfg.grid_size {
            for col in 0..cfg.grid_size {
                let p = cell_to_screen(&cfg, col, row);
                assert_eq!(screen_to_cell(&cfg, p.x, p.y), Cell::new(col, row));
            }
        }
    }

    #[test]
    fn candidates_outside_the_lattice_are_returned_raw() {
        let cfg = config();
        let cell = screen_to_cell(&cfg, 0., 0.);
        assert!(!cfg.contains(cell));
    }

    #[test]
    fn corners_span_one_tile() {
        let cfg = config();
        let [left, top, right, bottom] = diamond_corners(&cfg, 3, 4);
        assert_eq!(right.x - left.x, cfg.tile_width);
        assert_eq!(bottom.y - top.y, cfg.tile_height);
        assert_eq!(left.y, right.y);
        assert_eq!(top.x, bottom.x);
    }
}
