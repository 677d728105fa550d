use image::RgbaImage;
use isowalk::{
    cell_to_screen, Cell, Direction, GridConfig, Player, SpriteBank, FRAMES_PER_DIRECTION,
    GRID_SIZE, PLAYER_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_WIDTH,
};
use std::path::PathBuf;

fn config() -> GridConfig {
    GridConfig::new(SCREEN_WIDTH, SCREEN_HEIGHT, TILE_WIDTH, GRID_SIZE)
}

fn bank() -> SpriteBank {
    let frames = std::array::from_fn(|_| vec![RgbaImage::new(8, 8); FRAMES_PER_DIRECTION]);
    SpriteBank::from_frames(frames).unwrap()
}

#[test]
fn click_east_walks_to_the_clicked_tile() {
    let cfg = config();
    let mut player = Player::new(&cfg, Cell::new(2, 2), bank());

    player.request_move(&cfg, Cell::new(5, 2));
    assert_eq!(player.facing(), Direction::East);
    assert!(player.is_moving());

    for _ in 0..1000 {
        if !player.is_moving() {
            break;
        }
        player.tick(16.7);
    }

    assert!(!player.is_moving());
    assert_eq!(player.cell(), Cell::new(5, 2));
    assert_eq!(player.pixel(), cell_to_screen(&cfg, 5, 2));
}

#[test]
fn convergence_is_bounded_by_distance_over_speed() {
    let cfg = config();
    let mut player = Player::new(&cfg, Cell::new(0, 0), bank());

    // Corner to corner is the longest straight-line walk on the grid.
    player.request_move(&cfg, Cell::new(11, 11));
    let distance = (cell_to_screen(&cfg, 11, 11) - cell_to_screen(&cfg, 0, 0)).magnitude();
    let bound = (distance / PLAYER_SPEED).ceil() as usize + 1;

    let mut ticks = 0;
    while player.is_moving() {
        player.tick(16.7);
        ticks += 1;
        assert!(ticks <= bound, "no arrival after {bound} ticks");
    }
    assert_eq!(player.cell(), Cell::new(11, 11));
}

#[test]
fn every_octant_reaches_its_neighbor() {
    let cfg = config();
    let center = Cell::new(5, 5);
    let cases = [
        (Cell::new(5, 4), Direction::North),
        (Cell::new(6, 4), Direction::NorthEast),
        (Cell::new(6, 5), Direction::East),
        (Cell::new(6, 6), Direction::SouthEast),
        (Cell::new(5, 6), Direction::South),
        (Cell::new(4, 6), Direction::SouthWest),
        (Cell::new(4, 5), Direction::West),
        (Cell::new(4, 4), Direction::NorthWest),
    ];

    for (target, facing) in cases {
        let mut player = Player::new(&cfg, center, bank());
        player.request_move(&cfg, target);
        assert_eq!(player.facing(), facing, "{target:?}");

        for _ in 0..1000 {
            if !player.is_moving() {
                break;
            }
            player.tick(16.7);
        }
        assert_eq!(player.cell(), target);
        assert_eq!(player.pixel(), cell_to_screen(&cfg, target.col, target.row));
    }
}

#[test]
fn grid_delta_table_matches_the_classifier() {
    let table = [
        ((0, -1), Direction::North),
        ((1, -1), Direction::NorthEast),
        ((1, 0), Direction::East),
        ((1, 1), Direction::SouthEast),
        ((0, 1), Direction::South),
        ((-1, 1), Direction::SouthWest),
        ((-1, 0), Direction::West),
        ((-1, -1), Direction::NorthWest),
    ];
    for ((dx, dy), expected) in table {
        assert_eq!(Direction::from_delta(dx as f32, dy as f32), expected);
    }
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("isowalk-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_frames_fall_back_to_the_first_loaded_one() {
    let dir = scratch_dir("fallback");

    // Only frame 0 exists for each direction.
    for code in ["n", "ne", "e", "se", "s", "sw", "w", "nw"] {
        RgbaImage::new(16, 16)
            .save(dir.join(format!("cs_{code}0.png")))
            .unwrap();
    }

    let bank = SpriteBank::load(&dir).unwrap();
    for direction in Direction::ALL {
        assert_eq!(bank.frame_count(direction), FRAMES_PER_DIRECTION);
    }
    // Source art is halved on load.
    assert_eq!(bank.frame_size(), (8, 8));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn a_direction_with_no_frames_fails_loading() {
    let dir = scratch_dir("empty-direction");

    // South is missing entirely.
    for code in ["n", "ne", "e", "se", "sw", "w", "nw"] {
        RgbaImage::new(16, 16)
            .save(dir.join(format!("cs_{code}0.png")))
            .unwrap();
    }

    let err = SpriteBank::load(&dir).unwrap_err();
    assert!(err.to_string().contains("South"), "{err}");

    let _ = std::fs::remove_dir_all(&dir);
}
