pub const DIRECTION_COUNT: usize = 8;

/// Eight-way facing, in sprite-sheet order.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    North = 0,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Code used in sprite file names.
    pub fn code(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }

    /// Classify a movement delta into the octant it points at. The circle is
    /// split into eight 45-degree sectors centered on the compass directions,
    /// with boundaries at odd multiples of 22.5 degrees. Screen space has +y
    /// pointing down, so `dy` is negated before the angle is taken. The
    /// magnitude of the delta is irrelevant. A zero delta resolves to East
    /// (`atan2(0, 0) == 0`); callers pass a nonzero delta.
    pub fn from_delta(dx: f32, dy: f32) -> Direction {
        // Sector order walking counterclockwise from 0 degrees.
        const SECTORS: [Direction; DIRECTION_COUNT] = [
            Direction::East,
            Direction::NorthEast,
            Direction::North,
            Direction::NorthWest,
            Direction::West,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
        ];

        let angle = (-dy).atan2(dx).to_degrees().rem_euclid(360.);
        SECTORS[((angle / 45.).round() as usize) % DIRECTION_COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_unit_deltas() {
        let table = [
            ((0., -1.), Direction::North),
            ((1., -1.), Direction::NorthEast),
            ((1., 0.), Direction::East),
            ((1., 1.), Direction::SouthEast),
            ((0., 1.), Direction::South),
            ((-1., 1.), Direction::SouthWest),
            ((-1., 0.), Direction::West),
            ((-1., -1.), Direction::NorthWest),
        ];
        for ((dx, dy), expected) in table {
            assert_eq!(Direction::from_delta(dx, dy), expected, "({dx}, {dy})");
        }
    }

    #[test]
    fn magnitude_is_irrelevant() {
        assert_eq!(Direction::from_delta(0.001, 0.), Direction::East);
        assert_eq!(Direction::from_delta(9., -9.), Direction::NorthEast);
        assert_eq!(Direction::from_delta(-300., 0.), Direction::West);
    }

    #[test]
    fn sectors_split_near_22_5_degrees() {
        let unit = |deg: f32| {
            let rad = deg.to_radians();
            // from_delta negates dy, so hand it screen-space deltas.
            (rad.cos(), -rad.sin())
        };

        let (dx, dy) = unit(22.);
        assert_eq!(Direction::from_delta(dx, dy), Direction::East);
        let (dx, dy) = unit(23.);
        assert_eq!(Direction::from_delta(dx, dy), Direction::NorthEast);
        let (dx, dy) = unit(66.);
        assert_eq!(Direction::from_delta(dx, dy), Direction::NorthEast);
        let (dx, dy) = unit(68.);
        assert_eq!(Direction::from_delta(dx, dy), Direction::North);
    }
}
