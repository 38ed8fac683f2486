use std::fmt;

/// Board coordinate. Signed so the out-of-grid sentinels fit in the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: isize,
    pub col: isize,
}

impl Point {
    pub fn new(row: isize, col: isize) -> Point {
        Point { row, col }
    }

    /// Neighbour in `dir`, or None when the coordinate would overflow.
    pub fn step(&self, dir: Direction) -> Option<Point> {
        let (dr, dc) = dir.offset();
        Some(Point { row: self.row.checked_add(dr)?, col: self.col.checked_add(dc)? })
    }

    pub fn in_bounds(&self, n: usize) -> bool {
        let n = n as isize;
        0 <= self.row && self.row < n && 0 <= self.col && self.col < n
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red, Blue,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    pub fn tile(self) -> Tile {
        match self {
            Player::Red => Tile::Red,
            Player::Blue => Tile::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Blue => "blue",
        }
    }

    /// The two edges this player has to join: top/bottom for red, left/right for blue.
    pub fn sentinels(self) -> (Sentinel, Sentinel) {
        match self {
            Player::Red => (Sentinel::Top, Sentinel::Bottom),
            Player::Blue => (Sentinel::Left, Sentinel::Right),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty, Red, Blue,
}

impl Tile {
    pub fn glyph(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Red => 'R',
            Tile::Blue => 'B',
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Red => Some(Player::Red),
            Tile::Blue => Some(Player::Blue),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Top, Bottom, Left, Right,
}

impl Sentinel {
    pub fn point(&self, n: usize) -> Point {
        let n = n as isize;
        match self {
            Sentinel::Top => Point::new(-1, 0),
            Sentinel::Bottom => Point::new(n, 0),
            Sentinel::Left => Point::new(0, -1),
            Sentinel::Right => Point::new(0, n),
        }
    }
}

// Row-shifted hex tiling: a cell touches the one below-left and above-right,
// never below-right or above-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Down, DownLeft, Right, Left, Up, UpRight,
}

impl Direction {
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
        }
    }

    pub fn all_directions() -> Vec<Direction> {
        vec![Direction::Down, Direction::DownLeft, Direction::Right,
        Direction::Left, Direction::Up, Direction::UpRight]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_offsets() {
        let p = Point::new(2, 2);
        let nbrs: Vec<Point> = Direction::all_directions().into_iter().filter_map(|d| p.step(d)).collect();
        assert_eq!(nbrs, vec![
            Point::new(3, 2), Point::new(3, 1), Point::new(2, 3),
            Point::new(2, 1), Point::new(1, 2), Point::new(1, 3),
        ]);
        assert!(!nbrs.contains(&Point::new(3, 3)));
        assert!(!nbrs.contains(&Point::new(1, 1)));
    }

    #[test]
    fn step_stops_at_coordinate_limits() {
        assert_eq!(Point::new(isize::MAX, 0).step(Direction::Down), None);
        assert_eq!(Point::new(0, isize::MIN).step(Direction::Left), None);
        assert_eq!(Point::new(isize::MAX, 0).step(Direction::Up), Some(Point::new(isize::MAX - 1, 0)));
    }

    #[test]
    fn sentinels_sit_outside_the_grid() {
        for n in 1..6 {
            for s in &[Sentinel::Top, Sentinel::Bottom, Sentinel::Left, Sentinel::Right] {
                assert!(!s.point(n).in_bounds(n));
            }
        }
        assert_eq!(Sentinel::Bottom.point(11), Point::new(11, 0));
        assert_eq!(Sentinel::Right.point(11), Point::new(0, 11));
    }

    #[test]
    fn player_mapping() {
        assert_eq!(Player::Red.other(), Player::Blue);
        assert_eq!(Player::Blue.tile(), Tile::Blue);
        assert_eq!(Player::Red.sentinels(), (Sentinel::Top, Sentinel::Bottom));
        assert_eq!(Tile::Red.owner(), Some(Player::Red));
        assert_eq!(Tile::Empty.owner(), None);
        assert_eq!(Player::Blue.to_string(), "blue");
    }
}
