use crate::data::*;
use crate::disjoint_set::DisjointSet;
use crate::error::{GameError, InvalidMoveReason};

pub const DEFAULT_SIZE: usize = 11;
/// Largest accepted board side. Keeps n * n cells and every coordinate well inside isize.
pub const MAX_SIZE: usize = 1024;

/// Row-major grid indexed by board points.
#[derive(Debug, Clone)]
pub struct GMap<T> {
    pub gmap: Vec<Vec<T>>,
}

impl<T> GMap<T> {
    pub fn get(&self, pos: Point) -> &T {
        &self.gmap[pos.row as usize][pos.col as usize]
    }

    pub fn get_mut(&mut self, pos: Point) -> &mut T {
        &mut self.gmap[pos.row as usize][pos.col as usize]
    }
}

/// A game of Hex on an n x n rhombus.
///
/// Each player owns a disjoint-set over every cell plus that player's two
/// edge sentinels. Edge cells are fused to their sentinel once at
/// construction, so a win is a single same-class query on the two sentinels.
#[derive(Debug, Clone)]
pub struct Game {
    n: usize,
    winner: Option<Player>,
    board: GMap<Tile>,
    ds_red: DisjointSet<Point>,
    ds_blue: DisjointSet<Point>,
    moves_played: usize,
}

impl Game {
    pub fn new(n: usize) -> Result<Game, GameError> {
        if n == 0 || n > MAX_SIZE {
            return Err(GameError::InvalidSize(n));
        }
        let cells: Vec<Point> = (0..n as isize)
            .flat_map(|i| (0..n as isize).map(move |j| Point::new(i, j)))
            .collect();
        let partition = |player: Player| {
            let (a, b) = player.sentinels();
            DisjointSet::new(cells.iter().cloned().chain(vec![a.point(n), b.point(n)]))
        };

        let mut game = Game {
            n,
            winner: None,
            board: GMap { gmap: vec![vec![Tile::Empty; n]; n] },
            ds_red: partition(Player::Red),
            ds_blue: partition(Player::Blue),
            moves_played: 0,
        };
        game.fuse_edges()?;
        info!("new {}x{} board, {} cells per partition", n, n, game.ds_red.len());
        Ok(game)
    }

    // Runs exactly once, before any move. Play never unions with a sentinel again.
    fn fuse_edges(&mut self) -> Result<(), GameError> {
        let n = self.n;
        let last = n as isize - 1;
        let (top, bottom) = (Sentinel::Top.point(n), Sentinel::Bottom.point(n));
        let (left, right) = (Sentinel::Left.point(n), Sentinel::Right.point(n));
        for i in 0..n as isize {
            self.ds_red.union(&Point::new(0, i), &top)?;
            self.ds_red.union(&Point::new(last, i), &bottom)?;
            self.ds_blue.union(&Point::new(i, 0), &left)?;
            self.ds_blue.union(&Point::new(i, last), &right)?;
        }
        Ok(())
    }

    /// Claims (row, col) for `player`.
    ///
    /// The move is validated before anything is written, so a rejected move
    /// leaves board, partitions and winner untouched. Turn order is the
    /// caller's business.
    pub fn play(&mut self, row: isize, col: isize, player: Player) -> Result<GameStatus, GameError> {
        let pos = Point::new(row, col);
        if !pos.in_bounds(self.n) {
            warn!("{} tried {}: out of bounds", player, pos);
            return Err(GameError::InvalidMove { point: pos, reason: InvalidMoveReason::OutOfBounds });
        }
        let current = *self.board.get(pos);
        if current != Tile::Empty {
            warn!("{} tried {}: occupied", player, pos);
            return Err(GameError::InvalidMove { point: pos, reason: InvalidMoveReason::Occupied(current) });
        }

        self.make_move(pos, player)?;
        self.check_winner(player)?;
        Ok(self.status())
    }

    fn make_move(&mut self, pos: Point, player: Player) -> Result<(), GameError> {
        let tile = player.tile();
        *self.board.get_mut(pos) = tile;
        self.moves_played += 1;
        for nbr in self.neighbors(pos) {
            if *self.board.get(nbr) == tile {
                self.partition_mut(player).union(&nbr, &pos)?;
            }
        }
        debug!("move {}: {} at {}", self.moves_played, player, pos);
        Ok(())
    }

    // Only the mover is checked, and an existing winner is never replaced.
    fn check_winner(&mut self, player: Player) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Ok(());
        }
        let (a, b) = player.sentinels();
        let (a, b) = (a.point(self.n), b.point(self.n));
        if self.partition_mut(player).same_set(&a, &b)? {
            info!("{} wins after {} moves", player, self.moves_played);
            self.winner = Some(player);
        }
        Ok(())
    }

    fn partition_mut(&mut self, player: Player) -> &mut DisjointSet<Point> {
        match player {
            Player::Red => &mut self.ds_red,
            Player::Blue => &mut self.ds_blue,
        }
    }

    /// In-bounds hex neighbours of `pos`.
    pub fn neighbors(&self, pos: Point) -> Vec<Point> {
        Direction::all_directions()
            .into_iter()
            .filter_map(|d| pos.step(d))
            .filter(|p| p.in_bounds(self.n))
            .collect()
    }

    /// Whether `a` and `b` share a class in `player`'s partition. Points may be
    /// cells or that player's own sentinels.
    pub fn connected(&mut self, player: Player, a: Point, b: Point) -> Result<bool, GameError> {
        Ok(self.partition_mut(player).same_set(&a, &b)?)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(p) => GameStatus::Won(p),
            None => GameStatus::InProgress,
        }
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn tile(&self, row: isize, col: isize) -> Option<Tile> {
        let pos = Point::new(row, col);
        if pos.in_bounds(self.n) {
            Some(*self.board.get(pos))
        } else {
            None
        }
    }

    pub fn board(&self) -> &[Vec<Tile>] {
        &self.board.gmap
    }
}
