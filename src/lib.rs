#[macro_use] extern crate log;

mod config;
mod data;
mod disjoint_set;
mod error;
mod game;
mod input;
mod render;

pub use config::Config;
pub use data::{Direction, GameStatus, Player, Point, Sentinel, Tile};
pub use disjoint_set::{DisjointSet, DisjointSetError};
pub use error::{ConfigError, GameError, InputError, InvalidMoveReason};
pub use game::{Game, DEFAULT_SIZE, MAX_SIZE};
pub use input::parse_coords;
