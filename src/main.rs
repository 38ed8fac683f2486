#[macro_use] extern crate log;

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{self, stdin, BufRead, Write};
use std::process;

use simplelog::WriteLogger;

use hex_game::{parse_coords, Config, Game, GameStatus, Player};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    // stdout belongs to the game dialogue, so logs go to a file
    WriteLogger::init(
        config.log_level,
        simplelog::Config::default(),
        File::create(&config.log_file)?,
    )?;

    let mut game = Game::new(config.board_size)?;
    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    let mut player = Player::Red;

    loop {
        print!("{} player's turn. Enter i j: ", player);
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                info!("input closed after {} moves", game.moves_played());
                println!();
                return Ok(());
            }
        };
        let (i, j) = match parse_coords(&line) {
            Ok(coords) => coords,
            Err(e) => {
                println!("Invalid input. {}", e);
                continue;
            }
        };
        match game.play(i, j, player) {
            Ok(status) => {
                println!("{}", game);
                if let GameStatus::Won(winner) = status {
                    println!("{} player wins!", winner);
                    return Ok(());
                }
                player = player.other();
            }
            Err(e) if e.is_invalid_move() => println!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
}
