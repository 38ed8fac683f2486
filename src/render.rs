use std::fmt;

use crate::game::Game;

// Each row is pushed one column right so the rhombus reads as a hex board.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.size();
        let w = (n - 1).to_string().len();
        let header: Vec<String> = (0..n).map(|c| (c % 10).to_string()).collect();
        writeln!(f, "{:>w$} {}", "", header.join(" "), w = w)?;
        for (i, row) in self.board().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|t| t.glyph().to_string()).collect();
            writeln!(f, "{:>w$} {}{}", i, " ".repeat(i), cells.join(" "), w = w)?;
        }
        Ok(())
    }
}
