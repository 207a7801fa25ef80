use std::mem;
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Board, Puzzle};

impl FromStr for Puzzle {
    type Err = anyhow::Error;

    /// Two whitespace-separated integer grids, initial then goal, split by a
    /// blank line. The blank position is taken from the initial board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grids = Vec::new();
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !rows.is_empty() {
                    grids.push(mem::take(&mut rows));
                }
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<u8>()
                        .with_context(|| format!("Invalid tile {token:?}"))
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        if !rows.is_empty() {
            grids.push(rows);
        }

        let Ok([initial, goal]) = <[_; 2]>::try_from(grids) else {
            bail!("Expected an initial and a goal board separated by a blank line");
        };
        let initial = Board::from_rows(initial).context("Invalid initial board")?;
        let goal = Board::from_rows(goal).context("Invalid goal board")?;
        check_tiles(&initial).context("Invalid initial board")?;
        check_tiles(&goal).context("Invalid goal board")?;
        ensure!(
            initial.size() == goal.size(),
            "Initial board is {}x{0} but goal board is {}x{1}",
            initial.size(),
            goal.size(),
        );

        let blank = initial.locate(0).context("Initial board has no blank cell")?;
        Ok(Puzzle::new(initial, goal, blank))
    }
}

fn check_tiles(board: &Board) -> Result<()> {
    let count = usize::from(board.size()) * usize::from(board.size());
    let mut seen = vec![false; count];
    for (_, value) in board.cells() {
        let idx = usize::from(value);
        ensure!(
            idx < count,
            "Tile {value} does not fit a {0}x{0} board",
            board.size(),
        );
        ensure!(!seen[idx], "Duplicate tile {value}");
        seen[idx] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Pos, Puzzle};

    const INPUT: &str = "\
        1 2 3\n\
        4 5 0\n\
        7 8 6\n\
        \n\
        1 2 3\n\
        4 5 6\n\
        7 8 0\n";

    #[test]
    fn parses_two_boards() {
        let puzzle = INPUT.parse::<Puzzle>().unwrap();
        assert_eq!(puzzle.state.blank(), Pos(1, 2));
        assert_eq!(puzzle.state.direction(), None);
        assert_eq!(puzzle.state.board().locate(6), Some(Pos(2, 2)));
        assert_eq!(puzzle.goal.locate(0), Some(Pos(2, 2)));
    }

    #[test]
    fn rejects_a_single_board() {
        let err = "1 0\n3 2\n".parse::<Puzzle>().unwrap_err();
        assert!(err.to_string().contains("goal board"));
    }

    #[test]
    fn rejects_duplicate_tiles() {
        let input = "1 1\n3 0\n\n1 2\n3 0\n";
        let err = input.parse::<Puzzle>().unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate tile 1"));
    }

    #[test]
    fn rejects_out_of_range_tiles() {
        let input = "1 2\n3 0\n\n1 2\n3 9\n";
        let err = input.parse::<Puzzle>().unwrap_err();
        assert!(format!("{err:#}").contains("Tile 9"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let input = "1 2 3\n4 5\n7 8 6\n\n1 2 3\n4 5 6\n7 8 0\n";
        assert!(input.parse::<Puzzle>().is_err());
    }

    #[test]
    fn rejects_mismatched_sizes() {
        let input = "1 0\n3 2\n\n1 2 3\n4 5 6\n7 8 0\n";
        assert!(input.parse::<Puzzle>().is_err());
    }
}
