use std::fmt;

use crate::{Board, BoardState, Direction, SolveError};

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board().fmt(f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = usize::from(self.size());
        let width = (size * size - 1).to_string().len();
        rule(f, size, width, ['┌', '┬', '┐'])?;
        for (i, row) in self.rows().enumerate() {
            for &value in row {
                if value == 0 {
                    write!(f, "│ {:width$} ", "")?;
                } else {
                    write!(f, "│ {value:>width$} ")?;
                }
            }
            writeln!(f, "│")?;
            let glyphs = if i + 1 == size {
                ['└', '┴', '┘']
            } else {
                ['├', '┼', '┤']
            };
            rule(f, size, width, glyphs)?;
        }
        Ok(())
    }
}

fn rule(
    f: &mut fmt::Formatter<'_>,
    size: usize,
    width: usize,
    [left, mid, right]: [char; 3],
) -> fmt::Result {
    let dash = "─".repeat(width + 2);
    write!(f, "{left}")?;
    for i in 0..size {
        if i > 0 {
            write!(f, "{mid}")?;
        }
        f.write_str(&dash)?;
    }
    writeln!(f, "{right}")
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueNotFound(value) => {
                write!(f, "value {value} is missing from the goal board")
            }
            Self::Unsolvable => "no move sequence reaches the goal board".fmt(f),
            Self::Timeout => "step budget exhausted before reaching the goal board".fmt(f),
        }
    }
}

impl std::error::Error for SolveError {}
