use std::fs;

use anyhow::{bail, Context, Result};
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use npuzzle_solver::{api, solve, Direction, Puzzle};

// The stock instance solved when no puzzle file is given.
const DEMO_PUZZLE: &str = "\
8 3 7
1 6 0
4 2 5

1 2 3
4 5 6
7 8 0
";

struct Options {
    file: Option<String>,
    json: bool,
    pause: bool,
}

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        file: None,
        json: false,
        pause: true,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => opts.json = true,
            "--no-pause" => opts.pause = false,
            _ if arg.starts_with('-') => {
                bail!("Usage: npuzzle-solver [puzzle-file] [--json] [--no-pause]")
            }
            _ if opts.file.is_some() => bail!("Unexpected extra argument: {arg}"),
            _ => opts.file = Some(arg),
        }
    }
    Ok(opts)
}

fn banner(pad: usize, label: &str) -> String {
    let dash = "─".repeat(pad);
    format!("{dash}┤ {label} ├{dash}")
}

fn main() -> Result<()> {
    let opts = parse_args()?;

    let input = match &opts.file {
        Some(path) => fs::read_to_string(path).context("Failed to read the puzzle file")?,
        None => DEMO_PUZZLE.to_owned(),
    };
    let puzzle = input.parse::<Puzzle>().context("Failed to parse the puzzle")?;

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} expanded {pos} boards")?);
    let outcome = solve::best_first(&puzzle, None, || bar.inc(1));
    bar.finish_and_clear();
    let path = outcome.context("Search failed")?;

    if opts.json {
        println!("{}", api::encode(&path)?);
        return Ok(());
    }

    let term = Term::stdout();
    let pause = opts.pause && term.is_term();

    println!("{}", banner(2, "INPUT"));
    for state in &path {
        if let Some(dir) = state.direction() {
            println!("{}", banner(4, &dir.to_string()));
        }
        print!("{state}");
        if pause {
            term.read_key()?;
        }
    }

    println!("total steps : {}", path.len() - 1);
    let moves = path
        .iter()
        .filter_map(|state| state.direction())
        .map(Direction::as_char)
        .collect::<String>();
    if !moves.is_empty() {
        println!("moves : {moves}");
    }
    Ok(())
}
