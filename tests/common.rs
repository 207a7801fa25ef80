use npuzzle_solver::{Board, Pos, Puzzle};

#[allow(unused)]
pub fn board(rows: &[&[u8]]) -> Board {
    Board::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

#[allow(unused)]
pub fn goal_3x3() -> Board {
    board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]])
}

#[allow(unused)]
pub fn one_move_puzzle() -> Puzzle {
    let initial = board(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]);
    Puzzle::new(initial, goal_3x3(), Pos(1, 2))
}

#[allow(unused)]
pub fn scrambled_puzzle() -> Puzzle {
    let initial = board(&[&[8, 3, 7], &[1, 6, 0], &[4, 2, 5]]);
    Puzzle::new(initial, goal_3x3(), Pos(1, 2))
}
