use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{Board, BoardState, Direction, Pos};

#[derive(Serialize, Deserialize)]
struct WireState {
    #[serde(rename = "Board")]
    board: Vec<Vec<u8>>,
    #[serde(rename = "Direction")]
    direction: String,
    #[serde(rename = "EmptyPoint")]
    empty_point: WirePoint,
}

#[derive(Serialize, Deserialize)]
struct WirePoint {
    #[serde(rename = "X")]
    x: u8,
    #[serde(rename = "Y")]
    y: u8,
}

impl From<&BoardState> for WireState {
    fn from(state: &BoardState) -> Self {
        let Pos(x, y) = state.blank();
        Self {
            board: state.board().rows().map(<[u8]>::to_vec).collect(),
            direction: state
                .direction()
                .map_or_else(String::new, |dir| dir.to_string()),
            empty_point: WirePoint { x, y },
        }
    }
}

impl TryFrom<WireState> for BoardState {
    type Error = anyhow::Error;

    fn try_from(wire: WireState) -> Result<Self> {
        let board = Board::from_rows(wire.board).context("Invalid board")?;
        let direction = match wire.direction.as_str() {
            "" => None,
            "U" => Some(Direction::Up),
            "D" => Some(Direction::Down),
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            other => bail!("Invalid direction {other:?}"),
        };
        let WirePoint { x, y } = wire.empty_point;
        ensure!(
            x < board.size() && y < board.size(),
            "Empty point ({x}, {y}) is outside a {0}x{0} board",
            board.size(),
        );
        Ok(BoardState::new(board, direction, Pos(x, y)))
    }
}

/// Encode a solution path as a JSON list of states.
pub fn encode(path: &[BoardState]) -> Result<String> {
    let wire = path.iter().map(WireState::from).collect::<Vec<_>>();
    serde_json::to_string(&wire).context("Failed to encode the path")
}

/// Decode a JSON list of states, the inverse of [`encode`].
pub fn decode(json: &str) -> Result<Vec<BoardState>> {
    serde_json::from_str::<Vec<WireState>>(json)
        .context("Invalid path JSON")?
        .into_iter()
        .map(BoardState::try_from)
        .collect()
}

/// Encode a single state object.
pub fn encode_state(state: &BoardState) -> Result<String> {
    serde_json::to_string(&WireState::from(state)).context("Failed to encode the state")
}

/// Decode a single state object.
pub fn decode_state(json: &str) -> Result<BoardState> {
    serde_json::from_str::<WireState>(json)
        .context("Invalid state JSON")?
        .try_into()
}
