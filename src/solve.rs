use std::cmp::Reverse;
use std::collections::BinaryHeap;

use arrayvec::ArrayVec;
use indexmap::map::Entry;

use crate::{Board, BoardState, Direction, Pos, Puzzle, SolveError};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

struct SearchNode {
    state: BoardState,
    depth: u32,
    cost: u32,
    parent: Option<Board>,
}

impl SearchNode {
    fn fit(&self) -> u32 {
        self.depth + self.cost
    }
}

/// Position of `value` in the goal board. A miss means the two boards do not
/// share a value set, which is a configuration error rather than a dead end.
pub fn locate(goal: &Board, value: u8) -> Result<Pos, SolveError> {
    goal.locate(value).ok_or(SolveError::ValueNotFound(value))
}

/// Sum of row and column displacements of every cell against the goal board.
/// The blank's displacement is part of the sum.
pub fn manhattan_cost(board: &Board, goal: &Board) -> Result<u32, SolveError> {
    let mut cost = 0;
    for (pos, value) in board.cells() {
        let target = locate(goal, value)?;
        cost += u32::from(pos.0.abs_diff(target.0)) + u32::from(pos.1.abs_diff(target.1));
    }
    Ok(cost)
}

/// Discovered-but-unexpanded nodes, keyed by board. The heap orders keys by
/// `(fit, stamp)` with stale entries skipped on pop; a key keeps its stamp
/// when its node is replaced, so among equal fits the earliest-discovered
/// board wins and an equal-fit replacement inherits its priority.
#[derive(Default)]
struct Frontier {
    nodes: IndexMap<Board, (SearchNode, u64)>,
    queue: BinaryHeap<Reverse<(u32, u64, Board)>>,
    next_stamp: u64,
}

impl Frontier {
    fn insert(&mut self, node: SearchNode) {
        let fit = node.fit();
        let key = node.state.board().clone();
        let stamp = match self.nodes.entry(key.clone()) {
            Entry::Occupied(mut ent) => {
                let stamp = ent.get().1;
                ent.insert((node, stamp));
                stamp
            }
            Entry::Vacant(ent) => {
                let stamp = self.next_stamp;
                self.next_stamp += 1;
                ent.insert((node, stamp));
                stamp
            }
        };
        self.queue.push(Reverse((fit, stamp, key)));
    }

    fn fit_of(&self, key: &Board) -> Option<u32> {
        self.nodes.get(key).map(|(node, _)| node.fit())
    }

    fn pop_best(&mut self) -> Option<SearchNode> {
        while let Some(Reverse((fit, stamp, key))) = self.queue.pop() {
            let live = self
                .nodes
                .get(&key)
                .is_some_and(|(node, mark)| *mark == stamp && node.fit() == fit);
            if live {
                return self.nodes.swap_remove(&key).map(|(node, _)| node);
            }
            // Otherwise the entry is stale: the key was expanded or its node
            // replaced since it was queued.
        }
        None
    }
}

fn expand(node: &SearchNode, goal: &Board) -> Result<ArrayVec<SearchNode, 4>, SolveError> {
    let mut children = ArrayVec::new();
    for dir in Direction::ALL {
        let Some(state) = node.state.slide(dir) else {
            continue;
        };
        let cost = manhattan_cost(state.board(), goal)?;
        children.push(SearchNode {
            depth: node.depth + 1,
            cost,
            parent: Some(node.state.board().clone()),
            state,
        });
    }
    Ok(children)
}

fn reconstruct(visited: &IndexMap<Board, SearchNode>, goal: &Board) -> Vec<BoardState> {
    let mut path = std::iter::successors(visited.get(goal), |node| {
        node.parent.as_ref().and_then(|key| visited.get(key))
    })
    .map(|node| node.state.clone())
    .collect::<Vec<_>>();
    path.reverse();
    path
}

/// Best-first search from `puzzle.state` to `puzzle.goal`, priced by
/// `depth + manhattan_cost`. Returns the states from the initial board to the
/// goal inclusive. `step_limit` bounds the number of node expansions;
/// `on_step` fires once per node taken off the frontier.
pub fn best_first(
    puzzle: &Puzzle,
    step_limit: Option<u64>,
    mut on_step: impl FnMut(),
) -> Result<Vec<BoardState>, SolveError> {
    let goal = &puzzle.goal;
    let mut frontier = Frontier::default();
    let mut visited: IndexMap<Board, SearchNode> = IndexMap::default();

    frontier.insert(SearchNode {
        state: puzzle.state.clone(),
        depth: 0,
        cost: manhattan_cost(puzzle.state.board(), goal)?,
        parent: None,
    });

    let mut expanded = 0u64;
    loop {
        let Some(best) = frontier.pop_best() else {
            return Err(SolveError::Unsolvable);
        };
        on_step();

        let key = best.state.board().clone();
        let reached_goal = key == *goal;
        visited.insert(key.clone(), best);
        if reached_goal {
            return Ok(reconstruct(&visited, goal));
        }

        if step_limit.is_some_and(|limit| expanded >= limit) {
            return Err(SolveError::Timeout);
        }
        expanded += 1;

        for child in expand(&visited[&key], goal)? {
            if visited.contains_key(child.state.board()) {
                continue;
            }
            if frontier
                .fit_of(child.state.board())
                .is_some_and(|fit| fit < child.fit())
            {
                continue;
            }
            frontier.insert(child);
        }
    }
}
