//! The best-first search driver.

use std::time::{Duration, Instant};

use crate::board::Dir;
use crate::deadend::check_deadends;
use crate::frontier::{Frontier, HeapFrontier};
use crate::game::{GameState, PuzzleInfo};
use crate::node::{NodeArena, NodeId, SearchNode};

pub const MEGABYTE: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Hard node cap; 0 derives the cap from `max_mb`.
    pub max_nodes: usize,
    /// Storage budget in megabytes, used when `max_nodes` is 0.
    pub max_mb: f64,
    pub order_random: bool,
    pub order_most_constrained: bool,
    pub check_deadends: bool,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            max_nodes: 0,
            max_mb: 1024.0,
            order_random: false,
            order_most_constrained: true,
            check_deadends: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Success = 0,
    Unsolvable = 1,
    Full = 2,
}

impl SearchResult {
    pub const ALL: [SearchResult; 3] = [
        SearchResult::Success,
        SearchResult::Unsolvable,
        SearchResult::Full,
    ];

    /// One-character code for compact result lines.
    pub fn code(self) -> char {
        match self {
            SearchResult::Success => 's',
            SearchResult::Unsolvable => 'u',
            SearchResult::Full => 'f',
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            SearchResult::Success => "successful",
            SearchResult::Unsolvable => "unsolvable",
            SearchResult::Full => "out of memory",
        }
    }
}

pub struct SearchReport {
    pub result: SearchResult,
    pub elapsed: Duration,
    /// Nodes ever enqueued, not the final frontier size.
    pub nodes: usize,
    /// The solved state on success, otherwise a copy of the input state.
    pub final_state: GameState,
}

/// Node cap implied by the options: the explicit count, or as many nodes
/// as fit in `max_mb`.
pub fn node_budget(opts: &SearchOptions) -> usize {
    if opts.max_nodes > 0 {
        opts.max_nodes
    } else {
        (opts.max_mb * MEGABYTE as f64 / std::mem::size_of::<SearchNode>() as f64).floor() as usize
    }
}

/// Run the search with the default heap frontier.
pub fn search(info: &PuzzleInfo, init_state: &GameState, opts: &SearchOptions) -> SearchReport {
    let mut frontier = HeapFrontier::with_capacity(node_budget(opts));
    search_with(info, init_state, opts, &mut frontier)
}

/// Dijkstra-style expansion over any frontier discipline: dequeue a
/// node, pick the color to branch on, try its four moves, prune dead
/// ends, enqueue survivors. Terminates on a solved child, an empty
/// frontier, or a full arena.
pub fn search_with<F: Frontier>(
    info: &PuzzleInfo,
    init_state: &GameState,
    opts: &SearchOptions,
    frontier: &mut F,
) -> SearchReport {
    let mut arena = NodeArena::with_capacity(node_budget(opts));
    let start = Instant::now();

    let mut result = None;
    let mut solution: Option<NodeId> = None;

    match arena.create(None, init_state) {
        None => result = Some(SearchResult::Full),
        Some(root) => match prune_if_deadend(info, opts, &mut arena, root) {
            None => result = Some(SearchResult::Unsolvable),
            Some(root) => frontier.push(root, arena[root].cost_to_node),
        },
    }

    while result.is_none() {
        let Some(id) = frontier.pop() else {
            result = Some(SearchResult::Unsolvable);
            break;
        };

        if arena[id].state.is_solved(info) {
            result = Some(SearchResult::Success);
            solution = Some(id);
            break;
        }

        // A state whose colors are all closed while cells remain free
        // has no successors; drop it.
        let Some(color) = arena[id].state.next_color(info, opts.order_most_constrained) else {
            continue;
        };

        for dir in Dir::ALL {
            if !arena[id].state.can_move(info, color, dir) {
                continue;
            }

            let parent_state = arena[id].state;
            let Some(child) = arena.create(Some(id), &parent_state) else {
                result = Some(SearchResult::Full);
                break;
            };
            arena[child].state.make_move(info, color, dir);

            let Some(child) = prune_if_deadend(info, opts, &mut arena, child) else {
                continue;
            };

            if arena[child].state.is_solved(info) {
                result = Some(SearchResult::Success);
                solution = Some(child);
                break;
            }

            frontier.push(child, arena[child].cost_to_node);
        }
    }

    let elapsed = start.elapsed();
    let final_state = match solution {
        Some(id) => arena[id].state,
        None => *init_state,
    };

    SearchReport {
        result: result.expect("search loop exited without a result"),
        elapsed,
        nodes: frontier.total_enqueued(),
        final_state,
    }
}

/// Discard the newest allocation when its move strangled a free cell.
/// Rollback is strictly LIFO, so earlier nodes are untouched.
fn prune_if_deadend(
    info: &PuzzleInfo,
    opts: &SearchOptions,
    arena: &mut NodeArena,
    id: NodeId,
) -> Option<NodeId> {
    if opts.check_deadends && check_deadends(info, &arena[id].state) {
        arena.rollback_last(id);
        return None;
    }
    Some(id)
}
