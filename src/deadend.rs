//! Dead-end pruning over the free-cell graph.

use crate::board::{Dir, Pos};
use crate::game::{GameState, PuzzleInfo};

/// A free cell is a dead end when fewer than two of its neighbors are
/// effectively free. Heads and unreached goals of open colors count as
/// effectively free, since an active path can still extend through them.
fn cell_is_deadend(info: &PuzzleInfo, state: &GameState, pos: Pos) -> bool {
    debug_assert!(pos.is_valid() && state.cell(pos).is_free());

    let mut usable = 0;
    for dir in Dir::ALL {
        let n = pos.offset(info.size, dir);
        if !n.is_valid() {
            continue;
        }
        if state.cell(n).is_free() {
            usable += 1;
        } else {
            for color in 0..info.num_colors {
                if state.is_completed(color) {
                    continue;
                }
                if n == info.goal_pos[color] || n == state.head_pos[color] {
                    usable += 1;
                }
            }
        }
    }

    usable <= 1
}

/// Whether the most recent move strangled some free cell. Scans the free
/// neighbors of the new head and, because a move can also strand a cell
/// one step removed, the free neighbors of each in-bounds neighbor.
/// Returns `true` when the state should be discarded.
pub fn check_deadends(info: &PuzzleInfo, state: &GameState) -> bool {
    let color = state.last_color as usize;
    if color >= info.num_colors {
        return false;
    }

    let head = state.head_pos[color];
    for dir in Dir::ALL {
        let n = head.offset(info.size, dir);
        if !n.is_valid() {
            continue;
        }
        if state.cell(n).is_free() && cell_is_deadend(info, state, n) {
            return true;
        }
        for dir2 in Dir::ALL {
            let n2 = n.offset(info.size, dir2);
            if n2.is_valid() && state.cell(n2).is_free() && cell_is_deadend(info, state, n2) {
                return true;
            }
        }
    }

    false
}
