//! Text-board parsing.
//!
//! One row per line; letters are endpoints (each appearing exactly
//! twice), anything else is a free cell. Two dialects are accepted: if
//! every letter falls in `A..P` the letters map directly to palette
//! indices, otherwise a curated legacy set applies.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use crate::board::{Cell, CellType, Dir, MAX_COLORS, MAX_SIZE, Pos};
use crate::game::{GameState, PuzzleInfo};
use crate::palette;

pub const MIN_SIZE: usize = 2;

pub fn read_puzzle(path: &Path) -> Result<(PuzzleInfo, GameState)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("error opening {}", path.display()))?;
    parse_puzzle(&text, &path.display().to_string())
}

/// True when every letter in the board falls in `A..P`, i.e. letters map
/// directly to palette indices instead of through the legacy table.
fn direct_dialect(text: &str) -> bool {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c as i64)
        .max()
        .is_none_or(|max| max - ('A' as i64) < MAX_COLORS as i64)
}

pub fn parse_puzzle(text: &str, name: &str) -> Result<(PuzzleInfo, GameState)> {
    let direct = direct_dialect(text);

    let mut info = PuzzleInfo::new(0);
    let mut state = GameState::default();
    let mut color_tbl: HashMap<char, usize> = HashMap::new();

    let mut lines = text.lines();
    let first = lines.next().ok_or_else(|| anyhow!("{name}: empty file"))?;
    let first = first.strip_suffix('\r').unwrap_or(first);
    if first.len() < MIN_SIZE {
        bail!("{name}:1: expected at least {MIN_SIZE} characters per row");
    }
    if first.len() > MAX_SIZE {
        bail!("{name}:1: size too big!");
    }
    info.size = first.len();

    for y in 0..info.size {
        let line = if y == 0 {
            first
        } else {
            let raw = lines
                .next()
                .ok_or_else(|| anyhow!("{name}:{}: unexpected end of file", y + 1))?;
            raw.strip_suffix('\r').unwrap_or(raw)
        };
        if line.len() != info.size {
            bail!(
                "{name}:{}: wrong number of characters (expected {}, got {})",
                y + 1,
                info.size,
                line.len()
            );
        }

        for (x, ch) in line.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                state.num_free += 1;
                continue;
            }

            let pos = Pos::new(x as i32, y as i32);
            match color_tbl.get(&ch) {
                None => {
                    let color = info.num_colors;
                    if color == MAX_COLORS {
                        bail!("{name}:{}: can't use color {ch} - too many colors!", y + 1);
                    }
                    let id = if direct {
                        ch as usize - 'A' as usize
                    } else {
                        palette::color_id(ch)
                            .ok_or_else(|| anyhow!("{name}:{}: unrecognized color {ch}", y + 1))?
                    };
                    info.color_ids[color] = id;
                    info.color_order[color] = color;
                    info.init_pos[color] = pos;
                    info.num_colors += 1;
                    color_tbl.insert(ch, color);
                    state.head_pos[color] = pos;
                    state.cells[pos.index()] = Cell::new(CellType::Init, color, Dir::Left);
                }
                Some(&color) => {
                    if info.goal_pos[color].is_valid() {
                        bail!("{name}:{}: too many {ch} already!", y + 1);
                    }
                    info.goal_pos[color] = pos;
                    state.cells[pos.index()] = Cell::new(CellType::Goal, color, Dir::Left);
                }
            }
        }
    }

    if info.num_colors == 0 {
        bail!("{name}: empty map!");
    }

    for color in 0..info.num_colors {
        if !info.goal_pos[color].is_valid() {
            let ch = color_tbl
                .iter()
                .find(|&(_, &c)| c == color)
                .map(|(&ch, _)| ch)
                .unwrap_or('?');
            bail!("{name}: color {ch} has start but no end");
        }

        // Start each path at the endpoint nearer a wall; identical
        // boards then always produce identical search trees.
        let init_dist = info.init_pos[color].wall_dist(info.size);
        let goal_dist = info.goal_pos[color].wall_dist(info.size);
        if goal_dist < init_dist {
            let tmp = info.init_pos[color];
            info.init_pos[color] = info.goal_pos[color];
            info.goal_pos[color] = tmp;
            state.cells[info.init_pos[color].index()] = Cell::new(CellType::Init, color, Dir::Left);
            state.cells[info.goal_pos[color].index()] = Cell::new(CellType::Goal, color, Dir::Left);
            state.head_pos[color] = info.init_pos[color];
        }

        // Endpoints that already touch close their color immediately;
        // no move could ever connect them otherwise.
        for dir in Dir::ALL {
            if info.init_pos[color].offset(info.size, dir) == info.goal_pos[color] {
                state.cells[info.goal_pos[color].index()] =
                    Cell::new(CellType::Goal, color, dir);
                state.completed |= 1 << color;
                break;
            }
        }
    }

    Ok((info, state))
}
