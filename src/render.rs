//! Terminal and SVG rendering of game states.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::board::{Cell, CellType, Dir, MAX_CELLS, Pos};
use crate::game::{GameState, PuzzleInfo};
use crate::palette::{self, PALETTE};

const BORDER: &str = "#";

fn colorize(info: &PuzzleInfo, color: usize, glyph: char) -> String {
    let entry = &PALETTE[info.color_ids[color]];
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        let (r, g, b) = entry.fg_rgb;
        glyph.to_string().black().on_truecolor(r, g, b).to_string()
    } else {
        entry.display_char.to_string()
    }
}

/// The color's canonical letter, painted in its own color.
pub fn color_name(info: &PuzzleInfo, color: usize) -> String {
    colorize(info, color, PALETTE[info.color_ids[color]].input_char)
}

fn cell_str(info: &PuzzleInfo, cell: Cell) -> String {
    match cell.ty() {
        CellType::Free => " ".to_string(),
        CellType::Path => colorize(info, cell.color(), cell.dir().glyph()),
        CellType::Init => colorize(info, cell.color(), 'o'),
        CellType::Goal => colorize(info, cell.color(), 'O'),
    }
}

pub fn board_string(info: &PuzzleInfo, state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&BORDER.repeat(info.size + 2));
    out.push('\n');
    for y in 0..info.size {
        out.push_str(BORDER);
        for x in 0..info.size {
            out.push_str(&cell_str(info, state.cell(Pos::new(x as i32, y as i32))));
        }
        out.push_str(BORDER);
        out.push('\n');
    }
    out.push_str(&BORDER.repeat(info.size + 2));
    out.push('\n');
    out
}

pub fn print_board(info: &PuzzleInfo, state: &GameState) {
    print!("{}", board_string(info, state));
}

/// The cells of `color`'s chain from init to its current tip, recovered
/// by walking the packed entry directions backwards.
pub fn color_chain(info: &PuzzleInfo, state: &GameState, color: usize) -> Vec<Pos> {
    let mut chain = Vec::new();
    let mut pos = if state.is_completed(color) {
        info.goal_pos[color]
    } else {
        state.head_pos[color]
    };

    loop {
        chain.push(pos);
        if pos == info.init_pos[color] {
            break;
        }
        let back = state.cell(pos).dir().opposite();
        let prev = pos.offset(info.size, back);
        if !prev.is_valid() {
            break;
        }
        pos = prev;
    }

    chain.reverse();
    chain
}

fn rewind(info: &PuzzleInfo) {
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        // Cursor back to the board's top-left corner.
        print!("\x1b[{}A\r", info.size + 2);
    } else {
        println!();
    }
}

/// Replay a solved state color by color, one cell per frame.
pub fn animate_solution(info: &PuzzleInfo, state: &GameState, fast: bool) {
    let frame_delay = Duration::from_millis(if fast { 25 } else { 100 });

    // Strip the path cells back out, then grow each chain again.
    let mut replay = *state;
    for i in 0..MAX_CELLS {
        if replay.cells[i].ty() == CellType::Path {
            replay.cells[i] = Cell::FREE;
            replay.num_free += 1;
        }
    }
    print_board(info, &replay);

    for &color in &info.color_order[..info.num_colors] {
        let chain = color_chain(info, state, color);
        for &pos in &chain[1..] {
            replay.cells[pos.index()] = state.cell(pos);
            if state.cell(pos).ty() == CellType::Path {
                replay.num_free -= 1;
            }
            thread::sleep(frame_delay);
            rewind(info);
            print_board(info, &replay);
        }
    }
}

/// Write the state as an SVG image: one rect per cell, a dot per
/// endpoint, and a rounded polyline per color chain.
pub fn save_svg(path: &Path, info: &PuzzleInfo, state: &GameState) -> Result<()> {
    let margin = 1usize;
    let nominal = 256usize;
    let cell_size = (nominal - margin * (info.size + 1)) / info.size;
    let skip = cell_size + margin;
    let dot_radius = cell_size as f64 * 0.35;
    let path_width = cell_size as f64 * 0.35;
    let display_size = skip * info.size + margin;

    let mut out = String::new();
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{display_size}\" height=\"{display_size}\">"
    )?;
    writeln!(
        out,
        "  <rect width=\"{display_size}\" height=\"{display_size}\" style=\"fill: #7b7c41;\" />"
    )?;

    for y in 0..info.size {
        let display_y = margin + skip * y;
        for x in 0..info.size {
            let display_x = margin + skip * x;
            let cell = state.cell(Pos::new(x as i32, y as i32));
            let color = cell.color();

            let cell_bg = match cell.ty() {
                CellType::Path | CellType::Init => palette::hex(PALETTE[info.color_ids[color]].bg_rgb),
                CellType::Goal if state.is_completed(color) => {
                    palette::hex(PALETTE[info.color_ids[color]].bg_rgb)
                }
                _ => "000000".to_string(),
            };

            writeln!(
                out,
                "  <rect x=\"{display_x}\" y=\"{display_y}\" width=\"{cell_size}\" height=\"{cell_size}\" style=\"fill: #{cell_bg};\" />"
            )?;

            if matches!(cell.ty(), CellType::Init | CellType::Goal) {
                let cx = display_x as f64 + 0.5 * cell_size as f64;
                let cy = display_y as f64 + 0.5 * cell_size as f64;
                let fg = palette::hex(PALETTE[info.color_ids[color]].fg_rgb);
                writeln!(
                    out,
                    "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{dot_radius}\" style=\"fill: #{fg};\" />"
                )?;
            }
        }
    }

    for color in 0..info.num_colors {
        let mut pos = if state.is_completed(color) {
            info.goal_pos[color]
        } else {
            state.head_pos[color]
        };
        if pos == info.init_pos[color] {
            continue;
        }

        let (x, y) = pos.coords();
        let px = (margin + skip * x as usize) as f64 + 0.5 * cell_size as f64;
        let py = (margin + skip * y as usize) as f64 + 0.5 * cell_size as f64;
        write!(out, "  <path d=\"M {px},{py} ")?;

        loop {
            let cell = state.cell(pos);
            debug_assert_eq!(cell.color(), color);
            let back = cell.dir().opposite();

            match back {
                Dir::Left => write!(out, "h -{skip} ")?,
                Dir::Right => write!(out, "h {skip} ")?,
                Dir::Up => write!(out, "v -{skip} ")?,
                Dir::Down => write!(out, "v {skip} ")?,
            }

            let prev = pos.offset(info.size, back);
            if !prev.is_valid() {
                break;
            }
            pos = prev;
            if pos == info.init_pos[color] {
                break;
            }
        }

        let fg = palette::hex(PALETTE[info.color_ids[color]].fg_rgb);
        writeln!(
            out,
            "\" style=\"stroke: #{fg}; stroke-width: {path_width}; fill: none; stroke-linecap: round\" />"
        )?;
    }

    writeln!(out, "</svg>")?;

    fs::write(path, out).with_context(|| format!("error writing {}", path.display()))?;
    Ok(())
}
