use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;

use flowsolve::node::SearchNode;
use flowsolve::order::order_colors;
use flowsolve::reader::read_puzzle;
use flowsolve::render;
use flowsolve::search::{MEGABYTE, SearchOptions, SearchResult, node_budget, search};

#[derive(Parser, Debug)]
#[command(version, about = "Best-first solver for Flow Free style path puzzles")]
struct Args {
    /// Puzzle files to solve
    #[arg(required = true, value_name = "BOARD")]
    boards: Vec<PathBuf>,

    /// Reduce output
    #[arg(short, long)]
    quiet: bool,

    /// Animate the solution
    #[arg(short = 'A', long)]
    animate: bool,

    /// Speed up animation 4x
    #[arg(short = 'F', long)]
    fast: bool,

    /// Force ANSI color output
    #[arg(short = 'C', long)]
    color: bool,

    /// Write the final state of each solved board to <basename>.svg
    #[arg(short = 'S', long)]
    svg: bool,

    /// Prune moves that strand free cells in dead ends
    #[arg(short = 'd', long)]
    deadends: bool,

    /// Shuffle the color order before solving
    #[arg(short = 'r', long)]
    randomize: bool,

    /// Disable most-constrained color selection
    #[arg(short = 'c', long)]
    no_constrained: bool,

    /// Restrict storage to N nodes
    #[arg(short = 'n', long, value_name = "N", default_value_t = 0)]
    max_nodes: usize,

    /// Restrict storage to N megabytes
    #[arg(short = 'm', long = "max-storage", value_name = "MB", default_value_t = 1024.0)]
    max_mb: f64,

    /// Emit per-board results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BoardReport {
    board: String,
    result: String,
    elapsed_seconds: f64,
    nodes: usize,
}

fn node_mb(nodes: usize) -> f64 {
    (nodes * std::mem::size_of::<SearchNode>()) as f64 / MEGABYTE as f64
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.color {
        colored::control::set_override(true);
    }

    let opts = SearchOptions {
        max_nodes: args.max_nodes,
        max_mb: args.max_mb,
        order_random: args.randomize,
        order_most_constrained: !args.no_constrained,
        check_deadends: args.deadends,
    };

    let max_width = args
        .boards
        .iter()
        .map(|board| board.display().to_string().len())
        .max()
        .unwrap_or(0)
        .max(11);

    let mut reports = Vec::new();
    let mut total_elapsed = [0.0f64; 3];
    let mut total_nodes = [0usize; 3];
    let mut total_count = [0usize; 3];
    let mut boards = 0usize;

    for path in &args.boards {
        let (mut info, state) = match read_puzzle(path) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("{err:#}");
                continue;
            }
        };

        if boards > 0 && !args.quiet {
            println!("\n{}\n", "*".repeat(70));
        }
        boards += 1;

        order_colors(&mut info, opts.order_random);

        if !args.quiet {
            println!(
                "read {0}x{0} board with {1} colors from {2}",
                info.size,
                info.num_colors,
                path.display()
            );
            if opts.order_most_constrained {
                println!("will choose colors by most constrained");
            } else {
                let order = info.color_order[..info.num_colors]
                    .iter()
                    .map(|&color| render::color_name(&info, color))
                    .join("");
                println!("will choose colors in order: {order}");
            }
            println!(
                "will search up to {} nodes ({:.2} MB)",
                node_budget(&opts),
                node_mb(node_budget(&opts))
            );
            println!("{} free cells at start\n", state.num_free);
            render::print_board(&info, &state);
            println!();
        }

        if args.quiet {
            print!("{:>max_width$} ", path.display().to_string());
        }

        let report = search(&info, &state, &opts);
        let elapsed = report.elapsed.as_secs_f64();
        let idx = report.result as usize;
        total_elapsed[idx] += elapsed;
        total_nodes[idx] += report.nodes;
        total_count[idx] += 1;

        if args.quiet {
            println!("{} {:12.3} {:12}", report.result.code(), elapsed, report.nodes);
        } else {
            println!(
                "search {} after {:.3} seconds and {} nodes ({:.2} MB)",
                report.result.describe(),
                elapsed,
                report.nodes,
                node_mb(report.nodes)
            );
            if report.result == SearchResult::Success {
                println!();
                if args.animate {
                    render::animate_solution(&info, &report.final_state, args.fast);
                } else {
                    render::print_board(&info, &report.final_state);
                }
            }
        }

        if args.svg && report.result == SearchResult::Success {
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "board".to_string());
            let out = PathBuf::from(format!("{stem}.svg"));
            render::save_svg(&out, &info, &report.final_state)?;
            if !args.quiet {
                println!("wrote {}", out.display());
            }
        }

        if args.json {
            reports.push(BoardReport {
                board: path.display().to_string(),
                result: report.result.describe().to_string(),
                elapsed_seconds: elapsed,
                nodes: report.nodes,
            });
        }
    }

    if boards > 1 && !args.json {
        println!();
        for (i, result) in SearchResult::ALL.iter().enumerate() {
            if total_count[i] > 0 {
                println!(
                    "{} {} searches took a total of {:.3} seconds and {} nodes",
                    total_count[i],
                    result.describe(),
                    total_elapsed[i],
                    total_nodes[i]
                );
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
