pub mod board;
pub mod deadend;
pub mod frontier;
pub mod game;
pub mod node;
pub mod order;
pub mod palette;
pub mod reader;
pub mod render;
pub mod search;

pub use board::{Cell, CellType, Dir, MAX_CELLS, MAX_COLORS, MAX_SIZE, Pos};
pub use game::{GameState, PuzzleInfo};
pub use node::{NodeArena, NodeId, SearchNode};
pub use search::{SearchOptions, SearchReport, SearchResult, search, search_with};
