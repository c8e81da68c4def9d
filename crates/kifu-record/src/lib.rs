#![doc = include_str!("../README.md")]

mod color;
pub use color::Color;

mod point;
pub use point::{MAX_BOARD_SIZE, Point};

mod mark;
pub use mark::{InfoField, Mark};

mod board;
pub use board::{Board, MoveError};

mod engine;
pub use engine::RecordEngine;

mod record;
pub use record::{HistoryNode, Move, NodeId, Record, Snapshot};
