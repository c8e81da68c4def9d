#![doc = include_str!("../README.md")]

pub use kifu_parse::{GameTree, Node, ParseError, ParseErrorKind, Property, Span, parse};
pub use kifu_record::{
    Board, Color, HistoryNode, InfoField, Mark, Move, MoveError, NodeId, Point, Record,
    RecordEngine,
};

mod error;
pub use error::LoadError;

mod property;
pub use property::{Handler, PropertyError, PropertyId, expand_points};

mod projector;
pub use projector::{DEFAULT_BOARD_SIZE, board_size, load_game, project};

use tracing::debug;

/// The result of loading SGF text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A single game.
    Game(Record),
    /// Several games written one after another.
    Collection(Vec<Record>),
}

impl Parsed {
    /// The single game, if this is not a collection.
    pub fn as_game(&self) -> Option<&Record> {
        match self {
            Parsed::Game(record) => Some(record),
            Parsed::Collection(_) => None,
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            Parsed::Game(record) => vec![record],
            Parsed::Collection(records) => records,
        }
    }
}

/// Parse SGF text and load every game in it.
///
/// A collection yields one record per game, each sized from its own `SZ`.
/// Any error aborts the whole load.
pub fn parse_game_record(text: &str) -> Result<Parsed, LoadError> {
    let tree = parse(text)?;
    if !tree.is_collection() {
        return Ok(Parsed::Game(load_game(&tree)?));
    }
    let records = tree
        .leaves
        .iter()
        .map(load_game)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(games = records.len(), "loaded game collection");
    Ok(Parsed::Collection(records))
}
