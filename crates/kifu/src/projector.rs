//! Depth-first projection of a game tree onto a record.

use kifu_parse::{GameTree, Node};
use kifu_record::{MAX_BOARD_SIZE, Record, RecordEngine};
use tracing::{debug, trace};

use crate::{LoadError, PropertyId};

/// Board size used when the game does not say.
pub const DEFAULT_BOARD_SIZE: u8 = 19;

enum Step<'t, S> {
    Visit(&'t GameTree),
    Restore(S),
}

/// Apply every node of `tree` to `engine`, starting at its cursor.
///
/// Each node becomes one history node. Sibling variations all branch from
/// the position reached at the end of their parent's sequence. The first
/// property the engine refuses aborts the walk.
pub fn project<E: RecordEngine>(tree: &GameTree, engine: &mut E) -> Result<(), LoadError> {
    let mut steps = vec![Step::Visit(tree)];
    while let Some(step) = steps.pop() {
        let tree = match step {
            Step::Visit(tree) => tree,
            Step::Restore(snapshot) => {
                engine.restore(snapshot);
                continue;
            }
        };

        for node in &tree.sequence {
            apply_node(node, engine)?;
        }

        if tree.leaves.is_empty() {
            continue;
        }
        let snapshot = engine.snapshot();
        for leaf in tree.leaves.iter().rev() {
            steps.push(Step::Restore(snapshot));
            steps.push(Step::Visit(leaf));
        }
    }
    Ok(())
}

fn apply_node<E: RecordEngine>(node: &Node, engine: &mut E) -> Result<(), LoadError> {
    let id = engine.create_node();
    for property in node.properties() {
        let Some(known) = PropertyId::from_ident(&property.ident) else {
            trace!(ident = %property.ident, "skipping unrecognized property");
            continue;
        };
        known
            .handler()
            .apply(engine, id, &property.values)
            .map_err(|source| LoadError::Property {
                ident: property.ident.clone(),
                span: property.span,
                source,
            })?;
    }
    Ok(())
}

/// Board dimensions from `SZ` on the first node: `N` or `W:H`.
pub fn board_size(tree: &GameTree) -> Result<(u8, u8), LoadError> {
    let Some(size) = tree.root_node().and_then(|node| node.get("SZ")) else {
        return Ok((DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE));
    };
    let value = size.first().unwrap_or_default();
    let dimension = |text: &str| {
        text.trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=MAX_BOARD_SIZE).contains(n))
    };
    let parsed = match value.split_once(':') {
        Some((width, height)) => dimension(width).zip(dimension(height)),
        None => dimension(value).map(|n| (n, n)),
    };
    parsed.ok_or_else(|| LoadError::InvalidBoardSize {
        value: value.to_string(),
        span: size.span,
    })
}

/// Build a fresh [`Record`] for one game and rewind it for playback.
pub fn load_game(tree: &GameTree) -> Result<Record, LoadError> {
    let (width, height) = board_size(tree)?;
    let mut record = Record::new(width, height);
    project(tree, &mut record)?;
    record.rewind();
    debug!(width, height, nodes = record.len(), "loaded game record");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kifu_record::{Color, Point};
    use kifu_testhelpers::init_tracing;

    fn tree(source: &str) -> GameTree {
        kifu_parse::parse(source).unwrap()
    }

    fn p(text: &str) -> Point {
        Point::from_sgf(text).unwrap()
    }

    #[test]
    fn test_board_size_forms() {
        assert_eq!(board_size(&tree("(;GM[1])")).unwrap(), (19, 19));
        assert_eq!(board_size(&tree("(;SZ[13])")).unwrap(), (13, 13));
        assert_eq!(board_size(&tree("(;SZ[9:5])")).unwrap(), (9, 5));
        assert_eq!(board_size(&tree("(;SZ[52])")).unwrap(), (52, 52));
    }

    #[test]
    fn test_board_size_rejects_nonsense() {
        for value in ["0", "53", "x", "9:", "-1"] {
            let source = format!("(;SZ[{value}])");
            let error = board_size(&tree(&source)).unwrap_err();
            assert!(
                matches!(&error, LoadError::InvalidBoardSize { value: v, .. } if v == value),
                "{value:?} gave {error:?}"
            );
        }
    }

    #[test]
    fn test_size_only_read_from_first_node() {
        assert_eq!(board_size(&tree("(;GM[1];SZ[9])")).unwrap(), (19, 19));
    }

    #[test]
    fn test_one_history_node_per_sgf_node() {
        init_tracing();
        let tree = tree("(;GM[1]XX[ignored];B[aa];W[bb](;B[cc])(;B[dd];W[ee]))");
        let record = load_game(&tree).unwrap();
        assert_eq!(record.len(), tree.node_count());
    }

    #[test]
    fn test_variations_share_branch_point() {
        let record = load_game(&tree("(;B[aa](;W[bb])(;W[cc])(;W[dd]))")).unwrap();
        assert_eq!(record.current(), record.root());
        assert_eq!(record.variations().len(), 3);
        for (&id, point) in record.variations().iter().zip(["bb", "cc", "dd"]) {
            let node = record.node(id).unwrap();
            assert_eq!(node.board().count(Color::White), 1);
            assert_eq!(node.board().get(p(point)), Some(Color::White));
            assert_eq!(node.board().get(p("aa")), Some(Color::Black));
        }
    }

    #[test]
    fn test_nested_variations_restore_outer_branch() {
        let source = "(;B[aa](;W[bb](;B[cc])(;B[dd]))(;W[ee]))";
        let record = load_game(&tree(source)).unwrap();
        let root = record.root().unwrap();
        let root_node = record.node(root).unwrap();
        assert_eq!(root_node.children().len(), 2);
        let ee = record.node(root_node.children()[1]).unwrap();
        assert_eq!(ee.board().get(p("bb")), None);
        assert_eq!(ee.board().get(p("ee")), Some(Color::White));
    }

    #[test]
    fn test_record_is_rewound() {
        let record = load_game(&tree("(;B[aa];W[bb];B[cc])")).unwrap();
        assert_eq!(record.current(), record.root());
    }

    #[test]
    fn test_failed_property_reports_ident_and_span() {
        let source = "(;AB[ee];W[ee])";
        let error = load_game(&tree(source)).unwrap_err();
        match error {
            LoadError::Property { ident, span, .. } => {
                assert_eq!(ident, "W");
                assert_eq!(&source[span.range()], "W[ee]");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
