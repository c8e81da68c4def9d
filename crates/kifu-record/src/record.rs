//! Move history with variations.

use std::collections::BTreeMap;

use tracing::{trace, warn};

use crate::{Board, Color, InfoField, Mark, MoveError, Point, RecordEngine};

/// Index of a node inside the [`Record`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A saved cursor position. Only meaningful for the record it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    cursor: Option<NodeId>,
}

/// A move as played: `point` is `None` for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub point: Option<Point>,
}

/// One step of the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Position after everything in this node was applied.
    board: Board,
    played: Option<Move>,
    captures: Vec<Point>,
    /// Every point state set on this node, in order.
    changes: Vec<(Point, Option<Color>)>,
    marks: BTreeMap<Point, Mark>,
    labels: BTreeMap<Point, String>,
    comment: Option<String>,
    info: BTreeMap<InfoField, String>,
}

impl HistoryNode {
    fn new(parent: Option<NodeId>, board: Board) -> Self {
        Self {
            parent,
            children: Vec::new(),
            board,
            played: None,
            captures: Vec::new(),
            changes: Vec::new(),
            marks: BTreeMap::new(),
            labels: BTreeMap::new(),
            comment: None,
            info: BTreeMap::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Following nodes; more than one means variations.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move played in this node, if any.
    pub fn played(&self) -> Option<Move> {
        self.played
    }

    /// Stones removed by this node's move.
    pub fn captures(&self) -> &[Point] {
        &self.captures
    }

    pub fn changes(&self) -> &[(Point, Option<Color>)] {
        &self.changes
    }

    pub fn mark(&self, point: Point) -> Option<Mark> {
        self.marks.get(&point).copied()
    }

    pub fn marks(&self) -> impl Iterator<Item = (Point, Mark)> + '_ {
        self.marks.iter().map(|(p, m)| (*p, *m))
    }

    pub fn label(&self, point: Point) -> Option<&str> {
        self.labels.get(&point).map(String::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.labels.iter().map(|(p, l)| (*p, l.as_str()))
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn info(&self, field: InfoField) -> Option<&str> {
        self.info.get(&field).map(String::as_str)
    }
}

/// A game record: a tree of history nodes plus a playback cursor.
///
/// Engine calls naming a node this record did not create change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    nodes: Vec<HistoryNode>,
    roots: Vec<NodeId>,
    cursor: Option<NodeId>,
    /// Position shown before the first node.
    empty: Board,
}

impl Record {
    /// An empty record for a `width` × `height` board.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            cursor: None,
            empty: Board::new(width, height),
        }
    }

    pub fn width(&self) -> u8 {
        self.empty.width()
    }

    pub fn height(&self) -> u8 {
        self.empty.height()
    }

    /// Number of history nodes across all variations.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Ids from another record may return unrelated nodes.
    pub fn node(&self, id: NodeId) -> Option<&HistoryNode> {
        self.nodes.get(id.0)
    }

    /// The first node of the game.
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.cursor
    }

    pub fn current_node(&self) -> Option<&HistoryNode> {
        self.cursor.and_then(|id| self.node(id))
    }

    /// Position at the cursor.
    pub fn board(&self) -> &Board {
        self.current_node().map_or(&self.empty, HistoryNode::board)
    }

    /// Nodes reachable by [`next`](Self::next) from the cursor.
    pub fn variations(&self) -> &[NodeId] {
        match self.current_node() {
            Some(node) => node.children(),
            None => &self.roots,
        }
    }

    /// Move the cursor to the first node.
    pub fn first(&mut self) -> Option<NodeId> {
        self.cursor = self.root();
        self.cursor
    }

    /// Step into variation `variation` (0 is the main line).
    pub fn next(&mut self, variation: usize) -> Option<NodeId> {
        let id = *self.variations().get(variation)?;
        self.cursor = Some(id);
        Some(id)
    }

    /// Step back to the parent node.
    pub fn previous(&mut self) -> Option<NodeId> {
        let parent = self.current_node()?.parent()?;
        self.cursor = Some(parent);
        Some(parent)
    }

    /// Nodes from the root to the cursor, inclusive.
    pub fn line(&self) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut at = self.cursor;
        while let Some(id) = at {
            line.push(id);
            at = self.node(id).and_then(HistoryNode::parent);
        }
        line.reverse();
        line
    }

    /// Follow the first child from the root to the end of the main line.
    pub fn main_line(&self) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut at = self.root();
        while let Some(id) = at {
            line.push(id);
            at = self.node(id).and_then(|n| n.children().first().copied());
        }
        line
    }

    /// Game information recorded on the first node.
    pub fn game_info(&self, field: InfoField) -> Option<&str> {
        self.root()
            .and_then(|id| self.node(id))
            .and_then(|node| node.info(field))
    }

    /// Node to write to. Ids this record never handed out are logged and
    /// skipped.
    fn node_mut(&mut self, id: NodeId) -> Option<&mut HistoryNode> {
        let entry = self.nodes.get_mut(id.0);
        if entry.is_none() {
            warn!(node = id.0, "ignoring unknown history node");
        }
        entry
    }
}

impl RecordEngine for Record {
    type NodeId = NodeId;
    type Snapshot = Snapshot;

    fn dimensions(&self) -> (u8, u8) {
        (self.width(), self.height())
    }

    fn create_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        let board = self.board().clone();
        self.nodes.push(HistoryNode::new(self.cursor, board));
        match self.cursor.and_then(|parent| self.nodes.get_mut(parent.0)) {
            Some(parent) => parent.children.push(id),
            None => self.roots.push(id),
        }
        self.cursor = Some(id);
        trace!(node = id.0, parent = ?self.node(id).and_then(HistoryNode::parent), "created history node");
        id
    }

    fn play_move(
        &mut self,
        node: NodeId,
        point: Option<Point>,
        color: Color,
    ) -> Result<Vec<Point>, MoveError> {
        let Some(entry) = self.node_mut(node) else {
            return Ok(Vec::new());
        };
        let captures = match point {
            Some(point) => entry.board.evaluate_move(point, color)?,
            None => Vec::new(),
        };
        entry.played = Some(Move { color, point });
        entry.captures = captures.clone();
        Ok(captures)
    }

    fn set_point_state(&mut self, node: NodeId, points: &[Point], state: Option<Color>) {
        let Some(entry) = self.node_mut(node) else {
            return;
        };
        for &point in points {
            if entry.board.set(point, state) {
                entry.changes.push((point, state));
            } else {
                warn!(%point, "ignoring stone outside the board");
            }
        }
    }

    fn set_marker(&mut self, node: NodeId, points: &[Point], mark: Mark) {
        let Some(entry) = self.node_mut(node) else {
            return;
        };
        for &point in points {
            if entry.board.contains(point) {
                entry.marks.insert(point, mark);
            } else {
                warn!(%point, "ignoring marker outside the board");
            }
        }
    }

    fn set_label(&mut self, node: NodeId, point: Point, text: &str) {
        let Some(entry) = self.node_mut(node) else {
            return;
        };
        if entry.board.contains(point) {
            entry.labels.insert(point, text.to_string());
        } else {
            warn!(%point, "ignoring label outside the board");
        }
    }

    fn set_comment(&mut self, node: NodeId, text: &str) {
        if let Some(entry) = self.node_mut(node) {
            entry.comment = Some(text.to_string());
        }
    }

    fn set_info(&mut self, node: NodeId, field: InfoField, value: &str) {
        if let Some(entry) = self.node_mut(node) {
            entry.info.insert(field, value.to_string());
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.cursor = snapshot.cursor;
    }

    fn rewind(&mut self) {
        self.first();
    }
}
