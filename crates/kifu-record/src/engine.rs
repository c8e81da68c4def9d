//! The interface the SGF projector drives.

use crate::{Color, InfoField, Mark, MoveError, Point};

/// Something that can receive a game tree, node by node.
///
/// The projector creates one history node per SGF node and fills it through
/// the other calls. To visit sibling variations it takes a snapshot at the
/// branch point and restores it after each sibling.
pub trait RecordEngine {
    /// Handle to a history node.
    type NodeId: Copy;
    /// Saved cursor position.
    type Snapshot: Copy;

    /// Board width and height.
    fn dimensions(&self) -> (u8, u8);

    /// Append a node after the cursor and move the cursor onto it. The new
    /// node starts from the position of its parent.
    fn create_node(&mut self) -> Self::NodeId;

    /// Validate a move on `node`'s position and record it. `None` is a pass.
    ///
    /// Returns the opponent stones the move captures. Stones are not placed:
    /// the caller applies the move and the captures with
    /// [`set_point_state`](Self::set_point_state). On error nothing changes.
    fn play_move(
        &mut self,
        node: Self::NodeId,
        point: Option<Point>,
        color: Color,
    ) -> Result<Vec<Point>, MoveError>;

    /// Set points to a stone or to empty, bypassing move rules.
    fn set_point_state(&mut self, node: Self::NodeId, points: &[Point], state: Option<Color>);

    fn set_marker(&mut self, node: Self::NodeId, points: &[Point], mark: Mark);

    fn set_label(&mut self, node: Self::NodeId, point: Point, text: &str);

    fn set_comment(&mut self, node: Self::NodeId, text: &str);

    fn set_info(&mut self, node: Self::NodeId, field: InfoField, value: &str);

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: Self::Snapshot);

    /// Move the cursor back to the first node for playback.
    fn rewind(&mut self);
}
