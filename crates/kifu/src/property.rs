//! Interpretation of SGF properties as record operations.

use kifu_record::{Color, InfoField, Mark, MoveError, Point, RecordEngine};
use tracing::warn;

/// Why a recognized property could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The record refused the move.
    #[error(transparent)]
    Move(#[from] MoveError),
    /// A two-character move value that is not a point.
    #[error("invalid point {0:?}")]
    InvalidPoint(String),
}

/// The SGF properties this loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Black,
    White,
    AddBlack,
    AddWhite,
    AddEmpty,
    TerritoryWhite,
    TerritoryBlack,
    Circle,
    Triangle,
    Cross,
    Square,
    Label,
    Comment,
    Handicap,
    Annotator,
    Copyright,
    Date,
    Event,
    GameName,
    Overtime,
    Round,
    Result,
    Rules,
    Source,
    TimeLimit,
    Place,
    PlayerBlack,
    PlayerWhite,
    BlackRank,
    WhiteRank,
    BlackTeam,
    WhiteTeam,
}

/// What a property does to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Play a move for one side.
    Move(Color),
    /// Place stones (or clear points) without move rules.
    Setup(Option<Color>),
    /// Attach a marker glyph.
    Mark(Mark),
    /// Attach `point:text` labels.
    Label,
    /// Node comment.
    Comment,
    /// Number of handicap stones, kept as text.
    Handicap,
    /// Game information, kept as text.
    Info(InfoField),
}

impl PropertyId {
    /// Recognize an identifier. Anything else is not ours to interpret.
    pub fn from_ident(ident: &str) -> Option<PropertyId> {
        use PropertyId::*;
        Some(match ident {
            "B" => Black,
            "W" => White,
            "AB" => AddBlack,
            "AW" => AddWhite,
            "AE" => AddEmpty,
            "TW" => TerritoryWhite,
            "TB" => TerritoryBlack,
            "CR" => Circle,
            "TR" => Triangle,
            "MA" => Cross,
            "SQ" => Square,
            "LB" => Label,
            "C" => Comment,
            "HA" => Handicap,
            "AN" => Annotator,
            "CP" => Copyright,
            "DT" => Date,
            "EV" => Event,
            "GN" => GameName,
            "OT" => Overtime,
            "RO" => Round,
            "RE" => Result,
            "RU" => Rules,
            "SO" => Source,
            "TM" => TimeLimit,
            "PC" => Place,
            "PB" => PlayerBlack,
            "PW" => PlayerWhite,
            "BR" => BlackRank,
            "WR" => WhiteRank,
            "BT" => BlackTeam,
            "WT" => WhiteTeam,
            _ => return None,
        })
    }

    pub fn handler(self) -> Handler {
        use PropertyId::*;
        match self {
            Black => Handler::Move(Color::Black),
            White => Handler::Move(Color::White),
            AddBlack => Handler::Setup(Some(Color::Black)),
            AddWhite => Handler::Setup(Some(Color::White)),
            AddEmpty => Handler::Setup(None),
            TerritoryWhite => Handler::Mark(Mark::TerritoryWhite),
            TerritoryBlack => Handler::Mark(Mark::TerritoryBlack),
            Circle => Handler::Mark(Mark::Circle),
            Triangle => Handler::Mark(Mark::Triangle),
            Cross => Handler::Mark(Mark::Cross),
            Square => Handler::Mark(Mark::Square),
            Label => Handler::Label,
            Comment => Handler::Comment,
            Handicap => Handler::Handicap,
            Annotator => Handler::Info(InfoField::Annotator),
            Copyright => Handler::Info(InfoField::Copyright),
            Date => Handler::Info(InfoField::Date),
            Event => Handler::Info(InfoField::Event),
            GameName => Handler::Info(InfoField::GameName),
            Overtime => Handler::Info(InfoField::Overtime),
            Round => Handler::Info(InfoField::Round),
            Result => Handler::Info(InfoField::Result),
            Rules => Handler::Info(InfoField::Rules),
            Source => Handler::Info(InfoField::Source),
            TimeLimit => Handler::Info(InfoField::Time),
            Place => Handler::Info(InfoField::Location),
            PlayerBlack => Handler::Info(InfoField::Black),
            PlayerWhite => Handler::Info(InfoField::White),
            BlackRank => Handler::Info(InfoField::BlackRank),
            WhiteRank => Handler::Info(InfoField::WhiteRank),
            BlackTeam => Handler::Info(InfoField::BlackTeam),
            WhiteTeam => Handler::Info(InfoField::WhiteTeam),
        }
    }
}

impl Handler {
    /// Apply the raw `values` of one property to `node`.
    ///
    /// Only moves can fail. The assembler guarantees `values` is non-empty.
    pub fn apply<E: RecordEngine>(
        self,
        engine: &mut E,
        node: E::NodeId,
        values: &[String],
    ) -> Result<(), PropertyError> {
        let first = values.first().map(String::as_str).unwrap_or_default();
        match self {
            Handler::Move(color) => {
                let point = decode_move(first, engine.dimensions())?;
                let captures = engine.play_move(node, point, color)?;
                if let Some(point) = point {
                    engine.set_point_state(node, &[point], Some(color));
                    engine.set_point_state(node, &captures, None);
                }
            }
            Handler::Setup(state) => engine.set_point_state(node, &expand_points(values), state),
            Handler::Mark(mark) => engine.set_marker(node, &expand_points(values), mark),
            Handler::Label => {
                for value in values {
                    let Some((point, text)) = value.split_once(':') else {
                        warn!(value, "skipping label without ':'");
                        continue;
                    };
                    match Point::from_sgf(point) {
                        Some(point) => engine.set_label(node, point, text),
                        None => warn!(value, "skipping label with invalid point"),
                    }
                }
            }
            Handler::Comment => engine.set_comment(node, first),
            Handler::Handicap => engine.set_info(node, InfoField::Handicap, first),
            Handler::Info(field) => engine.set_info(node, field, first),
        }
        Ok(())
    }
}

/// Decode a move value. `None` is a pass.
///
/// Values that are not two characters long are passes, and so is `tt` on
/// boards up to 19×19.
fn decode_move(value: &str, (width, height): (u8, u8)) -> Result<Option<Point>, PropertyError> {
    if value.chars().count() != 2 || (value == "tt" && width <= 19 && height <= 19) {
        return Ok(None);
    }
    Point::from_sgf(value)
        .map(Some)
        .ok_or_else(|| PropertyError::InvalidPoint(value.to_string()))
}

/// Expand point-list values: single points and `aa:bb` rectangles.
/// Malformed entries are skipped.
pub fn expand_points(values: &[String]) -> Vec<Point> {
    let mut points = Vec::new();
    for value in values {
        let expanded = match value.split_once(':') {
            Some((a, b)) => Point::from_sgf(a)
                .zip(Point::from_sgf(b))
                .map(|(a, b)| points.extend(Point::rect(a, b))),
            None => Point::from_sgf(value).map(|p| points.push(p)),
        };
        if expanded.is_none() {
            warn!(value, "skipping malformed point");
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use kifu_record::Record;

    fn p(text: &str) -> Point {
        Point::from_sgf(text).unwrap()
    }

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn apply(record: &mut Record, ident: &str, items: &[&str]) -> Result<(), PropertyError> {
        let node = record.current().unwrap_or_else(|| record.create_node());
        PropertyId::from_ident(ident)
            .expect("known property")
            .handler()
            .apply(record, node, &values(items))
    }

    #[test]
    fn test_unknown_identifiers() {
        assert_eq!(PropertyId::from_ident("GM"), None);
        assert_eq!(PropertyId::from_ident("SZ"), None);
        assert_eq!(PropertyId::from_ident("b"), None);
    }

    #[test]
    fn test_move_handlers_are_two_colors() {
        assert_eq!(PropertyId::Black.handler(), Handler::Move(Color::Black));
        assert_eq!(PropertyId::White.handler(), Handler::Move(Color::White));
    }

    #[test]
    fn test_move_places_stone() {
        let mut record = Record::new(9, 9);
        apply(&mut record, "B", &["ee"]).unwrap();
        assert_eq!(record.board().get(p("ee")), Some(Color::Black));
    }

    #[test]
    fn test_passes() {
        for value in ["", "tt", "abc"] {
            let mut record = Record::new(19, 19);
            apply(&mut record, "W", &[value]).unwrap();
            let played = record.current_node().unwrap().played().unwrap();
            assert_eq!(played.point, None, "{value:?} should be a pass");
            assert_eq!(record.board().count(Color::White), 0);
        }
    }

    #[test]
    fn test_tt_is_a_point_on_large_boards() {
        let mut record = Record::new(21, 21);
        apply(&mut record, "B", &["tt"]).unwrap();
        assert_eq!(record.board().get(p("tt")), Some(Color::Black));
    }

    #[test]
    fn test_invalid_move_point() {
        let mut record = Record::new(19, 19);
        assert_eq!(
            apply(&mut record, "B", &["1a"]),
            Err(PropertyError::InvalidPoint("1a".to_string()))
        );
    }

    #[test]
    fn test_illegal_move_fails() {
        let mut record = Record::new(9, 9);
        apply(&mut record, "AB", &["ee"]).unwrap();
        let before = record.clone();
        assert_eq!(
            apply(&mut record, "W", &["ee"]),
            Err(PropertyError::Move(MoveError::Occupied(p("ee"))))
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_setup_rectangle_and_clear() {
        let mut record = Record::new(9, 9);
        apply(&mut record, "AB", &["aa:cb", "ee"]).unwrap();
        assert_eq!(record.board().count(Color::Black), 7);
        apply(&mut record, "AE", &["ba"]).unwrap();
        assert_eq!(record.board().get(p("ba")), None);
        assert_eq!(record.board().count(Color::Black), 6);
    }

    #[test]
    fn test_markers_and_labels() {
        let mut record = Record::new(9, 9);
        apply(&mut record, "TR", &["aa", "bb"]).unwrap();
        apply(&mut record, "LB", &["cc:A", "dd:hello:world", "nocolon", "??:x"]).unwrap();
        let node = record.current_node().unwrap();
        assert_eq!(node.mark(p("bb")).map(Mark::glyph), Some('/'));
        assert_eq!(node.label(p("cc")), Some("A"));
        assert_eq!(node.label(p("dd")), Some("hello:world"));
        assert_eq!(node.labels().count(), 2);
    }

    #[test]
    fn test_text_properties_take_first_value() {
        let mut record = Record::new(19, 19);
        apply(&mut record, "C", &["first", "second"]).unwrap();
        apply(&mut record, "HA", &["2"]).unwrap();
        apply(&mut record, "PC", &["Tokyo"]).unwrap();
        let node = record.current_node().unwrap();
        assert_eq!(node.comment(), Some("first"));
        assert_eq!(node.info(InfoField::Handicap), Some("2"));
        assert_eq!(node.info(InfoField::Location), Some("Tokyo"));
    }

    #[test]
    fn test_expand_points_skips_malformed() {
        let points = expand_points(&values(&["aa", "a", "aa:zz!", "bb:bc"]));
        assert_eq!(points, vec![p("aa"), p("bb"), p("bc")]);
    }
}
