//! Board markup and game-information fields.

/// A visual marker attached to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    TerritoryWhite,
    TerritoryBlack,
    Circle,
    Triangle,
    Cross,
    Square,
}

impl Mark {
    /// Single-character glyph a renderer keys its drawing on.
    pub fn glyph(self) -> char {
        match self {
            Mark::TerritoryWhite => ',',
            Mark::TerritoryBlack => '.',
            Mark::Circle => '0',
            Mark::Triangle => '/',
            Mark::Cross => '*',
            Mark::Square => '#',
        }
    }
}

/// Game-information fields stored verbatim from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InfoField {
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
    Time,
    Location,
    Black,
    White,
    BlackRank,
    WhiteRank,
    BlackTeam,
    WhiteTeam,
    Handicap,
}

impl InfoField {
    /// Field name as exposed to applications.
    pub fn name(self) -> &'static str {
        match self {
            InfoField::Annotator => "annotator",
            InfoField::Copyright => "copyright",
            InfoField::Date => "date",
            InfoField::Event => "event",
            InfoField::GameName => "gameName",
            InfoField::Overtime => "overtime",
            InfoField::Round => "round",
            InfoField::Result => "result",
            InfoField::Rules => "rules",
            InfoField::Source => "source",
            InfoField::Time => "time",
            InfoField::Location => "location",
            InfoField::Black => "black",
            InfoField::White => "white",
            InfoField::BlackRank => "blackRank",
            InfoField::WhiteRank => "whiteRank",
            InfoField::BlackTeam => "blackTeam",
            InfoField::WhiteTeam => "whiteTeam",
            InfoField::Handicap => "handicap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_distinct() {
        let marks = [
            Mark::TerritoryWhite,
            Mark::TerritoryBlack,
            Mark::Circle,
            Mark::Triangle,
            Mark::Cross,
            Mark::Square,
        ];
        let mut glyphs: Vec<char> = marks.iter().map(|m| m.glyph()).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), marks.len());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(InfoField::GameName.name(), "gameName");
        assert_eq!(InfoField::Location.name(), "location");
        assert_eq!(InfoField::Handicap.name(), "handicap");
    }
}
