/// Record field a document key feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Title,
    Album,
    Authors,
    Narrators,
    Tags,
    /// Series name and index, packed as `"<series>, Book <index>"`
    Grouping,
    Comment,
    PubDate,
}

impl RecordField {
    pub fn name(self) -> &'static str {
        match self {
            RecordField::Title => "title",
            RecordField::Album => "album",
            RecordField::Authors => "authors",
            RecordField::Narrators => "narrators",
            RecordField::Tags => "tags",
            RecordField::Grouping => "series + series_index",
            RecordField::Comment => "comment",
            RecordField::PubDate => "pub_date",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            RecordField::Authors | RecordField::Narrators | RecordField::Tags
        )
    }
}

/// Document key to record field, in application order.
///
/// `artist` and `album_artist` both feed `authors`; reading applies rows
/// top to bottom so `album_artist` wins when both are present, and writing
/// emits both.
pub const ALIASES: &[(&str, RecordField)] = &[
    ("title", RecordField::Title),
    ("album", RecordField::Album),
    ("artist", RecordField::Authors),
    ("album_artist", RecordField::Authors),
    ("composer", RecordField::Narrators),
    ("genre", RecordField::Tags),
    ("grouping", RecordField::Grouping),
    ("comment", RecordField::Comment),
    ("date", RecordField::PubDate),
];

/// Record field for a document key, ignoring case
pub fn lookup_alias(key: &str) -> Option<RecordField> {
    ALIASES
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, field)| *field)
}
