use ffmetactl::ffmeta::{parse, Writer, WriterOptions};
use ffmetactl::metadata::{
    apply_to_book, compose_grouping, document_to_record, parse_grouping, record_from_book,
    record_to_document, render_record, BookEntry, FFMetaRecord,
};
use ffmetactl::FFMetaError;

const AUDIOBOOK: &str = ";FFMETADATA1
title=Leviathan Wakes
album=Leviathan Wakes
artist=James S. A. Corey
album_artist=James S. A. Corey
composer=Jefferson Mays
genre=Science Fiction
grouping=The Expanse, Book 1
comment=Humanity has colonized the solar system\\; it is not at peace.
date=2011-06-15
encoder=Lavf60.3.100
[CHAPTER]
TIMEBASE=1/1000
START=0
END=1830000
title=Prologue: Julie
[CHAPTER]
TIMEBASE=1/1000
START=1830000
END=3120000
title=Chapter One: Holden
language=eng
[CHAPTER]
TIMEBASE=1/1000
START=3120000
title=Chapter Two: Miller
";

#[test]
fn test_parse_map_render_reproduces_document() {
    let doc = parse(AUDIOBOOK.as_bytes()).unwrap();
    let record = document_to_record(&doc);
    let rendered = render_record(&record, WriterOptions::default());

    assert_eq!(String::from_utf8(rendered.clone()).unwrap(), AUDIOBOOK);
    assert_eq!(parse(&rendered).unwrap(), doc);
}

#[test]
fn test_logical_content_survives_pretty_format() {
    let doc = parse(AUDIOBOOK.as_bytes()).unwrap();
    let record = document_to_record(&doc);
    let pretty = render_record(
        &record,
        WriterOptions {
            pretty_format: true,
        },
    );

    assert_ne!(pretty, AUDIOBOOK.as_bytes());
    assert_eq!(document_to_record(&parse(&pretty).unwrap()), record);
}

#[test]
fn test_record_document_record_is_stable() {
    let record = document_to_record(&parse(AUDIOBOOK.as_bytes()).unwrap());
    let doc = record_to_document(&record);
    let rendered = Writer::default().render(&doc);
    assert_eq!(document_to_record(&parse(&rendered).unwrap()), record);
}

#[test]
fn test_bad_header_fails_for_any_content() {
    for input in [
        "",
        ";FFMETADATA",
        ";FFMETADATA2\ntitle=x\n",
        "title=x\n",
        " ;FFMETADATA1\n",
        "[CHAPTER]\nSTART=0\n",
    ] {
        let err = parse(input.as_bytes()).unwrap_err();
        assert!(matches!(err, FFMetaError::InvalidFormat(_)), "{:?}", input);
    }
}

#[test]
fn test_two_chapter_sections_give_two_chapters() {
    let input = ";FFMETADATA1\ntitle=T\n[CHAPTER]\nSTART=0\ntitle=A\n[CHAPTER]\nSTART=5\ntitle=B\n";
    let record = document_to_record(&parse(input.as_bytes()).unwrap());
    let titles: Vec<_> = record.chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn test_non_numeric_start_is_zero() {
    let input = ";FFMETADATA1\ntitle=T\n[CHAPTER]\nSTART=abc\n";
    let record = document_to_record(&parse(input.as_bytes()).unwrap());
    assert_eq!(record.chapters[0].start, 0);
}

#[test]
fn test_empty_title_renders_no_output() {
    let input = ";FFMETADATA1\nartist=Somebody\n[CHAPTER]\nSTART=0\n";
    let record = document_to_record(&parse(input.as_bytes()).unwrap());
    assert_eq!(record.chapters.len(), 1);
    assert!(render_record(&record, WriterOptions::default()).is_empty());
}

#[test]
fn test_grouping_properties() {
    assert_eq!(
        parse_grouping("Series Title, Book 2"),
        ("Series Title".to_string(), 2.0)
    );
    assert_eq!(
        parse_grouping("Series Title, book 2"),
        ("Series Title".to_string(), 2.0)
    );
    assert_eq!(
        parse_grouping("Series Title"),
        ("Series Title".to_string(), 0.0)
    );

    let (series, index) = parse_grouping("Series Title");
    assert_ne!(compose_grouping(&series, index), "Series Title");
}

#[test]
fn test_book_to_ffmetadata_and_back() {
    let book = BookEntry {
        title: "Project Hail Mary".to_string(),
        authors: vec!["Andy Weir".to_string()],
        narrators: vec!["Ray Porter".to_string()],
        tags: vec!["Science Fiction".to_string()],
        series: String::new(),
        series_index: 0.0,
        comments: "A lone astronaut.".to_string(),
        pubdate: chrono::NaiveDate::from_ymd_opt(2021, 5, 4),
    };

    let rendered = render_record(&record_from_book(&book), WriterOptions::default());
    let text = String::from_utf8(rendered.clone()).unwrap();
    assert!(text.contains("album=Project Hail Mary\n"));
    assert!(!text.contains("grouping="));

    let mut restored = BookEntry::default();
    apply_to_book(&document_to_record(&parse(&rendered).unwrap()), &mut restored);
    assert_eq!(restored, book);
}

#[test]
fn test_multiple_authors_fold_into_one_value() {
    let record = FFMetaRecord {
        title: "Good Omens".to_string(),
        authors: vec!["Terry Pratchett".to_string(), "Neil Gaiman".to_string()],
        ..Default::default()
    };
    let rendered = render_record(&record, WriterOptions::default());
    let back = document_to_record(&parse(&rendered).unwrap());
    assert_eq!(back.authors, vec!["Terry Pratchett, Neil Gaiman"]);
}

#[test]
fn test_padded_values_and_bracketed_keys_survive_record_round_trip() {
    let mut record = FFMetaRecord {
        title: "  Leading Spaces".to_string(),
        comment: "ends with a newline\n".to_string(),
        ..Default::default()
    };
    record.other.insert("[odd]", "value ");

    for pretty_format in [false, true] {
        let rendered = render_record(&record, WriterOptions { pretty_format });
        assert_eq!(document_to_record(&parse(&rendered).unwrap()), record);
    }
}
