// Once clippy takes `clippy.toml` into account (for `tests` targets),
// we can remove these.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use shcov_trace::{HitEvent, HitParser, MalformedKind, ParsedRecord};

fn fields(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| (*f).to_owned()).collect()
}

fn parser() -> HitParser {
    HitParser::new(PathBuf::from("/work"))
}

#[test]
fn well_typed_groups_are_never_malformed() {
    let mut parser = parser();

    for group in [
        fields(&["hit", "/abs/script.sh", "1", "/work"]),
        fields(&["hit", "relative.sh", "42", "/work"]),
        fields(&["hit", "script.sh", "0", ""]),
        fields(&["push-dir", "script.sh", "3", "/work/sub"]),
        fields(&["pop-dir", "script.sh", "4", "/work"]),
    ] {
        let parsed = parser.parse(&group);
        assert!(
            !matches!(parsed, ParsedRecord::Malformed(_)),
            "{group:?} parsed as {parsed:?}"
        );
    }
}

#[test]
fn absolute_hit_paths_are_kept_verbatim() {
    let parsed = parser().parse(&fields(&["hit", "/abs/script.sh", "12", "/work"]));

    assert_eq!(
        parsed,
        ParsedRecord::Hit(HitEvent {
            path: PathBuf::from("/abs/script.sh"),
            line: 12,
        })
    );
}

#[test]
fn relative_hit_paths_resolve_against_the_directory_context() {
    let mut parser = parser();

    let parsed = parser.parse(&fields(&["hit", "script.sh", "1", "/work"]));
    assert_eq!(
        parsed,
        ParsedRecord::Hit(HitEvent {
            path: PathBuf::from("/work/script.sh"),
            line: 1,
        })
    );

    parser.parse(&fields(&["push-dir", "script.sh", "2", "/work/sub"]));

    let parsed = parser.parse(&fields(&["hit", "nested.sh", "1", "/work/sub"]));
    assert_eq!(
        parsed,
        ParsedRecord::Hit(HitEvent {
            path: PathBuf::from("/work/sub/nested.sh"),
            line: 1,
        })
    );
}

#[test]
fn wrong_field_count_is_malformed() {
    let mut parser = parser();

    for group in [
        fields(&[]),
        fields(&["hit"]),
        fields(&["hit", "a.sh", "1"]),
        fields(&["hit", "a.sh", "1", "/work", "extra"]),
    ] {
        assert_eq!(
            parser.parse(&group),
            ParsedRecord::Malformed(MalformedKind::FieldCount),
            "{group:?}"
        );
    }
}

#[test]
fn unknown_marker_is_malformed() {
    assert_eq!(
        parser().parse(&fields(&["echo", "a.sh", "1", "/work"])),
        ParsedRecord::Malformed(MalformedKind::UnknownMarker)
    );
}

#[test]
fn non_numeric_line_is_malformed() {
    let mut parser = parser();

    for line in ["", "-1", "12a", "4.2"] {
        assert_eq!(
            parser.parse(&fields(&["hit", "a.sh", line, "/work"])),
            ParsedRecord::Malformed(MalformedKind::LineNumber),
            "line {line:?}"
        );
    }
}

#[test]
fn sourceless_hits_are_ignored_not_malformed() {
    let mut parser = parser();

    // `bash -c` and stdin-fed shells expand `${BASH_SOURCE}` to nothing
    assert_eq!(
        parser.parse(&fields(&["hit", "", "1", "/work"])),
        ParsedRecord::Sourceless
    );

    // the directory context is untouched and later records still parse
    assert_eq!(parser.current_dir(), Path::new("/work"));
    assert!(matches!(
        parser.parse(&fields(&["hit", "script.sh", "2", "/work"])),
        ParsedRecord::Hit(_)
    ));
}

#[test]
fn balanced_push_pop_restores_the_previous_top() {
    let mut parser = parser();

    parser.parse(&fields(&["push-dir", "a.sh", "1", "/work/one"]));
    assert_eq!(parser.current_dir(), Path::new("/work/one"));

    parser.parse(&fields(&["push-dir", "a.sh", "2", "/work/two"]));
    assert_eq!(parser.current_dir(), Path::new("/work/two"));

    parser.parse(&fields(&["pop-dir", "a.sh", "3", "/work/one"]));
    assert_eq!(parser.current_dir(), Path::new("/work/one"));

    parser.parse(&fields(&["pop-dir", "a.sh", "4", "/work"]));
    assert_eq!(parser.current_dir(), Path::new("/work"));
}

#[test]
fn pop_underflow_is_tolerated_and_recoverable() {
    let mut parser = parser();

    assert_eq!(
        parser.parse(&fields(&["pop-dir", "a.sh", "1", "/work"])),
        ParsedRecord::Malformed(MalformedKind::StackUnderflow)
    );

    // the seed directory survives the underflow
    assert_eq!(parser.current_dir(), Path::new("/work"));

    // and the parser keeps working afterwards
    assert!(matches!(
        parser.parse(&fields(&["hit", "script.sh", "5", "/work"])),
        ParsedRecord::Hit(_)
    ));
}
