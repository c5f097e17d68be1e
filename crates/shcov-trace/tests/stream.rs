// Once clippy takes `clippy.toml` into account (for `tests` targets),
// we can remove these.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::io::Read;

use shcov_trace::{Delimiter, FIELD_SEPARATOR, RecordStream};

fn record(delimiter: &Delimiter, fields: &[&str]) -> String {
    let payload = fields.join(&FIELD_SEPARATOR.to_string());
    format!("{delimiter}{payload}{delimiter}")
}

fn collect(bytes: &[u8], delimiter: &Delimiter) -> Vec<Vec<String>> {
    RecordStream::new(bytes, delimiter)
        .collect::<Result<Vec<_>, _>>()
        .expect("record stream")
}

#[test]
fn yields_each_delimited_field_group() {
    let delimiter = Delimiter::generate();

    let log = format!(
        "+{}echo one\n+{}echo two\n",
        record(&delimiter, &["hit", "/tmp/a.sh", "1", "/tmp"]),
        record(&delimiter, &["hit", "/tmp/a.sh", "2", "/tmp"]),
    );

    let groups = collect(log.as_bytes(), &delimiter);

    assert_eq!(
        groups,
        vec![
            vec!["hit", "/tmp/a.sh", "1", "/tmp"],
            vec!["hit", "/tmp/a.sh", "2", "/tmp"],
        ]
    );
}

#[test]
fn skips_inter_record_text_and_depth_prefixes() {
    let delimiter = Delimiter::generate();

    // deeply nested lines repeat the sacrificial depth character, and the
    // echoed command lands between the records
    let log = format!(
        "++++{}echo 'some | garbage' $((1 + 2))\n+{}wait\n",
        record(&delimiter, &["hit", "a.sh", "3", "/tmp"]),
        record(&delimiter, &["hit", "b.sh", "7", "/tmp"]),
    );

    let groups = collect(log.as_bytes(), &delimiter);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0][1], "a.sh");
    assert_eq!(groups[1][1], "b.sh");
}

#[test]
fn truncation_never_yields_a_partial_group() {
    let delimiter = Delimiter::generate();

    let records = [
        record(&delimiter, &["hit", "/tmp/a.sh", "1", "/tmp"]),
        record(&delimiter, &["hit", "/tmp/a.sh", "2", "/tmp"]),
        record(&delimiter, &["push-dir", "/tmp/a.sh", "3", "/tmp/sub"]),
    ];

    let mut log = String::new();
    let mut record_ends = Vec::new();
    for r in &records {
        log.push_str("+\n+");
        log.push_str(r);
        record_ends.push(log.len());
        log.push_str("echo hello\n");
    }

    for cut in 0..=log.len() {
        let groups = collect(&log.as_bytes()[..cut], &delimiter);
        let expected = record_ends.iter().filter(|&&end| end <= cut).count();

        assert_eq!(groups.len(), expected, "cut at byte {cut}");
    }
}

#[test]
fn drops_bytes_after_the_last_delimiter() {
    let delimiter = Delimiter::generate();

    let log = format!(
        "+{}{}hit{FIELD_SEPARATOR}/tmp/torn.sh{FIELD_SEPARATOR}9",
        record(&delimiter, &["hit", "/tmp/a.sh", "1", "/tmp"]),
        delimiter,
    );

    let groups = collect(log.as_bytes(), &delimiter);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0][1], "/tmp/a.sh");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("log vanished"))
    }
}

#[test]
fn read_errors_are_surfaced_not_swallowed() {
    let delimiter = Delimiter::generate();

    let mut stream = RecordStream::new(FailingReader, &delimiter);

    assert!(matches!(stream.next(), Some(Err(_))));
}
