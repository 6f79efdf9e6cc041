//! 文件与 Reader API 集成测试

use mysql_slowlog_parser::{
    AttributeType, ParseError, ParserConfig, SlowLogReader, for_each_event_in_str,
    iter_events_from_file, parse_events_from_file, parse_files_parallel,
};
use std::io::{self, Read, Write};
use tempfile::NamedTempFile;

fn block(user: &str, rows: u32) -> String {
    format!(
        "# Time: 2021-01-01T00:00:00.000000Z\n\
         # User@Host: {user}[{user}] @ localhost []  Id: 1\n\
         # Query_time: 0.010000  Lock_time: 0.000000 Rows_sent: {rows}  Rows_examined: {rows}\n\
         SET timestamp=1609459200;\n\
         SELECT * FROM t LIMIT {rows};\n"
    )
}

fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_events_from_file() {
    let content = format!("{}{}{}", block("a", 1), block("b", 2), block("c", 3));
    let file = write_log(&content);

    let events = parse_events_from_file(file.path()).unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].user(), Some("a"));
    assert_eq!(events[2].get_i64("Rows_sent"), Some(3));
    assert_eq!(events[2].statement(), "SELECT * FROM t LIMIT 3;");
}

#[test]
fn test_iter_events_from_file_counts() {
    let content: String = (0..50).map(|i| block("app", i)).collect();
    let file = write_log(&content);

    let mut reader = iter_events_from_file(file.path()).unwrap();
    let mut count = 0;
    for result in reader.by_ref() {
        let event = result.unwrap();
        assert_eq!(event.get_i64("Rows_examined"), Some(count));
        count += 1;
    }
    assert_eq!(count, 50);
    assert_eq!(reader.events_read(), 50);
    assert!(reader.next().is_none());
}

#[test]
fn test_file_not_found() {
    let err = parse_events_from_file("/definitely/not/here/slow.log").unwrap_err();
    assert!(matches!(err, ParseError::FileNotFound { .. }));
    assert!(err.to_string().contains("/definitely/not/here/slow.log"));

    assert!(iter_events_from_file("/definitely/not/here/slow.log").is_err());
}

#[test]
fn test_crlf_and_missing_trailing_newline() {
    let content = "# User@Host: root[root] @ localhost []\r\n\
                   # Query_time: 0.5  Lock_time: 0.0 Rows_sent: 1  Rows_examined: 1\r\n\
                   use shop;\r\n\
                   SELECT 1;\r\n\
                   \r\n\
                   # User@Host: app[app] @ web01 [10.0.0.5]\r\n\
                   SELECT 2;";

    let events: Vec<_> = SlowLogReader::new(content.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].database(), Some("shop"));
    assert_eq!(events[0].statement(), "SELECT 1;");
    assert_eq!(events[1].ip(), Some("10.0.0.5"));
    assert_eq!(events[1].statement(), "SELECT 2;");
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut content = b"# User@Host: root[root] @ localhost []\nSELECT '".to_vec();
    content.extend_from_slice(&[0xff, 0xfe]);
    content.extend_from_slice(b"';\n");

    let events: Vec<_> = SlowLogReader::new(content.as_slice())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user(), Some("root"));
    assert!(events[0].statement().starts_with("SELECT '"));
    assert!(events[0].statement().contains('\u{FFFD}'));
}

#[test]
fn test_reader_with_config() {
    let content = "# Time: 2021-01-01T00:00:00Z\nSET timestamp=1609459200;\nSELECT 1;\n";
    let config = ParserConfig::default()
        .with_attribute("Time", AttributeType::String)
        .with_timestamp_normalization(false);

    let events: Vec<_> = SlowLogReader::with_config(content.as_bytes(), config)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(events[0].get_str("Time"), Some("2021-01-01T00:00:00Z"));
    assert_eq!(events[0].timestamp(), Some("1609459200"));
}

struct FailingReader {
    sent: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::other("disk on fire"));
        }
        self.sent = true;
        let data = b"# User@Host: root[root] @ localhost []\nSELECT 1;\n";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn test_io_error_ends_iteration() {
    let mut reader = SlowLogReader::new(FailingReader { sent: false });

    match reader.next() {
        Some(Err(ParseError::IoError(msg))) => assert!(msg.contains("disk on fire")),
        other => panic!("expected I/O error, got {:?}", other),
    }
    assert!(reader.next().is_none());
}

#[test]
fn test_parse_files_parallel_keeps_order() {
    let files: Vec<NamedTempFile> = (0..6)
        .map(|i| {
            let content: String = (0..=i).map(|n| block(&format!("u{}", i), n)).collect();
            write_log(&content)
        })
        .collect();
    let mut paths: Vec<_> = files.iter().map(|f| f.path().to_path_buf()).collect();
    paths.insert(3, "/definitely/not/here/slow.log".into());

    let results = parse_files_parallel(&paths);
    assert_eq!(results.len(), 7);
    assert!(matches!(results[3], Err(ParseError::FileNotFound { .. })));

    for (i, result) in results.iter().enumerate().filter(|(i, _)| *i != 3) {
        let file_index = if i > 3 { i - 1 } else { i };
        let events = result.as_ref().unwrap();
        assert_eq!(events.len(), file_index + 1);
        let expected_user = format!("u{}", file_index);
        assert!(events.iter().all(|e| e.user() == Some(expected_user.as_str())));
    }
}

#[test]
fn test_for_each_event_in_str() {
    let content = format!("{}{}", block("a", 1), block("b", 2));
    let mut users = Vec::new();
    let count = for_each_event_in_str(&content, |event| {
        users.push(event.user().unwrap_or_default().to_string());
    });

    assert_eq!(count, 2);
    assert_eq!(users, ["a", "b"]);
}
