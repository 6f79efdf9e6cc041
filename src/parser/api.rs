//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于快速解析慢查询日志。

use std::fs::File;
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::error::ParseError;
use crate::event::LogEvent;
use crate::parser::reader::SlowLogReader;
use crate::parser::slowlog_parser::SlowLogParser;

/// 文件读取缓冲区大小，减少系统调用次数
const FILE_BUFFER_CAPACITY: usize = 256 * 1024;

/// 解析内存中的日志文本，返回所有事件
///
/// # 示例
///
/// ```
/// use mysql_slowlog_parser::parse_events_from_str;
///
/// let log = "# Query_time: 1.5  Lock_time: 0.0 Rows_sent: 0  Rows_examined: 0\nSELECT SLEEP(1.5);\n";
/// let events = parse_events_from_str(log);
///
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].get_f64("Query_time"), Some(1.5));
/// ```
pub fn parse_events_from_str(text: &str) -> Vec<LogEvent> {
    let mut events = Vec::new();
    for_each_event_in_str(text, |event| events.push(event));
    events
}

/// 流式处理内存中的日志文本，对每个事件调用回调，返回事件数量
pub fn for_each_event_in_str<F>(text: &str, mut f: F) -> usize
where
    F: FnMut(LogEvent),
{
    let mut parser = SlowLogParser::new();
    let mut count = 0;

    for line in text.lines() {
        if let Some(event) = parser.consume_line(line) {
            count += 1;
            f(event);
        }
    }
    if let Some(event) = parser.flush() {
        count += 1;
        f(event);
    }

    count
}

/// 打开日志文件并返回事件迭代器（流式处理）
///
/// # 返回
///
/// * `Ok(SlowLogReader)` - 迭代项是 `Result<LogEvent, ParseError>`
/// * `Err(ParseError)` - 文件打开错误
///
/// # 示例
///
/// ```no_run
/// use mysql_slowlog_parser::iter_events_from_file;
///
/// for result in iter_events_from_file("slow.log")? {
///     let event = result?;
///     println!("{:?} {}", event.get_f64("Query_time"), event.statement());
/// }
/// # Ok::<(), mysql_slowlog_parser::ParseError>(())
/// ```
pub fn iter_events_from_file<P>(path: P) -> Result<SlowLogReader<File>, ParseError>
where
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| ParseError::FileNotFound {
        path: format!("{}: {}", path_ref.display(), e),
    })?;
    debug!(path = %path_ref.display(), "opened slow log");
    Ok(SlowLogReader::with_capacity(FILE_BUFFER_CAPACITY, file))
}

/// 读取并解析整个日志文件
///
/// 读取中途出现 I/O 错误时返回该错误，已解析的事件被丢弃。
pub fn parse_events_from_file<P>(path: P) -> Result<Vec<LogEvent>, ParseError>
where
    P: AsRef<Path>,
{
    iter_events_from_file(path)?.collect()
}

/// 并行解析多个日志文件
///
/// 每个文件使用独立的解析器，在 rayon 线程池中处理。
/// 返回结果与输入路径一一对应，顺序一致。
///
/// # 示例
///
/// ```no_run
/// use mysql_slowlog_parser::parse_files_parallel;
///
/// let results = parse_files_parallel(&["db1-slow.log", "db2-slow.log"]);
/// for result in results {
///     match result {
///         Ok(events) => println!("{} 条事件", events.len()),
///         Err(e) => eprintln!("错误: {}", e),
///     }
/// }
/// ```
pub fn parse_files_parallel<P>(paths: &[P]) -> Vec<Result<Vec<LogEvent>, ParseError>>
where
    P: AsRef<Path> + Sync,
{
    paths.par_iter().map(parse_events_from_file).collect()
}
