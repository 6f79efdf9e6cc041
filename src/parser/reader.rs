//! SlowLogReader - 从 Reader 流式读取并解析慢日志事件
//!
//! 提供了一个迭代器，可以从任何实现了 `Read` trait 的源中逐条读取事件。

use std::io::{BufRead, BufReader, Read};

use tracing::debug;

use crate::error::ParseError;
use crate::event::LogEvent;
use crate::parser::slowlog_parser::SlowLogParser;
use crate::parser_config::ParserConfig;
use crate::tools::trim_line_ending;

/// 从 Reader 中按行读取并解析成 [`LogEvent`] 的迭代器
///
/// 读到 EOF 时会自动调用一次 [`SlowLogParser::flush`]，最后一个块不会丢失。
/// 非 UTF-8 字节按有损方式转换。
///
/// # 示例
///
/// ```
/// use mysql_slowlog_parser::SlowLogReader;
///
/// let log = "# User@Host: root[root] @ localhost []\nSELECT 1;\n";
/// let events: Vec<_> = SlowLogReader::new(log.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].statement(), "SELECT 1;");
/// ```
pub struct SlowLogReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
    parser: SlowLogParser,
    events: usize,
    finished: bool,
}

impl<R: Read> SlowLogReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_parts(BufReader::new(reader), SlowLogParser::new())
    }

    /// 指定读缓冲区大小
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self::with_parts(BufReader::with_capacity(capacity, reader), SlowLogParser::new())
    }

    /// 使用自定义解析配置
    pub fn with_config(reader: R, config: ParserConfig) -> Self {
        Self::with_parts(BufReader::new(reader), SlowLogParser::with_config(config))
    }

    fn with_parts(reader: BufReader<R>, parser: SlowLogParser) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(1024),
            parser,
            events: 0,
            finished: false,
        }
    }

    /// 已产出的事件数量
    pub fn events_read(&self) -> usize {
        self.events
    }

    fn emit(&mut self, event: LogEvent) -> Option<Result<LogEvent, ParseError>> {
        self.events += 1;
        Some(Ok(event))
    }
}

impl<R: Read> Iterator for SlowLogReader<R> {
    type Item = Result<LogEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.finished = true;
                    let event = self.parser.flush();
                    debug!(
                        events = self.events + usize::from(event.is_some()),
                        "slow log stream finished"
                    );
                    return match event {
                        Some(event) => self.emit(event),
                        None => None,
                    };
                }
                Ok(_) => {
                    let event = {
                        let line = String::from_utf8_lossy(trim_line_ending(&self.buffer));
                        self.parser.consume_line(&line)
                    };
                    if let Some(event) = event {
                        return self.emit(event);
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(ParseError::IoError(e.to_string())));
                }
            }
        }
    }
}
