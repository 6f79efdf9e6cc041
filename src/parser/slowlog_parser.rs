//! SlowLogParser - 逐行消费慢日志的状态机
//!
//! 慢日志没有显式的记录结束标记，只能在看到下一个块的开头（空行或新的 `#` 注释行）
//! 时才确定上一个块已经结束，因此事件总是在下一个块的第一行被消费时产出。

use crate::event::LogEvent;
use crate::parser::constants::COMMENT_PREFIX;
use crate::parser::parse_functions::parse_entry_with;
use crate::parser_config::ParserConfig;

/// 解析器当前所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// 接受注释头或空行
    #[default]
    Header,
    /// 接受 SQL 语句行
    QueryBody,
}

/// 慢日志解析器
///
/// 每个日志流对应一个实例，实例之间没有共享状态。
///
/// # 示例
///
/// ```
/// use mysql_slowlog_parser::SlowLogParser;
///
/// let mut parser = SlowLogParser::new();
/// let mut events = Vec::new();
///
/// for line in [
///     "# User@Host: root[root] @ localhost []",
///     "# Query_time: 0.5  Lock_time: 0.0 Rows_sent: 1  Rows_examined: 10",
///     "SELECT 1;",
///     "",
///     "# User@Host: app[app] @ web01 [10.0.0.5]",
///     "SELECT 2;",
/// ] {
///     events.extend(parser.consume_line(line));
/// }
/// events.extend(parser.flush());
///
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].statement(), "SELECT 1;");
/// assert_eq!(events[1].ip(), Some("10.0.0.5"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlowLogParser {
    config: ParserConfig,
    state: ParserState,
    /// 行缓冲，块结束后只重置 `len`，保留已分配的字符串以便复用
    lines: Vec<String>,
    len: usize,
}

impl SlowLogParser {
    /// 使用默认配置创建解析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建解析器
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// 当前块中已缓冲的行
    pub fn pending_lines(&self) -> &[String] {
        &self.lines[..self.len]
    }

    /// 消费一行日志
    ///
    /// 当这一行标志着上一个块结束时返回该块解析出的事件，否则返回 `None`。
    /// 任何输入都不会导致失败。
    pub fn consume_line(&mut self, line: &str) -> Option<LogEvent> {
        if line.is_empty() {
            return match self.state {
                ParserState::QueryBody => Some(self.finish_block(line)),
                ParserState::Header => None,
            };
        }

        if line.as_bytes()[0] == COMMENT_PREFIX {
            return match self.state {
                ParserState::QueryBody => Some(self.finish_block(line)),
                ParserState::Header => {
                    self.push_line(line);
                    None
                }
            };
        }

        // 第一个非注释行意味着头部结束，进入语句体
        self.push_line(line);
        self.state = ParserState::QueryBody;
        None
    }

    /// 依次消费多行，返回期间产出的所有事件
    pub fn consume_lines<I, S>(&mut self, lines: I) -> Vec<LogEvent>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.consume_line(line.as_ref()))
            .collect()
    }

    /// 强制结束当前块
    ///
    /// 输入结束后必须调用一次，否则最后一个事件会丢失。
    /// 没有待结束的语句体时返回 `None`。
    pub fn flush(&mut self) -> Option<LogEvent> {
        if self.state != ParserState::QueryBody {
            return None;
        }
        let event = parse_entry_with(self.pending_lines(), &self.config);
        self.len = 0;
        self.state = ParserState::Header;
        Some(event)
    }

    /// 解析当前块，并以 `next` 作为下一个块的第一行
    fn finish_block(&mut self, next: &str) -> LogEvent {
        let event = parse_entry_with(self.pending_lines(), &self.config);
        self.len = 0;
        self.push_line(next);
        self.state = ParserState::Header;
        event
    }

    fn push_line(&mut self, line: &str) {
        match self.lines.get_mut(self.len) {
            Some(slot) => {
                slot.clear();
                slot.push_str(line);
            }
            None => self.lines.push(line.to_string()),
        }
        self.len += 1;
    }
}
