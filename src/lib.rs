//! # MySQL Slow Log Parser
//!
//! 一个增量式的 MySQL 慢查询日志解析器：逐行消费日志文本，产出带类型的事件记录。
//!
//! ## 功能特性
//!
//! - **增量解析**: 状态机逐行消费，适合对接文件跟随、网络传输等任意行来源
//! - **带类型的属性**: `Query_time`、`Rows_examined` 等属性按类型表转换为浮点、整数或布尔值
//! - **容错**: 格式不规范的日志只会导致属性缺失，不会中断整个流
//! - **多流并行**: 每个日志流一个解析器，互不共享状态
//!
//! ## 快速开始
//!
//! ### 逐行解析
//!
//! ```rust
//! use mysql_slowlog_parser::SlowLogParser;
//!
//! let log = [
//!     "# User@Host: root[root] @ localhost []",
//!     "# Query_time: 0.000123  Lock_time: 0.000045 Rows_sent: 1  Rows_examined: 10",
//!     "use shop;",
//!     "SET timestamp=1609459200;",
//!     "SELECT * FROM orders;",
//! ];
//!
//! let mut parser = SlowLogParser::new();
//! let mut events = Vec::new();
//! for line in log {
//!     events.extend(parser.consume_line(line));
//! }
//! // 输入结束后必须 flush，否则最后一个事件会丢失
//! events.extend(parser.flush());
//!
//! let event = &events[0];
//! assert_eq!(event.user(), Some("root"));
//! assert_eq!(event.host(), Some("localhost"));
//! assert_eq!(event.database(), Some("shop"));
//! assert_eq!(event.timestamp(), Some("2021-01-01 00:00:00"));
//! assert_eq!(event.get_f64("Query_time"), Some(0.000123));
//! assert_eq!(event.get_i64("Rows_examined"), Some(10));
//! assert_eq!(event.statement(), "SELECT * FROM orders;");
//! ```
//!
//! ### 从文件流式读取
//!
//! ```rust,no_run
//! use mysql_slowlog_parser::iter_events_from_file;
//!
//! for result in iter_events_from_file("slow.log").unwrap() {
//!     if let Ok(event) = result {
//!         println!("{:?}: {}", event.get_f64("Query_time"), event.statement());
//!     }
//! }
//! ```
//!
//! ## 日志格式
//!
//! ```text
//! # Time: 2021-01-01T00:00:00.123456Z
//! # User@Host: user[user] @ host [1.2.3.4]  Id: 123
//! # Query_time: 0.000123  Lock_time: 0.000045 Rows_sent: 1  Rows_examined: 10
//! use some_db;
//! SET timestamp=1609459200;
//! SELECT * FROM t;
//! ```

pub mod error;
pub mod event;
pub mod parser;
pub mod parser_config;
pub mod tools;

pub use error::ParseError;
pub use event::{LogEvent, Value};
pub use parser::{
    ParserState, SlowLogParser, SlowLogReader, for_each_event_in_str, iter_events_from_file,
    parse_entry, parse_entry_with, parse_events_from_file, parse_events_from_str,
    parse_files_parallel,
};
pub use parser_config::{AttributeType, ParserConfig};
