//! Parser 模块 - 解析 MySQL 慢查询日志
//!
//! 此模块提供了完整的日志解析功能,包括:
//! - 逐行消费的状态机
//! - 日志块（注释头 + 语句）的解析
//! - 流式读取和便捷 API 函数

mod api;
pub(crate) mod constants;
pub(crate) mod parse_functions;
pub mod reader;
pub mod slowlog_parser;
mod user_host;

pub use api::{
    for_each_event_in_str, iter_events_from_file, parse_events_from_file, parse_events_from_str,
    parse_files_parallel,
};
pub use parse_functions::{parse_entry, parse_entry_with};
pub use reader::SlowLogReader;
pub use slowlog_parser::{ParserState, SlowLogParser};
