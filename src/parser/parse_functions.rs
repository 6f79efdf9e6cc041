//! 核心解析函数
//!
//! 把一个已经切分好的块（注释头、上下文行、SQL 语句行）解析为 [`LogEvent`]。
//! 解析过程不会失败：无法识别的内容只会导致对应属性缺失。

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::event::{LogEvent, Value, keys};
use crate::parser::constants::*;
use crate::parser::user_host::parse_user_host_line;
use crate::parser_config::{AttributeType, ParserConfig};
use crate::tools::{attribute_pairs, format_epoch_seconds, parse_bool_literal, parse_decimal_f64};

static DEFAULT_CONFIG: Lazy<ParserConfig> = Lazy::new(ParserConfig::mysql_default);

/// 使用默认属性类型表解析一个日志块
///
/// # 参数
///
/// * `lines` - 块内的所有行（不含换行符）
///
/// # 示例
///
/// ```
/// use mysql_slowlog_parser::parse_entry;
///
/// let lines = [
///     "# User@Host: root[root] @ localhost []",
///     "# Query_time: 0.000123  Lock_time: 0.000045 Rows_sent: 1  Rows_examined: 10",
///     "use shop;",
///     "SET timestamp=1609459200;",
///     "SELECT * FROM orders;",
/// ];
/// let event = parse_entry(&lines);
///
/// assert_eq!(event.user(), Some("root"));
/// assert_eq!(event.get_f64("Query_time"), Some(0.000123));
/// assert_eq!(event.get_i64("Rows_examined"), Some(10));
/// assert_eq!(event.database(), Some("shop"));
/// assert_eq!(event.timestamp(), Some("2021-01-01 00:00:00"));
/// assert_eq!(event.statement(), "SELECT * FROM orders;");
/// ```
pub fn parse_entry<S: AsRef<str>>(lines: &[S]) -> LogEvent {
    parse_entry_with(lines, &DEFAULT_CONFIG)
}

/// 使用指定配置解析一个日志块
pub fn parse_entry_with<S: AsRef<str>>(lines: &[S], config: &ParserConfig) -> LogEvent {
    let mut event = LogEvent::new();

    let rest = parse_header_lines(lines, config, &mut event);
    let rest = parse_context_lines(rest, config, &mut event);
    event.insert(keys::STATEMENT, build_statement(rest));

    event
}

/// 处理块开头的空行和注释行，返回剩余的行
pub(crate) fn parse_header_lines<'l, S: AsRef<str>>(
    lines: &'l [S],
    config: &ParserConfig,
    event: &mut LogEvent,
) -> &'l [S] {
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        if line.as_bytes()[0] != COMMENT_PREFIX {
            return &lines[i..];
        }

        if line.starts_with(USER_HOST_PREFIX) {
            parse_user_host_line(line).apply_to(event);
            continue;
        }

        for (name, raw) in attribute_pairs(line) {
            let Some(ty) = config.attribute_type(name) else {
                continue;
            };
            match coerce_value(ty, raw) {
                Some(value) => {
                    event.insert(name, value);
                }
                None => trace!(
                    attribute = name,
                    value = raw,
                    "dropping attribute value that does not parse as its declared type"
                ),
            }
        }
    }

    &[]
}

/// 按声明类型转换属性值，转换失败返回 `None`
pub(crate) fn coerce_value(ty: AttributeType, raw: &str) -> Option<Value> {
    match ty {
        AttributeType::String => Some(Value::String(raw.to_string())),
        AttributeType::Bool => parse_bool_literal(raw).map(Value::Bool),
        AttributeType::Float => parse_decimal_f64(raw).map(Value::Float),
        AttributeType::Int => raw.parse::<i64>().ok().map(Value::Int),
    }
}

/// 处理 `use <db>` 与 `SET ...` 上下文行，返回剩余的行
pub(crate) fn parse_context_lines<'l, S: AsRef<str>>(
    lines: &'l [S],
    config: &ParserConfig,
    event: &mut LogEvent,
) -> &'l [S] {
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if let Some(rest) = line.strip_prefix(USE_PREFIX) {
            event.insert(keys::DATABASE, extract_database(rest));
            continue;
        }

        if let Some(rest) = line.strip_prefix(SET_TIMESTAMP_PREFIX) {
            let raw = trim_statement_end(rest);
            let formatted = if config.normalize_timestamp {
                format_epoch_seconds(raw)
            } else {
                None
            };
            event.insert(keys::TIMESTAMP, formatted.unwrap_or_else(|| raw.to_string()));
            continue;
        }

        // 其他会话变量行直接跳过
        if line.starts_with(SET_PREFIX) {
            continue;
        }

        return &lines[i..];
    }

    &[]
}

/// `use` 之后的第一个 token，去掉末尾分号和反引号
pub(crate) fn extract_database(rest: &str) -> &str {
    let token = rest.split_ascii_whitespace().next().unwrap_or("");
    trim_statement_end(token).trim_matches('`')
}

fn trim_statement_end(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == ';' || c.is_ascii_whitespace())
}

/// 拼接语句行，遇到日志轮转标记时截止
pub(crate) fn build_statement<S: AsRef<str>>(lines: &[S]) -> String {
    let end = lines
        .iter()
        .position(|line| line.as_ref().trim_end().ends_with(ROTATION_MARKER_SUFFIX))
        .unwrap_or(lines.len());

    if end < lines.len() {
        debug!(
            dropped_lines = lines.len() - end,
            "log rotation marker found, truncating statement"
        );
    }

    let kept = &lines[..end];
    let capacity = kept.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut statement = String::with_capacity(capacity);
    for (i, line) in kept.iter().enumerate() {
        if i > 0 {
            statement.push('\n');
        }
        statement.push_str(line.as_ref());
    }

    let trimmed = statement.trim();
    if trimmed.len() == statement.len() {
        statement
    } else {
        trimmed.to_string()
    }
}
