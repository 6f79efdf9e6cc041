use chrono::DateTime;
use memchr::memchr;

use crate::parser::constants::TIMESTAMP_FORMAT;

// 布尔字面量
const TRUE_LITERALS: [&str; 9] = ["1", "t", "T", "TRUE", "true", "True", "Yes", "yes", "YES"];
const FALSE_LITERALS: [&str; 9] = ["0", "f", "F", "FALSE", "false", "False", "No", "no", "NO"];

/// 是否为单词字符（`[A-Za-z0-9_]`）
#[inline(always)]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// 在一行注释中查找所有 `Name: Value` 对。
///
/// 匹配规则
/// 1. `Name` 是紧贴冒号左侧的一段单词字符，不能为空。
/// 2. 冒号后至少跟一个空白字符。
/// 3. `Value` 是空白之后的第一个非空白 token，末尾的非单词字符（如 `;`、`,`）会被去掉。
/// 4. 不含任何单词字符的 token 不构成匹配。
///
/// 返回的迭代器按出现顺序产出 `(name, value)`，不做任何分配。
pub fn attribute_pairs(line: &str) -> AttributePairs<'_> {
    AttributePairs { line, pos: 0 }
}

/// [`attribute_pairs`] 返回的迭代器
pub struct AttributePairs<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for AttributePairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.line.as_bytes();

        while self.pos < bytes.len() {
            let colon = self.pos + memchr(b':', &bytes[self.pos..])?;
            self.pos = colon + 1;

            // 名称：冒号左侧连续的单词字符
            let mut name_start = colon;
            while name_start > 0 && is_word_byte(bytes[name_start - 1]) {
                name_start -= 1;
            }
            if name_start == colon {
                continue;
            }

            // 冒号后至少一个空白
            let mut value_start = colon + 1;
            while value_start < bytes.len() && bytes[value_start].is_ascii_whitespace() {
                value_start += 1;
            }
            if value_start == colon + 1 || value_start == bytes.len() {
                continue;
            }

            let mut value_end = value_start;
            while value_end < bytes.len() && !bytes[value_end].is_ascii_whitespace() {
                value_end += 1;
            }

            // 去掉 token 末尾的标点
            while value_end > value_start && !is_word_byte(bytes[value_end - 1]) {
                value_end -= 1;
            }
            if value_end == value_start {
                self.pos = value_start;
                continue;
            }

            self.pos = value_end;
            // 边界都落在 ASCII 字节上，切片一定是合法的 UTF-8 边界
            return Some((
                &self.line[name_start..colon],
                &self.line[value_start..value_end],
            ));
        }

        None
    }
}

/// 解析布尔字面量，无法识别时返回 `None`
pub fn parse_bool_literal(s: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&s) {
        Some(true)
    } else if FALSE_LITERALS.contains(&s) {
        Some(false)
    } else {
        None
    }
}

/// 判断是否为十进制数字字面量（可带符号、小数点和指数），
/// 用于拒绝 `inf`、`NaN` 这类 `f64::from_str` 也能接受的写法。
pub fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().any(u8::is_ascii_digit)
        && bytes
            .iter()
            .all(|&b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// 解析十进制浮点数，溢出为无穷大的值视为无效
pub fn parse_decimal_f64(s: &str) -> Option<f64> {
    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 把以秒为单位的 Unix 时间戳格式化为 `YYYY-MM-DD HH:MM:SS`（UTC）。
///
/// 不是十进制整数或超出可表示范围时返回 `None`。
pub fn format_epoch_seconds(raw: &str) -> Option<String> {
    let secs = raw.parse::<i64>().ok()?;
    let dt = DateTime::from_timestamp(secs, 0)?;
    Some(dt.format(TIMESTAMP_FORMAT).to_string())
}

/// 去掉行尾的 `\n` / `\r`
#[inline]
pub fn trim_line_ending(bytes: &[u8]) -> &[u8] {
    let mut len = bytes.len();
    while len > 0 && matches!(bytes[len - 1], b'\n' | b'\r') {
        len -= 1;
    }
    &bytes[..len]
}
