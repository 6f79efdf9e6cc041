//! 慢查询日志事件
//!
//! 一个 [`LogEvent`] 对应日志中的一个块（注释头 + 上下文行 + SQL 语句），
//! 属性集合没有固定的 schema，只有在源日志中实际出现的属性才会存在。

use std::collections::HashMap;
use std::fmt;

/// 常用属性名
pub mod keys {
    /// 用户名，来自 `# User@Host` 行
    pub const USER: &str = "User";
    /// 主机名，缺失时回退为 IP
    pub const HOST: &str = "Host";
    /// 客户端 IP（可选）
    pub const IP: &str = "IP";
    /// 会话时间戳，来自 `SET timestamp=...`
    pub const TIMESTAMP: &str = "Timestamp";
    /// 当前数据库，来自 `use <db>`
    pub const DATABASE: &str = "Database";
    /// SQL 语句体，总是存在
    pub const STATEMENT: &str = "Statement";
}

/// 属性值
///
/// 慢日志中的属性只有四种标量类型。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// 整数值也可以按浮点读取
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// 慢查询日志事件
///
/// 属性名到属性值的映射。除 `Statement` 外，任何属性都可能缺失，
/// 调用方应当把事件视为尽力而为的结果。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LogEvent {
    attributes: HashMap<String, Value>,
}

impl LogEvent {
    /// 创建空事件
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入属性，同名属性会被覆盖，返回旧值
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// SQL 语句体，解析器产出的事件中总是存在（可能为空字符串）
    pub fn statement(&self) -> &str {
        self.get_str(keys::STATEMENT).unwrap_or("")
    }

    pub fn user(&self) -> Option<&str> {
        self.get_str(keys::USER)
    }

    pub fn host(&self) -> Option<&str> {
        self.get_str(keys::HOST)
    }

    pub fn ip(&self) -> Option<&str> {
        self.get_str(keys::IP)
    }

    pub fn database(&self) -> Option<&str> {
        self.get_str(keys::DATABASE)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.get_str(keys::TIMESTAMP)
    }

    /// 属性数量
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// 遍历所有属性（顺序不固定）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 取出底层映射
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.attributes
    }
}

impl From<HashMap<String, Value>> for LogEvent {
    fn from(attributes: HashMap<String, Value>) -> Self {
        Self { attributes }
    }
}
