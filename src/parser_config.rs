//! Parser 配置模块
//!
//! 提供属性类型表和解析器配置。慢日志中出现新的统计字段时只需更新配置，
//! 而不需要修改核心解析逻辑。

use std::collections::HashMap;

use crate::parser::constants::KNOWN_ATTRIBUTES;

/// 属性值类型
///
/// 注释头中 `Name: Value` 形式的属性按照此类型进行转换。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// 原样保留的字符串
    String,
    /// 布尔值（`true`/`false`、`Yes`/`No`、`1`/`0` 等）
    Bool,
    /// 64 位浮点数
    Float,
    /// 64 位有符号整数
    Int,
}

/// Parser 配置
///
/// 定义解析器识别的属性以及时间戳的处理方式
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// 属性名到类型的映射，不在表中的属性会被丢弃
    pub attribute_types: HashMap<String, AttributeType>,

    /// 是否把 `SET timestamp=<epoch>` 转换为 `YYYY-MM-DD HH:MM:SS`（UTC）
    pub normalize_timestamp: bool,
}

impl ParserConfig {
    /// MySQL / Percona Server 慢日志的默认配置
    pub fn mysql_default() -> Self {
        Self {
            attribute_types: KNOWN_ATTRIBUTES
                .iter()
                .map(|&(name, ty)| (name.to_string(), ty))
                .collect(),
            normalize_timestamp: true,
        }
    }

    /// 查询属性的声明类型
    pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
        self.attribute_types.get(name).copied()
    }

    /// 声明（或覆盖）一个属性的类型
    pub fn with_attribute(mut self, name: impl Into<String>, ty: AttributeType) -> Self {
        self.attribute_types.insert(name.into(), ty);
        self
    }

    /// 移除一个属性，之后该属性不再出现在事件中
    pub fn without_attribute(mut self, name: &str) -> Self {
        self.attribute_types.remove(name);
        self
    }

    pub fn with_timestamp_normalization(mut self, enabled: bool) -> Self {
        self.normalize_timestamp = enabled;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::mysql_default()
    }
}
