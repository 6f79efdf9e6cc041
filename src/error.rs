//! 错误类型定义
//!
//! 逐行解析本身不会失败，错误只来自读取日志源（打开文件、读取数据）的过程。

use thiserror::Error;

/// 读取错误类型
///
/// 解析器核心对格式不规范的日志采取降级处理，只有 I/O 层面的问题才会以错误返回。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径及底层错误描述
        path: String,
    },

    /// 读取过程中发生的 I/O 错误
    #[error("I/O error: {0}")]
    IoError(String),
}
