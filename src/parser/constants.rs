//! 解析器使用的常量定义
//!
//! 定义了解析过程中使用的行前缀、标记以及已知属性的类型表。

use crate::parser_config::AttributeType;

// 行前缀常量

/// 注释 / 头部行前缀
pub const COMMENT_PREFIX: u8 = b'#';

/// 用户与主机行前缀
pub static USER_HOST_PREFIX: &str = "# User@Host";

/// 用户与主机字段标记
pub static USER_HOST_MARKER: &str = "User@Host:";

/// 连接 ID 片段标记（出现在 `# User@Host` 行末尾）
pub static ID_MARKER: &str = "Id:";

/// 切换数据库的上下文行前缀
pub static USE_PREFIX: &str = "use ";

/// 会话变量上下文行前缀
pub static SET_PREFIX: &str = "SET ";

/// 会话时间戳上下文行前缀
pub static SET_TIMESTAMP_PREFIX: &str = "SET timestamp=";

/// 日志文件被重新打开（轮转）时 mysqld 写入的标记后缀
pub static ROTATION_MARKER_SUFFIX: &str = "started with:";

/// 时间戳输出格式
pub static TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 已知的慢日志属性及其类型（MySQL 与 Percona Server 扩展字段）
pub const KNOWN_ATTRIBUTES: &[(&str, AttributeType)] = &[
    // 耗时
    ("Query_time", AttributeType::Float),
    ("Lock_time", AttributeType::Float),
    ("InnoDB_IO_r_wait", AttributeType::Float),
    ("InnoDB_rec_lock_wait", AttributeType::Float),
    ("InnoDB_queue_wait", AttributeType::Float),
    // 计数
    ("Rows_sent", AttributeType::Int),
    ("Rows_examined", AttributeType::Int),
    ("Rows_affected", AttributeType::Int),
    ("Rows_read", AttributeType::Int),
    ("Bytes_sent", AttributeType::Int),
    ("Bytes_received", AttributeType::Int),
    ("Tmp_tables", AttributeType::Int),
    ("Tmp_disk_tables", AttributeType::Int),
    ("Tmp_table_sizes", AttributeType::Int),
    ("Merge_passes", AttributeType::Int),
    ("InnoDB_IO_r_ops", AttributeType::Int),
    ("InnoDB_IO_r_bytes", AttributeType::Int),
    ("InnoDB_pages_distinct", AttributeType::Int),
    ("Thread_id", AttributeType::Int),
    ("Killed", AttributeType::Int),
    ("Last_errno", AttributeType::Int),
    ("Errno", AttributeType::Int),
    ("Log_slow_rate_limit", AttributeType::Int),
    // 执行计划标志
    ("QC_Hit", AttributeType::Bool),
    ("Full_scan", AttributeType::Bool),
    ("Full_join", AttributeType::Bool),
    ("Tmp_table", AttributeType::Bool),
    ("Tmp_table_on_disk", AttributeType::Bool),
    ("Filesort", AttributeType::Bool),
    ("Filesort_on_disk", AttributeType::Bool),
    ("Priority_queue", AttributeType::Bool),
    // 字符串
    ("Schema", AttributeType::String),
    ("InnoDB_trx_id", AttributeType::String),
    ("Log_slow_rate_type", AttributeType::String),
];
