//! `# User@Host` 行解析
//!
//! 行格式：`# User@Host: <user>[<id>] @ <host> [<ip>]  Id: <n>`，
//! 其中 host 或 ip 都可能为空。

use memchr::memchr;

use crate::event::{LogEvent, keys};
use crate::parser::constants::{ID_MARKER, USER_HOST_MARKER};

/// 从 `# User@Host` 行中提取出的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct UserHost<'a> {
    pub user: Option<&'a str>,
    pub host: Option<&'a str>,
    pub ip: Option<&'a str>,
}

impl UserHost<'_> {
    /// 把提取结果写入事件，同名属性以后写入的为准
    pub fn apply_to(&self, event: &mut LogEvent) {
        if let Some(user) = self.user {
            event.insert(keys::USER, user);
        }
        if let Some(host) = self.host {
            event.insert(keys::HOST, host);
        }
        if let Some(ip) = self.ip {
            event.insert(keys::IP, ip);
        }
    }
}

/// 解析 `# User@Host` 行
///
/// - `user`：`@` 之前、id 方括号之前的部分
/// - `host`：`@` 与 IP 方括号之间的部分；为空时回退为 IP，二者都为空时缺失
/// - `ip`：host 之后方括号中的内容，为空时缺失
///
/// 找不到 `User@Host:` 标记或 `@` 分隔符时返回空结果。
pub(crate) fn parse_user_host_line(line: &str) -> UserHost<'_> {
    let mut parsed = UserHost::default();

    let Some(marker) = line.find(USER_HOST_MARKER) else {
        return parsed;
    };
    let rest = &line[marker + USER_HOST_MARKER.len()..];

    let Some(at) = memchr(b'@', rest.as_bytes()) else {
        return parsed;
    };
    let (user_part, host_part) = (&rest[..at], &rest[at + 1..]);

    let user = user_part.split('[').next().unwrap_or("").trim();
    parsed.user = Some(user);

    let (host, ip) = match memchr(b'[', host_part.as_bytes()) {
        Some(open) => {
            let bracketed = &host_part[open + 1..];
            let close = memchr(b']', bracketed.as_bytes()).unwrap_or(bracketed.len());
            (host_part[..open].trim(), bracketed[..close].trim())
        }
        None => {
            // 没有 IP 方括号时，host 截止到 `Id:` 片段
            let end = host_part.find(ID_MARKER).unwrap_or(host_part.len());
            (host_part[..end].trim(), "")
        }
    };

    if !ip.is_empty() {
        parsed.ip = Some(ip);
    }
    parsed.host = match (host.is_empty(), parsed.ip) {
        (false, _) => Some(host),
        (true, Some(ip)) => Some(ip),
        (true, None) => None,
    };

    parsed
}
