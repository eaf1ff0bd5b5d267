//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `SnapError` 枚举。检测流水线本身对"内容"永不报错，
//! 只有显式传入的 URL 解析失败才会返回 `InvalidUrl`；其余变体服务于
//! 外围能力（读取片段、加载配置、构造提交请求）。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `std::io::Error` 提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，便于 JSON 输出。

use serde::Serialize;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum SnapError {
    /// 页面 URL 无法解析（区别于"未匹配到平台"）
    #[error("无效的 URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// 仓库标识不是 `owner/name` 形式
    #[error("无效的仓库标识: {0}")]
    InvalidRepo(String),

    /// 剪贴板读取失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件读写失败
    #[error("配置错误: {0}")]
    Config(String),

    /// 输出序列化失败
    #[error("序列化失败: {0}")]
    Serialize(String),
}

impl Serialize for SnapError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::SnapError;

    #[test]
    fn invalid_url_message_names_the_url() {
        let err = SnapError::InvalidUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn serializes_as_display_string() {
        let err = SnapError::InvalidRepo("octocat".to_string());
        let json = serde_json::to_string(&err).expect("serialize error");
        assert_eq!(json, format!("\"{}\"", err));
    }
}
