//! 提交请求构造模块
//!
//! # 设计思路
//!
//! 识别结果里的 `file_path` 与 `commit_message` 原样交给下游的仓库内容 API。
//! 这里只负责构造请求（仓库标识、接口路径、请求体），不做任何网络 I/O。
//!
//! # 实现思路
//!
//! - 请求体与 GitHub contents API 一致：`{ message, content, sha? }`，
//!   `content` 为 UTF-8 字节的标准 Base64。
//! - 更新已有文件时需要携带其 `sha`，新建文件时省略。
//! - 文件路径按段做百分号编码，保留 `/` 分隔。

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::detection::Suggestion;
use crate::error::SnapError;

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `owner/name` 形式的仓库标识
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> Result<Self, SnapError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let mut parts = trimmed.split('/');
        let (owner, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) => (owner, name.strip_suffix(".git").unwrap_or(name)),
            _ => ("", ""),
        };
        // 去掉 `.git` 之后再校验，`owner/.git` 会得到空名称
        if !is_valid_part(owner) || !is_valid_part(name) {
            return Err(SnapError::InvalidRepo(format!("'{}'（期望 owner/name）", raw)));
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// contents API 的相对路径
    pub fn contents_path(&self, file_path: &str) -> String {
        let encoded = file_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");
        format!("repos/{}/{}/contents/{}", self.owner, self.name, encoded)
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// contents API 的 PUT 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentsRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl ContentsRequest {
    pub fn new(message: impl Into<String>, content: &str, sha: Option<String>) -> Self {
        Self {
            message: message.into(),
            content: STANDARD.encode(content.as_bytes()),
            sha,
        }
    }
}

/// 一次完整的提交计划：目标仓库、接口路径与请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitPlan {
    pub repo: String,
    pub api_path: String,
    pub body: ContentsRequest,
}

impl CommitPlan {
    /// 用识别建议和片段内容组装提交计划，路径与信息原样透传
    pub fn from_suggestion(repo: &RepoRef, suggestion: &Suggestion, content: &str) -> Self {
        Self {
            repo: repo.to_string(),
            api_path: repo.contents_path(&suggestion.file_path),
            body: ContentsRequest::new(suggestion.commit_message.clone(), content, None),
        }
    }
}
