//! # CodeSnap — 代码片段提交建议库
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  snippet ── 标准输入 / 文件 / 剪贴板 → rawText           │
//! │       ↓                                                  │
//! │  detection::DetectionPipeline                            │
//! │   ├─ platform   平台注册表（URL / 文本中的题目链接）     │
//! │   ├─ title      前 30 行标题候选 + 有效性过滤            │
//! │   ├─ language   正则特征打分                             │
//! │   ├─ sanitize   slug 规范化                              │
//! │   └─ compose    路径 / 提交信息（逐级兜底）              │
//! │       ↓                                                  │
//! │  Suggestion ── commit::CommitPlan（请求体，无网络 I/O）  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `SnapError` |
//! | [`config`] | 检测参数 `SnapConfig` 的加载与保存 |
//! | [`detection`] | 平台/标题/语言识别与路径、提交信息生成 |
//! | [`snippet`] | 片段来源：标准输入、文件、系统剪贴板 |
//! | [`commit`] | 仓库标识解析与 contents API 请求体构造 |

pub mod commit;
pub mod config;
pub mod detection;
pub mod error;
pub mod snippet;

pub use config::SnapConfig;
pub use detection::{DetectionInput, DetectionPipeline, Suggestion, run_detection};
pub use error::SnapError;
