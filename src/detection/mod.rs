//! # 智能识别流水线（detection）
//!
//! ## 设计思路
//!
//! 输入一段捕获到的文本（代码 + 可选的页面标题/URL），确定性地推导出：
//! 来源平台、题目标题 slug、编程语言、建议的仓库文件路径与提交信息。
//! 所有组件都是纯函数，不持有跨调用状态，可以被任意多个调用方并发使用；
//! 唯一的时间依赖（兜底路径里的日期）通过 `Clock` 注入。
//!
//! ## 子模块职责
//!
//! ```text
//! DetectionInput
//!    ├─ platform.rs  平台注册表：URL/文本 → PlatformMatch
//!    ├─ title.rs     前 30 行扫描标题候选 + 有效性过滤
//!    ├─ language.rs  正则特征打分 → LanguageMatch
//!    ↓
//! sanitize.rs   标题/slug 规范化
//!    ↓
//! compose.rs    路径 + 提交信息（按优先级兜底）
//!    ↓
//! Suggestion
//! ```
//!
//! ## 标题来源优先级
//!
//! 1. 平台链接中捕获的 slug
//! 2. 代码开头提取的标题
//! 3. 页面标题（带 50 字符上限），清洗为空时使用配置里的兜底名
//!
//! 空白输入直接走最低优先级兜底，不进入任何扫描逻辑。

pub mod clock;
pub mod compose;
pub mod language;
pub mod platform;
pub mod sanitize;
pub mod title;

use serde::Serialize;

use crate::config::SnapConfig;
use crate::error::SnapError;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compose::{Composition, Difficulty};
pub use language::LanguageMatch;
pub use platform::PlatformMatch;

/// 一次识别的输入，调用结束即丢弃
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionInput {
    pub raw_text: String,
    pub page_title: Option<String>,
    pub page_url: Option<String>,
}

impl DetectionInput {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = Some(page_url.into());
        self
    }

    pub fn with_page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = Some(page_title.into());
        self
    }
}

/// 流水线的唯一输出，构造后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub file_path: String,
    pub commit_message: String,
    pub detected_platform: Option<PlatformMatch>,
    pub detected_language: LanguageMatch,
    /// 最终采用的标题 slug
    pub title: Option<String>,
    pub difficulty: Difficulty,
}

/// 识别流水线
///
/// 只持有只读配置与时间源，`detect` 以 `&self` 调用，可跨线程共享。
#[derive(Debug, Clone)]
pub struct DetectionPipeline<C = SystemClock> {
    config: SnapConfig,
    clock: C,
}

impl DetectionPipeline<SystemClock> {
    pub fn new(config: SnapConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for DetectionPipeline<SystemClock> {
    fn default() -> Self {
        Self::new(SnapConfig::default())
    }
}

impl<C: Clock> DetectionPipeline<C> {
    pub fn with_clock(config: SnapConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// 执行完整识别
    ///
    /// # 返回
    /// - `Ok(Suggestion)` — 总是给出尽力而为的建议
    /// - `Err(SnapError::InvalidUrl)` — 显式传入的页面 URL 无法解析
    pub fn detect(&self, input: &DetectionInput) -> Result<Suggestion, SnapError> {
        if input.raw_text.trim().is_empty() {
            log::debug!("输入为空白，直接使用兜底建议");
            return Ok(self.assemble(None, None, LanguageMatch::plain_text()));
        }

        let platform = match input.page_url.as_deref() {
            Some(url) => platform::match_url(url)?,
            None => None,
        }
        .or_else(|| platform::match_text(&input.raw_text));

        let title = self.resolve_title(input, platform.as_ref());
        let language = language::classify(&input.raw_text);

        let suggestion = self.assemble(platform, title, language);
        log::debug!(
            "识别完成 - 路径: {} 语言: {} 平台: {}",
            suggestion.file_path,
            suggestion.detected_language.language_id,
            suggestion
                .detected_platform
                .as_ref()
                .map_or("unknown", |p| p.platform_id)
        );
        Ok(suggestion)
    }

    fn resolve_title(
        &self,
        input: &DetectionInput,
        platform: Option<&PlatformMatch>,
    ) -> Option<String> {
        let from_slug = platform
            .and_then(|p| p.problem_slug_raw.as_deref())
            .map(|slug| sanitize::sanitize(slug, None))
            .filter(|slug| !slug.is_empty());
        if from_slug.is_some() {
            return from_slug;
        }

        let from_code = title::extract(&input.raw_text, self.config.scan_line_limit)
            .map(|candidate| sanitize::sanitize(&candidate, None))
            .filter(|slug| !slug.is_empty());
        if from_code.is_some() {
            return from_code;
        }

        input
            .page_title
            .as_deref()
            .filter(|page_title| !page_title.trim().is_empty())
            .map(|page_title| {
                let slug = sanitize::sanitize(page_title, Some(self.config.title_max_length));
                if slug.is_empty() {
                    self.config.fallback_name.clone()
                } else {
                    slug
                }
            })
    }

    fn assemble(
        &self,
        platform: Option<PlatformMatch>,
        title: Option<String>,
        language: LanguageMatch,
    ) -> Suggestion {
        let Composition {
            file_path,
            commit_message,
        } = compose::compose(
            platform.as_ref(),
            title.as_deref(),
            &language,
            &self.clock,
            &self.config.solutions_dir,
        );

        Suggestion {
            file_path,
            commit_message,
            difficulty: Difficulty::from_title(title.as_deref()),
            detected_platform: platform,
            detected_language: language,
            title,
        }
    }
}

/// 便捷入口：默认配置 + 系统时钟
pub fn run_detection(raw_text: &str, page_url: Option<&str>) -> Result<Suggestion, SnapError> {
    let mut input = DetectionInput::new(raw_text);
    if let Some(url) = page_url {
        input = input.with_page_url(url);
    }
    DetectionPipeline::new(SnapConfig::default()).detect(&input)
}
