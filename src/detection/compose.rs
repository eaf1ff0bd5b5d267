//! 路径与提交信息生成模块
//!
//! # 设计思路
//!
//! 平台与标题都可能缺失，按固定优先级逐级兜底：
//!
//! | 输入 | 文件路径 | 提交信息 |
//! |------|----------|----------|
//! | 平台 + 标题 | `{platform}/{title}-{platform}.{ext}` | `Add {平台名小写} solution for {title}` |
//! | 仅标题 | `solutions/{title}.{ext}` | `Add solution for {title}` |
//! | 都没有 | `solutions/solution-{YYYY-MM-DD}.{ext}` | `Add coding solution` |
//!
//! 提交信息中的标题把连字符还原为空格。日期通过 `Clock` 注入，保证可测。

use serde::Serialize;

use super::clock::Clock;
use super::language::LanguageMatch;
use super::platform::PlatformMatch;

/// 默认的无平台目录
pub const DEFAULT_SOLUTIONS_DIR: &str = "solutions";

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub file_path: String,
    pub commit_message: String,
}

/// 题目难度提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 根据标题中的关键词粗略判断难度，无标题或无关键词时为 `Medium`
    pub fn from_title(title: Option<&str>) -> Self {
        let Some(title) = title else {
            return Self::Medium;
        };
        let name = title.to_lowercase();
        if ["easy", "beginner", "simple"].iter().any(|kw| name.contains(kw)) {
            Self::Easy
        } else if ["hard", "difficult", "complex"].iter().any(|kw| name.contains(kw)) {
            Self::Hard
        } else {
            Self::Medium
        }
    }
}

/// 生成建议的文件路径与提交信息
///
/// # 参数
/// * `platform` - 平台识别结果（可缺失）
/// * `title` - 已规范化的标题 slug（可缺失，空串视为缺失）
/// * `language` - 语言识别结果，决定扩展名
/// * `clock` - 兜底路径使用的日期来源
/// * `solutions_dir` - 无平台时的目录
pub fn compose(
    platform: Option<&PlatformMatch>,
    title: Option<&str>,
    language: &LanguageMatch,
    clock: &dyn Clock,
    solutions_dir: &str,
) -> Composition {
    let ext = language.extension();
    let title = title.filter(|t| !t.is_empty());

    match (platform, title) {
        (Some(platform), Some(title)) => Composition {
            file_path: format!(
                "{id}/{title}-{id}.{ext}",
                id = platform.platform_id.to_lowercase()
            ),
            commit_message: format!(
                "Add {} solution for {}",
                platform.display_name.to_lowercase(),
                spaced(title)
            ),
        },
        (None, Some(title)) => Composition {
            file_path: format!("{solutions_dir}/{title}.{ext}"),
            commit_message: format!("Add solution for {}", spaced(title)),
        },
        (_, None) => Composition {
            file_path: format!(
                "{solutions_dir}/solution-{}.{ext}",
                clock.today().format("%Y-%m-%d")
            ),
            commit_message: "Add coding solution".to_string(),
        },
    }
}

fn spaced(title: &str) -> String {
    title.replace('-', " ")
}
