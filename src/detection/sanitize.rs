//! 名称规范化模块
//!
//! # 设计思路
//!
//! 把任意自由文本（题目标题、URL 中的 slug、页面标题）统一转成
//! 文件系统与 URL 都安全的 slug：小写、连字符分隔、无特殊字符。
//! 通用 slug 清洗与页面标题清洗共用一套规则，仅长度上限不同，
//! 因此收敛到同一个带可选上限的函数。
//!
//! # 实现思路
//!
//! 单轮变换按固定顺序执行：
//! 1. 去掉序号前缀（`"42. Two Sum"` → `"Two Sum"`）
//! 2. 删除非单词/空白/连字符字符
//! 3. 空白串折叠为单个连字符
//! 4. 连续连字符折叠
//! 5. 转小写
//! 6. 按上限截断（可选）
//! 7. 去掉首尾连字符
//!
//! 单轮变换可能暴露新的数字前缀（如 `"1-2-abc"`），所以重复执行直到结果不再变化，
//! 保证 `sanitize(sanitize(x)) == sanitize(x)`。

use once_cell::sync::Lazy;
use regex::Regex;

/// 页面标题清洗使用的长度上限
pub const TITLE_MAX_LENGTH: usize = 50;

static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.?\s*").unwrap());
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// 将自由文本规范化为 slug
///
/// # 参数
/// * `raw` - 原始文本
/// * `max_length` - 可选长度上限（按字符计），页面标题传 `Some(TITLE_MAX_LENGTH)`
///
/// # 返回
/// 规范化后的 slug；输入为空或全部被剔除时返回空字符串，由调用方替换为兜底名称。
pub fn sanitize(raw: &str, max_length: Option<usize>) -> String {
    let mut current = sanitize_once(raw, max_length);
    loop {
        let next = sanitize_once(&current, max_length);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// 页面标题清洗，带 50 字符上限
pub fn sanitize_title(raw: &str) -> String {
    sanitize(raw, Some(TITLE_MAX_LENGTH))
}

fn sanitize_once(raw: &str, max_length: Option<usize>) -> String {
    let stripped = ORDINAL_PREFIX.replace(raw, "");
    let cleaned = NON_SLUG_CHARS.replace_all(&stripped, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    let mut slug = collapsed.to_lowercase();

    if let Some(limit) = max_length {
        if let Some((cut, _)) = slug.char_indices().nth(limit) {
            slug.truncate(cut);
        }
    }

    slug.trim_matches('-').to_string()
}
