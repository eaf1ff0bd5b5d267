//! 平台识别模块
//!
//! # 设计思路
//!
//! 用一张固定顺序的注册表描述已知的代码托管/刷题平台。
//! 识别过程是纯粹的表驱动：按声明顺序遍历，首个命中即返回，不做打分。
//! 注册表只读，进程内首次使用时构建一次。
//!
//! # 实现思路
//!
//! - `match_url`：解析 URL，只对主机名做小写化和**包含**判断
//!   （因此 `www.` 与其他子域名同样命中），命中后用 slug 正则在原始 URL 上
//!   提取题目 slug。
//! - `match_text`：没有页面 URL 时，在任意文本（例如代码注释里粘贴的题目链接）
//!   中查找第一个能匹配 slug 正则的平台。
//! - URL 解析失败返回 `SnapError::InvalidUrl`，与"未匹配"（`Ok(None)`）区分开。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::error::SnapError;

/// 注册表中的一个平台
#[derive(Debug)]
pub struct PlatformEntry {
    /// 主机名片段，按包含关系匹配
    pub host_fragment: &'static str,
    pub platform_id: &'static str,
    pub display_name: &'static str,
    /// 前端展示用的图标 class
    pub ui_icon: Option<&'static str>,
    /// 第 1 个捕获组为题目 slug
    pub slug_pattern: Option<Regex>,
}

/// 平台识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformMatch {
    pub platform_id: &'static str,
    pub display_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_slug_raw: Option<String>,
}

type RawEntry = (
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
);

// 带 slug 规则的刷题平台排在前面，其余只按主机名识别。
const PLATFORMS: &[RawEntry] = &[
    (
        "leetcode.com",
        "leetcode",
        "LeetCode",
        Some("fas fa-code"),
        Some(r"(?i)(?:https?://)?(?:www\.)?leetcode\.com/problems/([^/\s?#]+)"),
    ),
    (
        "geeksforgeeks.org",
        "geeksforgeeks",
        "GeeksforGeeks",
        Some("fas fa-terminal"),
        Some(r"(?i)(?:https?://)?(?:www\.)?geeksforgeeks\.org/(?:problems|practice)/([^/\s?#]+)"),
    ),
    (
        "hackerrank.com",
        "hackerrank",
        "HackerRank",
        Some("fas fa-code-branch"),
        Some(r"(?i)(?:https?://)?(?:www\.)?hackerrank\.com/challenges/([^/\s?#]+)"),
    ),
    (
        "codechef.com",
        "codechef",
        "CodeChef",
        Some("fas fa-utensils"),
        Some(r"(?i)(?:https?://)?(?:www\.)?codechef\.com/(?:problems|practice)/([^/\s?#]+)"),
    ),
    (
        "codeforces.com",
        "codeforces",
        "Codeforces",
        Some("fas fa-trophy"),
        Some(r"(?i)(?:https?://)?(?:www\.)?codeforces\.com/(?:contest/\d+/)?problem/([^/\s?#]+)"),
    ),
    ("topcoder.com", "topcoder", "TopCoder", None, None),
    ("spoj.com", "spoj", "SPOJ", None, None),
    ("codewars.com", "codewars", "Codewars", None, None),
    ("exercism.org", "exercism", "Exercism", None, None),
    ("atcoder.jp", "atcoder", "AtCoder", None, None),
    ("github.com", "github", "GitHub", None, None),
    ("gitlab.com", "gitlab", "GitLab", None, None),
    ("bitbucket.org", "bitbucket", "Bitbucket", None, None),
    ("stackoverflow.com", "stackoverflow", "Stack Overflow", None, None),
    ("stackblitz.com", "stackblitz", "StackBlitz", None, None),
    ("codesandbox.io", "codesandbox", "CodeSandbox", None, None),
    ("codepen.io", "codepen", "CodePen", None, None),
    ("replit.com", "replit", "Replit", None, None),
    ("glitch.com", "glitch", "Glitch", None, None),
    ("freecodecamp.org", "freecodecamp", "freeCodeCamp", None, None),
    ("codecademy.com", "codecademy", "Codecademy", None, None),
    ("coursera.org", "coursera", "Coursera", None, None),
    ("udemy.com", "udemy", "Udemy", None, None),
    ("pluralsight.com", "pluralsight", "Pluralsight", None, None),
    ("edx.org", "edx", "edX", None, None),
    ("khanacademy.org", "khanacademy", "Khan Academy", None, None),
    ("developer.mozilla.org", "mdn", "MDN", None, None),
    ("w3schools.com", "w3schools", "W3Schools", None, None),
    ("tutorialspoint.com", "tutorialspoint", "Tutorialspoint", None, None),
    ("javatpoint.com", "javatpoint", "Javatpoint", None, None),
    ("kaggle.com", "kaggle", "Kaggle", None, None),
    ("colab.research.google.com", "colab", "Colab", None, None),
    ("jupyter.org", "jupyter", "Jupyter", None, None),
    ("observablehq.com", "observable", "Observable", None, None),
    ("medium.com", "medium", "Medium", None, None),
    ("dev.to", "dev-to", "DEV", None, None),
];

static REGISTRY: Lazy<Vec<PlatformEntry>> = Lazy::new(|| {
    PLATFORMS
        .iter()
        .map(
            |&(host_fragment, platform_id, display_name, ui_icon, slug)| PlatformEntry {
                host_fragment,
                platform_id,
                display_name,
                ui_icon,
                slug_pattern: slug.map(|pattern| Regex::new(pattern).unwrap()),
            },
        )
        .collect()
});

/// 按声明顺序返回完整注册表
pub fn registry() -> &'static [PlatformEntry] {
    &REGISTRY
}

impl PlatformEntry {
    fn to_match(&self, problem_slug_raw: Option<String>) -> PlatformMatch {
        PlatformMatch {
            platform_id: self.platform_id,
            display_name: self.display_name,
            ui_icon: self.ui_icon,
            problem_slug_raw,
        }
    }

    fn capture_slug(&self, text: &str) -> Option<String> {
        self.slug_pattern
            .as_ref()
            .and_then(|pattern| pattern.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// 根据页面 URL 识别平台
///
/// # 返回
/// - `Ok(Some(_))` — 命中注册表（slug 可能为空）
/// - `Ok(None)` — 合法 URL 但平台未知，或 URL 没有主机名
/// - `Err(SnapError::InvalidUrl)` — URL 无法解析
pub fn match_url(url: &str) -> Result<Option<PlatformMatch>, SnapError> {
    let parsed = Url::parse(url.trim()).map_err(|e| SnapError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let Some(host) = parsed.host_str() else {
        log::debug!("URL 没有主机名，跳过平台识别: {}", url);
        return Ok(None);
    };
    let host = host.to_ascii_lowercase();

    let found = registry()
        .iter()
        .find(|entry| host.contains(entry.host_fragment))
        .map(|entry| entry.to_match(entry.capture_slug(url)));

    match &found {
        Some(platform) => log::debug!(
            "🔎 URL 命中平台 {} (slug: {:?})",
            platform.platform_id,
            platform.problem_slug_raw
        ),
        None => log::debug!("URL 主机 {} 未匹配任何已知平台", host),
    }
    Ok(found)
}

/// 在任意文本中查找平台题目链接
///
/// 只有带 slug 规则的平台参与匹配，首个命中即返回。
pub fn match_text(text: &str) -> Option<PlatformMatch> {
    registry().iter().find_map(|entry| {
        entry
            .capture_slug(text)
            .map(|slug| entry.to_match(Some(slug)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn leetcode_url_yields_slug() {
        let found = match_url("https://leetcode.com/problems/two-sum/")
            .expect("valid url")
            .expect("platform");
        assert_eq!(found.platform_id, "leetcode");
        assert_eq!(found.display_name, "LeetCode");
        assert_eq!(found.problem_slug_raw.as_deref(), Some("two-sum"));
    }

    #[test]
    fn subdomain_and_case_are_tolerated() {
        let found = match_url("https://WWW.HackerRank.com/challenges/Mini-Max-Sum/problem")
            .expect("valid url")
            .expect("platform");
        assert_eq!(found.platform_id, "hackerrank");
        assert_eq!(found.problem_slug_raw.as_deref(), Some("Mini-Max-Sum"));
    }

    #[test]
    fn codeforces_contest_path_yields_problem_letter() {
        let found = match_url("https://codeforces.com/contest/1850/problem/A")
            .expect("valid url")
            .expect("platform");
        assert_eq!(found.platform_id, "codeforces");
        assert_eq!(found.problem_slug_raw.as_deref(), Some("A"));
    }

    #[test]
    fn host_only_platform_has_no_slug() {
        let found = match_url("https://gist.github.com/someone/abc123")
            .expect("valid url")
            .expect("platform");
        assert_eq!(found.platform_id, "github");
        assert!(found.problem_slug_raw.is_none());
    }

    #[test]
    fn leetcode_non_problem_page_matches_without_slug() {
        let found = match_url("https://leetcode.com/discuss/")
            .expect("valid url")
            .expect("platform");
        assert_eq!(found.platform_id, "leetcode");
        assert!(found.problem_slug_raw.is_none());
    }

    #[test]
    fn unknown_host_is_none_not_error() {
        assert_eq!(match_url("https://example.com/x").expect("valid url"), None);
    }

    #[test]
    fn malformed_url_is_invalid_url_error() {
        let err = match_url("not a url").expect_err("should fail");
        assert!(matches!(err, SnapError::InvalidUrl { .. }));
    }

    #[test]
    fn text_scan_finds_link_inside_comment() {
        let code = "# see https://leetcode.com/problems/valid-parentheses/description\ndef f(): pass";
        let found = match_text(code).expect("platform");
        assert_eq!(found.platform_id, "leetcode");
        assert_eq!(found.problem_slug_raw.as_deref(), Some("valid-parentheses"));
    }

    #[test]
    fn text_scan_ignores_host_only_platforms() {
        assert_eq!(match_text("cloned from https://github.com/a/b"), None);
    }

    #[test]
    fn host_fragments_are_unique() {
        let mut seen = HashSet::new();
        for entry in registry() {
            assert!(seen.insert(entry.host_fragment), "{}", entry.host_fragment);
        }
    }
}
