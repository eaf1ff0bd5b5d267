//! 题目标题提取模块
//!
//! # 设计思路
//!
//! 只扫描代码开头若干行，逐行尝试四种策略，第一个通过校验的候选立即返回：
//! 1. 显式标记：`Problem:` / `Question:` / `Title:`（冒号或连字符分隔），
//!    只认行首或紧跟注释符号的标记，`def f(title: str)` 这类参数名不算
//! 2. 块注释：`/* ... */`
//! 3. 行注释：`// ...`
//! 4. 声明名：`function` / `def` / `class` 后的标识符
//!
//! 候选必须通过 `is_valid_title`，否则丢弃并继续尝试。
//! 找不到候选返回 `None`，这是常见结果而不是错误。

use once_cell::sync::Lazy;
use regex::Regex;

/// 默认扫描行数
pub const DEFAULT_SCAN_LINES: usize = 30;

static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?://+|#+|/\*+|\*+|--)\s*)?(?:problem|question|title)\s*[:\-]").unwrap()
});
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*+\s*(.+?)\s*\*+/").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//\s*(.+)").unwrap());
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:function|def|class)\s+(\w+)").unwrap());

static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.?\d*$").unwrap());
static NO_WORD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\w\s]*$").unwrap());
static GENERIC_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(solution|answer|code|program|algorithm|class|def|function|public|static|void|main)$",
    )
    .unwrap()
});
static METADATA_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(author|name|date|time|version|import|include|using|from):").unwrap()
});
static OPERATORS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[{}()\[\]<>;=+*-]+$").unwrap());
static TEST_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^test").unwrap());
static SINGLE_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]$").unwrap());

/// 扫描前 `max_lines` 行提取题目标题（未规范化）
pub fn extract(code: &str, max_lines: usize) -> Option<String> {
    code.lines()
        .take(max_lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find_map(candidate_from_line)
}

fn candidate_from_line(line: &str) -> Option<String> {
    let marker = MARKER.find(line).map(|m| &line[m.end()..]);
    let block = capture_first(&BLOCK_COMMENT, line);
    let comment = capture_first(&LINE_COMMENT, line);
    let declaration = capture_first(&DECLARATION, line);

    [marker, block, comment, declaration]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| {
            let valid = is_valid_title(candidate);
            if !valid {
                log::debug!("标题候选被过滤: {:?}", candidate);
            }
            valid
        })
        .map(str::to_string)
}

fn capture_first<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 标题候选校验
///
/// 拒绝：长度不在 [3, 100]、纯数字、无单词字符、泛用词、元数据标签、
/// 纯括号/运算符、`test` 开头、单个字母。
pub fn is_valid_title(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    let length = trimmed.chars().count();
    if !(3..=100).contains(&length) {
        return false;
    }
    if NUMERIC.is_match(trimmed) || NO_WORD_CHARS.is_match(trimmed) {
        return false;
    }

    ![
        &GENERIC_TERM,
        &METADATA_LABEL,
        &OPERATORS_ONLY,
        &TEST_PREFIX,
        &SINGLE_LETTER,
    ]
    .iter()
    .any(|pattern| pattern.is_match(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_marker_takes_text_after_it() {
        let code = "// Problem: Valid Parentheses\ndef isValid(s):\n    pass";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES).as_deref(), Some("Valid Parentheses"));
    }

    #[test]
    fn marker_with_hyphen_separator() {
        let code = "# Title - Merge Intervals\n";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES).as_deref(), Some("Merge Intervals"));
    }

    #[test]
    fn marker_must_start_the_line() {
        assert_eq!(extract("Problem: Two Sum\n", DEFAULT_SCAN_LINES).as_deref(), Some("Two Sum"));
        assert_eq!(
            extract(" * Question - Jump Game\n", DEFAULT_SCAN_LINES).as_deref(),
            Some("Jump Game")
        );
        assert_eq!(extract("def f(title: str):\n    return title", DEFAULT_SCAN_LINES), None);
        assert_eq!(
            extract("def parse(problem: str):\n    pass", DEFAULT_SCAN_LINES).as_deref(),
            Some("parse")
        );
    }

    #[test]
    fn block_comment_is_used() {
        let code = "/* Longest Common Prefix */\nint f() { return 0; }";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES).as_deref(), Some("Longest Common Prefix"));
    }

    #[test]
    fn line_comment_is_used() {
        let code = "\n\n// Reverse Linked List\nfunction reverse(head) {}";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES).as_deref(), Some("Reverse Linked List"));
    }

    #[test]
    fn declaration_name_is_last_resort() {
        let code = "class LRUCache:\n    pass";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES).as_deref(), Some("LRUCache"));
    }

    #[test]
    fn invalid_comment_falls_through_to_next_line() {
        let code = "// 42\n// Author: someone\ndef maxProfit(prices):";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES).as_deref(), Some("maxProfit"));
    }

    #[test]
    fn rejected_declarations_yield_none() {
        let code = "def main():\n    def test_it():\n        pass";
        assert_eq!(extract(code, DEFAULT_SCAN_LINES), None);
    }

    #[test]
    fn only_leading_window_is_scanned() {
        let mut code = "x = 1\n".repeat(30);
        code.push_str("// Two Sum\n");
        assert_eq!(extract(&code, DEFAULT_SCAN_LINES), None);
        assert_eq!(extract(&code, 31).as_deref(), Some("Two Sum"));
    }

    #[test]
    fn validity_filter() {
        assert!(!is_valid_title("42"));
        assert!(!is_valid_title("3.14"));
        assert!(!is_valid_title("ab"));
        assert!(!is_valid_title("Solution"));
        assert!(!is_valid_title("name: foo"));
        assert!(!is_valid_title("{}();"));
        assert!(!is_valid_title("***---"));
        assert!(!is_valid_title("testHelper"));
        assert!(!is_valid_title(&"a".repeat(101)));
        assert!(is_valid_title("Two Sum Problem"));
        assert!(is_valid_title("abc"));
    }

    #[test]
    fn empty_input_has_no_title() {
        assert_eq!(extract("", DEFAULT_SCAN_LINES), None);
        assert_eq!(extract("   \n\t\n", DEFAULT_SCAN_LINES), None);
    }
}
