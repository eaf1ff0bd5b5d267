//! 编程语言识别模块
//!
//! # 设计思路
//!
//! 每种语言对应一组正则"特征"。对一段代码，统计每种语言有多少条特征
//! 至少命中一次，命中条数即该语言得分；各语言独立计分，不做互斥投票。
//! 得分最高者胜出，平分时取表中声明靠前的语言，结果稳定可复现。
//! 全部为 0 分时归类为 `txt`。
//!
//! # 实现思路
//!
//! - 每种语言的特征编译为一个 `RegexSet`，一次扫描得到全部命中条目。
//! - 通过 `once_cell::sync::Lazy` 在首次调用时编译，后续零成本复用。
//! - 表用 `Vec` 保存，遍历顺序即声明顺序（不使用 HashMap）。
//! - 行首锚定的特征使用 `(?m)`，`^`/`$` 在每一行边界匹配。
//! - 大小写敏感匹配原文，`System.out`、`Console.Write` 这类特征才有意义；
//!   SQL 关键字例外，单独带 `(?i)`。
//! - Java/C# 的特征覆盖不带 `public class`、`main` 的刷题模板（`class Solution`），
//!   否则它们只能命中 `class X`，会输给同分靠前的 Python。

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::Serialize;

/// 未识别时的语言标识
pub const PLAIN_TEXT: &str = "txt";

/// 单种语言的特征签名
#[derive(Debug)]
pub struct LanguageSignature {
    pub language_id: &'static str,
    pub patterns: RegexSet,
}

/// 语言识别结果，永远存在
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageMatch {
    pub language_id: &'static str,
    pub score: u32,
}

impl LanguageMatch {
    pub const fn plain_text() -> Self {
        Self {
            language_id: PLAIN_TEXT,
            score: 0,
        }
    }

    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        extension_for(self.language_id)
    }
}

impl Default for LanguageMatch {
    fn default() -> Self {
        Self::plain_text()
    }
}

const SIGNATURES: &[(&str, &[&str])] = &[
    (
        "py",
        &[
            r"def\s+\w+",
            r"import\s+\w+",
            r"print\s*\(",
            r"class\s+\w+",
            r#"if\s+__name__\s*==\s*['"]__main__['"]\s*:"#,
            r"(?m)^\s*from\s+[\w.]+\s+import\s",
            r"(?m)^\s*def\s+\w+\s*\(.*\)\s*(->\s*[^:]+)?:\s*$",
        ],
    ),
    (
        "js",
        &[
            r"function\s+\w+",
            r"const\s+\w+\s*=",
            r"console\.log",
            r"=>\s*\{",
            r"require\s*\(",
            r"(?m)^\s*(let|var)\s+\w+\s*=",
            r"\b(document|window)\.\w+",
            r"function\s*\(",
        ],
    ),
    (
        "java",
        &[
            r"public\s+class\s+\w+",
            r"public\s+static\s+void\s+main",
            r"System\.out\.print",
            r"import\s+java\.",
            r"(?m)^\s*(public|private|protected)\s+(static\s+)?[\w<>\[\], ]+\s+\w+\s*\(",
            r"\bnew\s+[A-Z]\w*(<[^>]*>)?\s*\(",
            r"\b(HashMap|ArrayList|LinkedList|HashSet|List|Map|Set|Deque)<",
        ],
    ),
    (
        "cpp",
        &[
            r"#include\s*<[\w.]+>",
            r"std::\w+",
            r"cout\s*<<",
            r"cin\s*>>",
            r"int\s+main\s*\(",
            r"using\s+namespace\s+std",
            r"\b(vector|unordered_map|unordered_set|pair)<",
            r"(?m)^\s*(public|private|protected):\s*$",
        ],
    ),
    (
        "cs",
        &[
            r"using\s+System",
            r"public\s+class\s+\w+",
            r"Console\.Write",
            r"static\s+void\s+Main",
            r"(?m)^\s*(public|private|protected|internal)\s+(static\s+)?\w+(<[^>]*>)?(\[\])?\s+[A-Z]\w*\s*\(",
            r"\bvar\s+\w+\s*=\s*new\b",
            r"\b(Dictionary|IList|IEnumerable)<",
            r"\.(Length|Count|ContainsKey|TryGetValue)\b",
        ],
    ),
    (
        "rb",
        &[
            r"def\s+\w+",
            r#"require\s+['"]"#,
            r"puts\s+",
            r"class\s+\w+",
            r"(?m)^\s*end\s*$",
        ],
    ),
    (
        "php",
        &[
            r"<\?php",
            r"function\s+\w+",
            r"echo\s+",
            r"require_once",
            r"\$_GET|\$_POST",
            r"\$\w+\s*=",
        ],
    ),
    (
        "go",
        &[
            r"func\s+\w+",
            r"package\s+\w+",
            r"fmt\.Print",
            r#"import\s+['"(]"#,
            r"\w+\s*:=",
        ],
    ),
    (
        "rs",
        &[
            r"fn\s+\w+",
            r"println!",
            r"use\s+std::",
            r"struct\s+\w+",
            r"let\s+mut\s+",
            r"impl\b",
        ],
    ),
    (
        "ts",
        &[
            r"function\s+\w+",
            r"const\s+\w+\s*:",
            r"console\.log",
            r"interface\s+\w+",
            r":\s*(string|number|boolean)\b",
            r"(?m)^(interface |type |enum )",
        ],
    ),
    (
        "c",
        &[
            r"#include\s*<(stdio|stdlib|string)\.h>",
            r"printf\s*\(",
            r"scanf\s*\(",
            r"int\s+main\s*\(",
            r"malloc\s*\(",
        ],
    ),
    (
        "swift",
        &[
            r"(?m)^\s*import\s+(Foundation|UIKit|SwiftUI)",
            r"func\s+\w+\s*\([^)]*\)\s*->",
            r"(?m)^\s*guard\s+let\s",
            r"\bvar\s+\w+\s*:\s*[A-Z]\w*",
        ],
    ),
    (
        "kt",
        &[
            r"(?m)^\s*fun\s+\w+",
            r"\bval\s+\w+\s*=",
            r"(?m)^\s*println\(",
        ],
    ),
    (
        "sql",
        &[
            r"(?mi)^\s*(SELECT|INSERT\s+INTO|UPDATE|DELETE\s+FROM|CREATE\s+TABLE|DROP\s+TABLE)\b",
            r"(?i)\bFROM\s+\w+",
            r"(?i)\bWHERE\s+\w+",
            r"(?i)\bJOIN\s+\w+",
            r"(?i)\bGROUP\s+BY\b",
        ],
    ),
    (
        "html",
        &[
            r"(?i)<!DOCTYPE\s+html",
            r"<html[\s>]",
            r"</(div|span|p|body|head)>",
            r"<(div|span|p|a)\b[^>]*>",
        ],
    ),
    (
        "css",
        &[
            r"(?m)^\s*[.#][\w-]+\s*\{",
            r"\b(color|margin|padding|font-size|display)\s*:\s*[^;]+;",
            r"@media\s",
        ],
    ),
    (
        "sh",
        &[
            r"(?m)^#!/bin/(ba)?sh",
            r"(?m)^\s*echo\s",
            r"\$\{\w+\}",
            r"\bif\s+\[\s",
            r"\$\(\w+",
        ],
    ),
];

static SIGNATURE_TABLE: Lazy<Vec<LanguageSignature>> = Lazy::new(|| {
    SIGNATURES
        .iter()
        .map(|&(language_id, patterns)| LanguageSignature {
            language_id,
            patterns: RegexSet::new(patterns).unwrap(),
        })
        .collect()
});

/// 按声明顺序返回语言特征表
pub fn signatures() -> &'static [LanguageSignature] {
    &SIGNATURE_TABLE
}

/// 对代码打分并选出最可能的语言
///
/// 任意字符串都是合法输入，空串返回 `txt`。
pub fn classify(code: &str) -> LanguageMatch {
    let mut best = LanguageMatch::plain_text();

    for signature in signatures() {
        let score = signature.patterns.matches(code).iter().count() as u32;
        // 严格大于才替换：平分时保留声明靠前的语言
        if score > best.score {
            best = LanguageMatch {
                language_id: signature.language_id,
                score,
            };
        }
    }

    log::debug!("语言识别结果: {} (score={})", best.language_id, best.score);
    best
}

/// 语言标识 → 文件扩展名
///
/// 同时接受短标识（`py`）与长名称（`python`），未知标识返回 `txt`。
pub fn extension_for(language_id: &str) -> &'static str {
    match language_id {
        "py" | "python" => "py",
        "js" | "javascript" => "js",
        "ts" | "typescript" => "ts",
        "java" => "java",
        "cpp" | "c++" => "cpp",
        "c" => "c",
        "cs" | "csharp" => "cs",
        "go" => "go",
        "rs" | "rust" => "rs",
        "php" => "php",
        "rb" | "ruby" => "rb",
        "swift" => "swift",
        "kt" | "kotlin" => "kt",
        "scala" => "scala",
        "r" => "r",
        "matlab" => "m",
        "html" => "html",
        "css" => "css",
        "sql" => "sql",
        "sh" | "bash" => "sh",
        "powershell" => "ps1",
        "dockerfile" => "dockerfile",
        "yaml" => "yml",
        "json" => "json",
        "xml" => "xml",
        "markdown" => "md",
        _ => PLAIN_TEXT,
    }
}
