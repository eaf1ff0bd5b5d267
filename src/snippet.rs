//! 代码片段来源模块
//!
//! # 设计思路
//!
//! 识别流水线只接受字符串，片段从哪里来由这里决定：标准输入、本地文件
//! 或系统剪贴板。读取失败统一转为 `SnapError`；内容为空不是错误，
//! 交给流水线走兜底建议。

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::SnapError;

/// 片段来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetSource {
    /// 标准输入
    Stdin,
    /// 本地文件路径
    File(PathBuf),
    /// 系统剪贴板中的文本
    Clipboard,
}

impl SnippetSource {
    /// 读取片段文本
    pub fn read(&self) -> Result<String, SnapError> {
        let text = match self {
            Self::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
            Self::File(path) => fs::read_to_string(path)?,
            Self::Clipboard => read_clipboard_text()?,
        };
        log::debug!("📋 读取片段 - 来源: {:?} 长度: {} 字符", self, text.chars().count());
        Ok(normalize(text))
    }
}

fn read_clipboard_text() -> Result<String, SnapError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| SnapError::Clipboard(format!("打开剪贴板失败: {}", e)))?;
    clipboard
        .get_text()
        .map_err(|e| SnapError::Clipboard(format!("剪贴板中没有可用文本: {}", e)))
}

/// 去掉 UTF-8 BOM 并统一换行符
fn normalize(text: String) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}
