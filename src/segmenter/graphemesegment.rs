use serde::Serialize;

use crate::prelude::*;

/// 一个字素簇（用户感知的字符）及其在原字符串中的位置
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GraphemeSegment {
    // 字素簇的字符串形式
    pub grapheme: String,
    // 在原字符串中的起始字节索引
    pub start: ByteIdx,
    // 是否为空白字素
    pub is_whitespace: bool,
}

impl GraphemeSegment {
    pub fn new(grapheme: &str, start: ByteIdx) -> Self {
        Self {
            grapheme: grapheme.to_string(),
            start,
            is_whitespace: is_whitespace_grapheme(grapheme),
        }
    }

    /// 结束字节索引（不包含）
    pub fn end(&self) -> ByteIdx {
        self.start.saturating_add(self.grapheme.len())
    }
}

/// 判断整个字素簇是否都是空白字符。
///
/// 空白集合与 ECMAScript 的 `\s` 相同：包含 U+FEFF，但不包含 U+0085（NEL）。
pub fn is_whitespace_grapheme(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(is_whitespace_char)
}

fn is_whitespace_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_detection() {
        assert!(is_whitespace_grapheme(" "));
        assert!(is_whitespace_grapheme("\t"));
        assert!(is_whitespace_grapheme("\r\n"));
        assert!(is_whitespace_grapheme("\u{3000}"));
        assert!(is_whitespace_grapheme("\u{a0}"));
        assert!(is_whitespace_grapheme("\u{feff}"));
        assert!(!is_whitespace_grapheme(""));
        assert!(!is_whitespace_grapheme("a"));
        assert!(!is_whitespace_grapheme("\u{200b}"));
        assert!(!is_whitespace_grapheme("\u{85}"));
    }

    #[test]
    fn whitespace_set_covers_every_space_separator() {
        let separators = [
            '\u{b}', '\u{c}', '\u{1680}', '\u{2000}', '\u{200a}', '\u{2028}', '\u{2029}',
            '\u{202f}', '\u{205f}',
        ];
        for ch in separators {
            assert!(is_whitespace_grapheme(&ch.to_string()), "{ch:?}");
        }
        assert!(!is_whitespace_grapheme("\u{180e}"));
        assert!(!is_whitespace_grapheme(" \u{85}"));
    }

    #[test]
    fn end_is_exclusive_byte_offset() {
        let segment = GraphemeSegment::new("é", 3);
        assert_eq!(segment.end(), 5);
        assert!(!segment.is_whitespace);
    }
}
