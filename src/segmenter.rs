use unicode_segmentation::UnicodeSegmentation;

pub use graphemesegment::{is_whitespace_grapheme, GraphemeSegment};
pub use locale::Locale;

mod graphemesegment;
mod locale;

/// 字素切分能力。
///
/// 把文本切成按顺序排列、带起始偏移的字素簇。调用方可以替换实现，
/// 以支持其它语言环境或自定义的切分规则，而无需改动分词算法。
pub trait GraphemeSegmenter {
    /// 该切分器所对应的语言环境
    fn locale(&self) -> &Locale;

    /// 按顺序返回 `text` 的所有字素簇
    fn segment(&self, text: &str) -> Vec<GraphemeSegment>;
}

/// 基于 UAX #29 的默认字素切分器。
///
/// 字素簇边界与语言环境无关，`locale` 仅作记录。
#[derive(Clone, Debug)]
pub struct UnicodeGraphemeSegmenter {
    locale: Locale,
    // true: 扩展字素簇；false: 传统字素簇
    extended: bool,
}

impl UnicodeGraphemeSegmenter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            extended: true,
        }
    }

    /// 使用传统（legacy）字素簇规则，例如不把 spacing mark 并入前一个字素
    pub fn legacy(locale: Locale) -> Self {
        Self {
            locale,
            extended: false,
        }
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }
}

impl Default for UnicodeGraphemeSegmenter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl GraphemeSegmenter for UnicodeGraphemeSegmenter {
    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn segment(&self, text: &str) -> Vec<GraphemeSegment> {
        // `grapheme_indices` 同时给出字节索引和字素簇
        text.grapheme_indices(self.extended)
            .map(|(byte_idx, grapheme)| GraphemeSegment::new(grapheme, byte_idx))
            .collect()
    }
}
