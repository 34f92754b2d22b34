use crate::markup::{escape_html, Element, Node};
use crate::segmenter::{GraphemeSegmenter, Locale, UnicodeGraphemeSegmenter};
use crate::timing::{Timing, TimingValue};
use crate::tokenizer::{segment, TokenSequence};

pub use indexed::{index_token, index_tokens, Counters, IndexedLetter, IndexedToken, IndexedWord};
pub use stylesheet::STYLESHEET;

mod indexed;
mod stylesheet;

/// 根元素上的标记属性
pub const ROOT_ATTRIBUTE: &str = "data-typewriter-by-letter";
pub const WORD_INDEX_ATTRIBUTE: &str = "data-word-index";
pub const LETTER_INDEX_ATTRIBUTE: &str = "data-letter-index";
pub const WORD_INDEX_VARIABLE: &str = "--wi";
pub const LETTER_INDEX_VARIABLE: &str = "--i";

pub const HIDE_CLASS: &str = "hide";
pub const WORD_CLASS: &str = "word";
pub const LETTER_CLASS: &str = "letter";

/// 逐字母出现的打字机效果组件。
///
/// 每次 `render` 都重新分词、重新计数，不在两次渲染之间保留任何状态。
/// 输出包含两份文本：一份给屏幕阅读器的完整原文，一份对辅助技术隐藏、
/// 按单词和字母拆开的装饰结构。
#[derive(Default)]
pub struct TypewriterByLetter<'a> {
    text: String,
    locale: Locale,
    // 未提供时按 locale 创建默认切分器
    segmenter: Option<&'a dyn GraphemeSegmenter>,
    timing: Timing,
}

impl<'a> TypewriterByLetter<'a> {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// 只在没有自定义切分器时生效
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn segmenter(mut self, segmenter: &'a dyn GraphemeSegmenter) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn delay(mut self, delay: TimingValue) -> Self {
        self.timing.delay = Some(delay);
        self
    }

    pub fn drag_delay(mut self, drag_delay: TimingValue) -> Self {
        self.timing.drag_delay = Some(drag_delay);
        self
    }

    pub fn duration(mut self, duration: TimingValue) -> Self {
        self.timing.duration = Some(duration);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn get_timing(&self) -> &Timing {
        &self.timing
    }

    /// 分词结果
    pub fn tokens(&self) -> TokenSequence {
        match self.segmenter {
            Some(segmenter) => segment(&self.text, segmenter),
            None => segment(&self.text, &UnicodeGraphemeSegmenter::new(self.locale.clone())),
        }
    }

    /// 生成渲染树
    pub fn render(&self) -> Element {
        let tokens = self.tokens();
        let indexed = index_tokens(&tokens);
        tracing::debug!(tokens = indexed.len(), "rendering typewriter");

        let root = self
            .timing
            .style_variables()
            .fold(Element::new("span").flag(ROOT_ATTRIBUTE), |root, (name, value)| {
                // 时间值原样输出
                root.style_variable(name, value)
            });

        // 给屏幕阅读器和复制/选中用的完整原文
        let hidden = Element::new("span")
            .class(HIDE_CLASS)
            .children((!self.text.is_empty()).then(|| Node::text(&self.text)));

        let visible = Element::new("span")
            .attribute("aria-hidden", "true")
            .children(indexed.iter().map(render_token));

        root.child(hidden).child(visible)
    }

    /// 包含默认样式表的完整 HTML 页面
    pub fn page(&self) -> String {
        let locale = match self.segmenter {
            Some(segmenter) => segmenter.locale(),
            None => &self.locale,
        };
        format!(
            "<!DOCTYPE html>\n<html lang=\"{locale}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n<h1>{tree}</h1>\n</body>\n</html>\n",
            title = escape_html(&self.text),
            tree = self.render(),
        )
    }
}

fn render_token(token: &IndexedToken) -> Node {
    match token {
        // 所有空白都渲染成一个普通空格
        IndexedToken::Space(_) => Node::text(" "),
        IndexedToken::Word(word) => Element::new("span")
            .class(WORD_CLASS)
            .attribute(WORD_INDEX_ATTRIBUTE, word.word_index)
            .style_variable(WORD_INDEX_VARIABLE, word.word_index)
            .children(word.letters.iter().map(render_letter))
            .into(),
    }
}

fn render_letter(letter: &IndexedLetter) -> Node {
    Element::new("span")
        .class(LETTER_CLASS)
        .attribute(LETTER_INDEX_ATTRIBUTE, letter.letter_index)
        .style_variable(LETTER_INDEX_VARIABLE, letter.letter_index)
        .child(Node::text(&letter.grapheme.grapheme))
        .into()
}
