use std::fmt::{self, Display};

use serde::Serialize;

use crate::prelude::*;
use crate::segmenter::GraphemeSegment;

/// 单词：由非空白字素组成的非空序列
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Word {
    graphemes: Vec<GraphemeSegment>,
}

impl Word {
    /// 空序列或含有空白字素时返回 `None`
    pub fn new(graphemes: Vec<GraphemeSegment>) -> Option<Self> {
        let valid = !graphemes.is_empty() && graphemes.iter().all(|g| !g.is_whitespace);
        valid.then_some(Self { graphemes })
    }

    pub fn graphemes(&self) -> &[GraphemeSegment] {
        &self.graphemes
    }

    /// 字素数量（不是字节数）
    pub fn len(&self) -> GraphemeIdx {
        self.graphemes.len()
    }

    // 单词永远不为空，这里只是为了配合 `len`
    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    pub fn start(&self) -> ByteIdx {
        self.graphemes.first().map_or(0, |g| g.start)
    }
}

impl Display for Word {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.graphemes
            .iter()
            .try_for_each(|g| formatter.write_str(&g.grapheme))
    }
}

/// 分词结果中的一个元素：单词或一个空白字素
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    Word(Word),
    Space(GraphemeSegment),
}

impl Token {
    pub fn is_space(&self) -> bool {
        matches!(self, Self::Space(_))
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Self::Word(word) => Some(word),
            Self::Space(_) => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Word(word) => write!(formatter, "{word}"),
            Self::Space(space) => formatter.write_str(&space.grapheme),
        }
    }
}
