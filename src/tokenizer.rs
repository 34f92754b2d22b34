use std::mem;

use crate::segmenter::{GraphemeSegment, GraphemeSegmenter};

pub use token::{Token, Word};
pub use tokensequence::TokenSequence;

mod token;
mod tokensequence;

/// 把文本切成单词和空白。
///
/// 连续的非空白字素组成一个单词；每个空白字素单独成为一个 `Token::Space`，
/// 连续空白不会合并。标点只要和单词之间没有空白，就属于该单词。
/// 空字符串得到空序列。
pub fn segment(text: &str, segmenter: &dyn GraphemeSegmenter) -> TokenSequence {
    let mut tokens = Vec::new();
    // 当前正在累积的单词
    let mut current_word: Vec<GraphemeSegment> = Vec::new();

    for grapheme in segmenter.segment(text) {
        if grapheme.is_whitespace {
            // 遇到空白：先结束当前单词，再追加空白
            if let Some(word) = Word::new(mem::take(&mut current_word)) {
                tokens.push(Token::Word(word));
            }
            tokens.push(Token::Space(grapheme));
        } else {
            current_word.push(grapheme);
        }
    }

    // 别忘了最后一个单词
    if let Some(word) = Word::new(current_word) {
        tokens.push(Token::Word(word));
    }

    let sequence = TokenSequence::from_tokens(tokens);
    tracing::debug!(
        locale = %segmenter.locale(),
        words = sequence.word_count(),
        spaces = sequence.space_count(),
        letters = sequence.letter_count(),
        "segmented text"
    );
    sequence
}
