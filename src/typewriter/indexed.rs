use crate::prelude::*;
use crate::segmenter::GraphemeSegment;
use crate::tokenizer::{Token, TokenSequence, Word};

/// 带全局序号的字母
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexedLetter<'a> {
    pub letter_index: LetterIdx,
    pub grapheme: &'a GraphemeSegment,
}

/// 带序号的单词
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexedWord<'a> {
    pub word_index: WordIdx,
    pub letters: Vec<IndexedLetter<'a>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IndexedToken<'a> {
    Space(&'a GraphemeSegment),
    Word(IndexedWord<'a>),
}

/// 一次渲染内的计数状态，显式传入、显式返回
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    // 下一个单词的序号（已经见过的单词数）
    pub next_word: WordIdx,
    // 下一个字母的全局序号
    pub next_letter: LetterIdx,
}

/// 为整个序列分配序号，每次调用都从 0 开始
pub fn index_tokens(tokens: &TokenSequence) -> Vec<IndexedToken<'_>> {
    let (indexed, _) = tokens.iter().fold(
        (Vec::with_capacity(tokens.len()), Counters::default()),
        |(mut indexed, counters), token| {
            let (item, counters) = index_token(token, counters);
            indexed.push(item);
            (indexed, counters)
        },
    );
    indexed
}

/// 为单个元素分配序号。空白不占用单词序号，也不占用字母序号。
pub fn index_token(token: &Token, counters: Counters) -> (IndexedToken<'_>, Counters) {
    match token {
        Token::Space(space) => (IndexedToken::Space(space), counters),
        Token::Word(word) => {
            let indexed = index_word(word, counters);
            let counters = Counters {
                next_word: counters.next_word.saturating_add(1),
                next_letter: counters.next_letter.saturating_add(word.len()),
            };
            (IndexedToken::Word(indexed), counters)
        }
    }
}

fn index_word(word: &Word, counters: Counters) -> IndexedWord<'_> {
    IndexedWord {
        word_index: counters.next_word,
        letters: word
            .graphemes()
            .iter()
            .zip(counters.next_letter..)
            .map(|(grapheme, letter_index)| IndexedLetter {
                letter_index,
                grapheme,
            })
            .collect(),
    }
}
