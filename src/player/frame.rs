use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::prelude::*;
use crate::stagger::{Phase, Schedule};
use crate::typewriter::{IndexedLetter, IndexedToken};

/// 字素的渲染宽度
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GraphemeWidth {
    Half,
    Full,
}

impl GraphemeWidth {
    pub fn of(grapheme: &str) -> Self {
        match grapheme.width() {
            0 | 1 => Self::Half,
            _ => Self::Full,
        }
    }
}

impl From<GraphemeWidth> for usize {
    fn from(value: GraphemeWidth) -> Self {
        match value {
            GraphemeWidth::Half => 1,
            GraphemeWidth::Full => 2,
        }
    }
}

/// 排好位置的字母
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlacedLetter {
    pub letter_index: LetterIdx,
    pub grapheme: String,
    pub width: GraphemeWidth,
    // 相对于舞台左上角的位置
    pub position: Position,
}

impl PlacedLetter {
    fn new(letter: &IndexedLetter, position: Position) -> Self {
        Self {
            letter_index: letter.letter_index,
            grapheme: letter.grapheme.grapheme.clone(),
            width: GraphemeWidth::of(&letter.grapheme.grapheme),
            position,
        }
    }

    /// 隐藏时用等宽的空白占位，避免布局跳动
    pub fn blank(&self) -> &'static str {
        match self.width {
            GraphemeWidth::Half => " ",
            GraphemeWidth::Full => "  ",
        }
    }
}

/// 按显示宽度排版。
///
/// 单词放不下时整体换到下一行；比整行还宽的单词按字素断开。
/// 每个空白占一列，行首的空白（换行之后）不占位置。
pub fn layout(tokens: &[IndexedToken], max_width: ColIdx) -> Vec<PlacedLetter> {
    let max_width = max_width.max(1);
    let mut placed = Vec::new();
    let mut cursor = Position::default();

    for token in tokens {
        match token {
            IndexedToken::Space(_) => {
                if cursor.col == 0 {
                    continue;
                }
                if cursor.col.saturating_add(1) > max_width {
                    cursor = next_line(cursor);
                } else {
                    cursor.col = cursor.col.saturating_add(1);
                }
            }
            IndexedToken::Word(word) => {
                let word_width: usize = word
                    .letters
                    .iter()
                    .map(|letter| usize::from(GraphemeWidth::of(&letter.grapheme.grapheme)))
                    .sum();
                if cursor.col > 0 && cursor.col.saturating_add(word_width) > max_width {
                    cursor = next_line(cursor);
                }
                for letter in &word.letters {
                    let width = usize::from(GraphemeWidth::of(&letter.grapheme.grapheme));
                    if cursor.col > 0 && cursor.col.saturating_add(width) > max_width {
                        cursor = next_line(cursor);
                    }
                    placed.push(PlacedLetter::new(letter, cursor));
                    cursor.col = cursor.col.saturating_add(width);
                }
            }
        }
    }

    placed
}

fn next_line(cursor: Position) -> Position {
    Position {
        col: 0,
        row: cursor.row.saturating_add(1),
    }
}

/// 排版所占的行数
pub fn height(placed: &[PlacedLetter]) -> usize {
    placed
        .last()
        .map_or(0, |letter| letter.position.row.saturating_add(1))
}

/// 某一时刻每个字母的显示阶段
pub fn phases_at<'a>(
    placed: &'a [PlacedLetter],
    schedule: &Schedule,
    elapsed: Duration,
) -> impl Iterator<Item = (&'a PlacedLetter, Phase)> {
    let schedule = *schedule;
    placed
        .iter()
        .map(move |letter| (letter, schedule.phase_at(letter.letter_index, elapsed)))
}
