use std::{
    io::Error,
    time::{Duration, Instant},
};

use crate::prelude::*;
use crate::segmenter::Locale;
use crate::stagger::{Phase, Schedule};
use crate::timing::Timing;
use crate::typewriter::{index_tokens, TypewriterByLetter};

use super::super::frame::{self, PlacedLetter};
use super::super::terminal::{Attribute, Terminal};
use super::super::UIComponent;

/// 播放逐字母动画的舞台
pub struct Stage {
    text: String,
    locale: Locale,
    letters: Vec<PlacedLetter>,
    letter_count: usize,
    schedule: Schedule,
    started: Instant,
    size: Size,
    needs_redraw: bool,
    // 重播或尺寸变化后需要先清空
    needs_clear: bool,
    // 最后一帧（全部显示）是否已经画过
    drawn_final_frame: bool,
}

impl Stage {
    pub fn new(text: &str, locale: Locale, timing: &Timing) -> Self {
        Self {
            text: text.to_string(),
            locale,
            letters: Vec::new(),
            letter_count: 0,
            schedule: Schedule::new(timing),
            started: Instant::now(),
            size: Size::default(),
            needs_redraw: true,
            needs_clear: true,
            drawn_final_frame: false,
        }
    }

    /// 从头播放
    pub fn replay(&mut self) {
        self.started = Instant::now();
        self.needs_clear = true;
        self.drawn_final_frame = false;
        self.set_needs_redraw(true);
    }

    pub fn set_timing(&mut self, timing: &Timing) {
        self.schedule = Schedule::new(timing);
        self.replay();
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn total_duration(&self) -> Duration {
        self.schedule.total(self.letter_count)
    }

    // 每次尺寸变化都重新分词、排版
    fn relayout(&mut self) {
        let component = TypewriterByLetter::new(&self.text).locale(self.locale.clone());
        let tokens = component.tokens();
        self.letter_count = tokens.letter_count();
        self.letters = frame::layout(&index_tokens(&tokens), self.size.width);
        tracing::debug!(
            letters = self.letter_count,
            rows = frame::height(&self.letters),
            "laid out stage"
        );
    }
}

impl UIComponent for Stage {
    fn set_needs_redraw(&mut self, value: bool) {
        self.needs_redraw = value;
    }

    fn needs_redraw(&self) -> bool {
        // 动画结束后还要补画一次最终帧
        self.needs_redraw || !self.drawn_final_frame
    }

    fn is_animating(&self) -> bool {
        self.started.elapsed() < self.total_duration()
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.needs_clear = true;
        self.relayout();
    }

    fn draw(&mut self, origin_row: RowIdx) -> Result<(), Error> {
        if self.needs_clear {
            for row in 0..self.size.height {
                Terminal::print_row(origin_row.saturating_add(row), "")?;
            }
            self.needs_clear = false;
        }

        let elapsed = self.started.elapsed();
        tracing::trace!(?elapsed, "drawing frame");
        for (letter, phase) in frame::phases_at(&self.letters, &self.schedule, elapsed) {
            // 超出舞台高度的行不画
            if letter.position.row >= self.size.height {
                break;
            }
            let position = letter.position.below(origin_row);
            match phase {
                Phase::Hidden => Terminal::print_at(position, letter.blank(), None)?,
                Phase::Entering(_) | Phase::Shown => {
                    Terminal::print_at(position, &letter.grapheme, Attribute::for_phase(phase))?;
                }
            }
        }

        if elapsed >= self.total_duration() {
            self.drawn_final_frame = true;
        }
        Ok(())
    }
}
