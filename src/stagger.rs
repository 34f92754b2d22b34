use std::{ops::Range, time::Duration};

use crate::prelude::*;
use crate::timing::{Timing, TimingValue, DEFAULT_DELAY, DEFAULT_DRAG_DELAY, DEFAULT_DURATION};

/// 单个字母在某一时刻的显示阶段
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    // 尚未开始
    Hidden,
    // 正在出现，进度在 [0, 1) 之间
    Entering(f64),
    // 已完全显示
    Shown,
}

/// 逐字母错开的出现时间表。
///
/// 第 `i` 个字母在 `delay + i * drag_delay` 开始出现，持续 `duration`。
/// 变量引用（`var(--x)`）无法在这里求值，按默认值处理。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub delay: Duration,
    pub drag_delay: Duration,
    pub duration: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            drag_delay: DEFAULT_DRAG_DELAY,
            duration: DEFAULT_DURATION,
        }
    }
}

fn resolve(value: Option<&TimingValue>, default: Duration) -> Duration {
    value.and_then(TimingValue::to_duration).unwrap_or(default)
}

impl Schedule {
    pub fn new(timing: &Timing) -> Self {
        Self {
            delay: resolve(timing.delay.as_ref(), DEFAULT_DELAY),
            drag_delay: resolve(timing.drag_delay.as_ref(), DEFAULT_DRAG_DELAY),
            duration: resolve(timing.duration.as_ref(), DEFAULT_DURATION),
        }
    }

    /// 第 `letter_index` 个字母的出现区间
    pub fn reveal_window(&self, letter_index: LetterIdx) -> Range<Duration> {
        let steps = u32::try_from(letter_index).unwrap_or(u32::MAX);
        let start = self
            .delay
            .saturating_add(self.drag_delay.saturating_mul(steps));
        start..start.saturating_add(self.duration)
    }

    /// 全部 `letter_count` 个字母出现完毕所需的时间
    pub fn total(&self, letter_count: usize) -> Duration {
        letter_count
            .checked_sub(1)
            .map_or(Duration::ZERO, |last| self.reveal_window(last).end)
    }

    pub fn phase_at(&self, letter_index: LetterIdx, elapsed: Duration) -> Phase {
        let window = self.reveal_window(letter_index);
        if elapsed < window.start {
            Phase::Hidden
        } else if elapsed >= window.end {
            Phase::Shown
        } else {
            let progress = (elapsed - window.start).as_secs_f64() / self.duration.as_secs_f64();
            Phase::Entering(progress)
        }
    }
}
