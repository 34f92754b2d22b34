use std::convert::TryFrom;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::prelude::*;
use crate::timing::{Timing, TimingRange, TimingValue};

/// 可调节的时间参数（对应演示程序里的三个滑块）
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TimingControl {
    #[default]
    Delay,
    DragDelay,
    Duration,
}

impl TimingControl {
    pub const ALL: [Self; 3] = [Self::Delay, Self::DragDelay, Self::Duration];

    pub fn label(self) -> &'static str {
        match self {
            Self::Delay => "Delay",
            Self::DragDelay => "Drag Delay",
            Self::Duration => "Per-Letter Duration",
        }
    }

    pub fn range(self) -> TimingRange {
        match self {
            Self::Delay => TimingRange::DELAY,
            Self::DragDelay => TimingRange::DRAG_DELAY,
            Self::Duration => TimingRange::DURATION,
        }
    }

    pub fn get(self, timing: &Timing) -> Option<&TimingValue> {
        match self {
            Self::Delay => timing.delay.as_ref(),
            Self::DragDelay => timing.drag_delay.as_ref(),
            Self::Duration => timing.duration.as_ref(),
        }
    }

    fn slot(self, timing: &mut Timing) -> &mut Option<TimingValue> {
        match self {
            Self::Delay => &mut timing.delay,
            Self::DragDelay => &mut timing.drag_delay,
            Self::Duration => &mut timing.duration,
        }
    }

    /// 按步长调整，并返回新值
    pub fn adjust(self, timing: &mut Timing, increase: bool) -> TimingValue {
        let next = self.range().step_by(self.get(timing), increase);
        *self.slot(timing) = Some(next.clone());
        next
    }

    pub fn next(self) -> Self {
        match self {
            Self::Delay => Self::DragDelay,
            Self::DragDelay => Self::Duration,
            Self::Duration => Self::Delay,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Delay => Self::Duration,
            Self::DragDelay => Self::Delay,
            Self::Duration => Self::DragDelay,
        }
    }
}

/// 播放器命令
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlayerCommand {
    Replay,
    SelectNext,
    SelectPrevious,
    // true 为增加
    Adjust(bool),
    ResetTiming,
    Resize(Size),
    Quit,
}

impl TryFrom<KeyEvent> for PlayerCommand {
    type Error = String;

    fn try_from(event: KeyEvent) -> Result<Self, Self::Error> {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        match (code, modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => Ok(Self::Quit),
            (KeyCode::Char('q'), KeyModifiers::NONE) => Ok(Self::Quit),
            (KeyCode::Char('r'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Ok(Self::Replay),
            (KeyCode::Char('0'), KeyModifiers::NONE) => Ok(Self::ResetTiming),
            (KeyCode::Down | KeyCode::Tab, _) => Ok(Self::SelectNext),
            (KeyCode::Up | KeyCode::BackTab, _) => Ok(Self::SelectPrevious),
            (KeyCode::Right | KeyCode::Char('+'), _) => Ok(Self::Adjust(true)),
            (KeyCode::Left | KeyCode::Char('-'), _) => Ok(Self::Adjust(false)),
            _ => Err(format!("Unsupported key code {code:?} with modifier {modifiers:?}")),
        }
    }
}

// clippy::as_conversions: Will run into problems for rare edge case systems where usize < u16
#[allow(clippy::as_conversions)]
impl TryFrom<Event> for PlayerCommand {
    type Error = String;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Self::try_from(key_event)
            }
            Event::Resize(width_u16, height_u16) => Ok(Self::Resize(Size {
                height: height_u16 as usize,
                width: width_u16 as usize,
            })),
            _ => Err(format!("Event not supported: {event:?}")),
        }
    }
}
