use std::{
    io::Error,
    time::{Duration, Instant},
};

use crate::prelude::*;
use crate::timing::Timing;

use super::super::command::TimingControl;
use super::super::terminal::Terminal;
use super::super::UIComponent;

// 提示消息显示多久
const MESSAGE_DURATION: Duration = Duration::new(3, 0);
const KEY_HINTS: &str = "r replay | ↑/↓ select | ←/→ adjust | 0 reset | q quit";

/// 当前的时间参数及动画信息
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlsStatus {
    pub timing: Timing,
    pub selected: TimingControl,
    pub letter_count: usize,
    pub total: Duration,
}

impl ControlsStatus {
    /// 例如 `Delay: 1000ms` 或 `Delay: Default (0ms)`
    pub fn control_to_string(&self, control: TimingControl) -> String {
        let value = control.get(&self.timing).map_or_else(
            || format!("Default ({}ms)", control.range().default),
            ToString::to_string,
        );
        format!("{}: {value}", control.label())
    }

    pub fn summary_to_string(&self) -> String {
        format!(
            "{NAME} {VERSION} - {} letters, {}ms",
            self.letter_count,
            self.total.as_millis()
        )
    }
}

struct Message {
    text: String,
    time: Instant,
}

impl Message {
    fn is_expired(&self) -> bool {
        self.time.elapsed() > MESSAGE_DURATION
    }
}

/// 底部的控制区：每个时间参数一行，最后一行是状态栏
#[derive(Default)]
pub struct ControlsBar {
    status: ControlsStatus,
    message: Option<Message>,
    needs_redraw: bool,
    size: Size,
}

impl ControlsBar {
    pub const HEIGHT: usize = TimingControl::ALL.len() + 1;

    pub fn update_status(&mut self, status: ControlsStatus) {
        if status != self.status {
            self.status = status;
            self.set_needs_redraw(true);
        }
    }

    pub fn update_message(&mut self, text: &str) {
        self.message = Some(Message {
            text: text.to_string(),
            time: Instant::now(),
        });
        self.set_needs_redraw(true);
    }
}

impl UIComponent for ControlsBar {
    fn set_needs_redraw(&mut self, value: bool) {
        self.needs_redraw = value;
    }

    fn needs_redraw(&self) -> bool {
        // 消息过期后还要重绘一次把它清掉
        self.needs_redraw || self.message.as_ref().is_some_and(Message::is_expired)
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn draw(&mut self, origin_row: RowIdx) -> Result<(), Error> {
        for (offset, control) in TimingControl::ALL.into_iter().enumerate() {
            let marker = if control == self.status.selected { '>' } else { ' ' };
            let line = format!("{marker} {}", self.status.control_to_string(control));
            Terminal::print_row(origin_row.saturating_add(offset), &line)?;
        }

        if self.message.as_ref().is_some_and(Message::is_expired) {
            self.message = None;
        }
        let beginning = self.status.summary_to_string();
        let ending = self
            .message
            .as_ref()
            .map_or(KEY_HINTS, |message| message.text.as_str());
        // 右对齐；放不下时只显示左半部分
        let remainder_len = self.size.width.saturating_sub(beginning.chars().count());
        let line = if ending.chars().count() < remainder_len {
            format!("{beginning}{ending:>remainder_len$}")
        } else {
            beginning
        };
        Terminal::print_inverted_row(origin_row.saturating_add(TimingControl::ALL.len()), &line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingValue;

    #[test]
    fn shows_defaults_for_unset_values() {
        let status = ControlsStatus {
            timing: Timing {
                delay: Some(TimingValue::millis(1000)),
                ..Timing::default()
            },
            ..ControlsStatus::default()
        };
        assert_eq!(status.control_to_string(TimingControl::Delay), "Delay: 1000ms");
        assert_eq!(
            status.control_to_string(TimingControl::DragDelay),
            "Drag Delay: Default (50ms)"
        );
        assert_eq!(
            status.control_to_string(TimingControl::Duration),
            "Per-Letter Duration: Default (400ms)"
        );
    }

    #[test]
    fn summary_mentions_letters_and_total() {
        let status = ControlsStatus {
            letter_count: 7,
            total: Duration::from_millis(700),
            ..ControlsStatus::default()
        };
        assert!(status.summary_to_string().ends_with("- 7 letters, 700ms"));
    }
}
