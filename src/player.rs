use std::panic::{set_hook, take_hook};
use std::time::Duration;

use crossterm::event::{poll, read, Event};

use crate::error::Result;
use crate::prelude::*;
use crate::segmenter::Locale;
use crate::timing::Timing;

use command::{PlayerCommand, TimingControl};
use terminal::Terminal;
use uicomponent::UIComponent;
use uicomponents::{ControlsBar, ControlsStatus, Stage};

pub mod frame;

mod command;
mod terminal;
mod uicomponent;
mod uicomponents;

// 动画进行中的帧间隔（约 60 fps）
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
// 空闲时的轮询间隔，用来让过期消息得以清除
const IDLE_INTERVAL: Duration = Duration::from_millis(250);
// 舞台上方留一行空白
const STAGE_MARGIN_TOP: usize = 1;

/// 终端里的打字机演示：播放动画，并可以调节时间参数、重播
pub struct Player {
    should_quit: bool,
    stage: Stage,
    controls_bar: ControlsBar,
    timing: Timing,
    selected: TimingControl,
    terminal_size: Size,
}

impl Player {
    /// 初始化终端并创建播放器
    pub fn new(text: &str, locale: Locale, timing: Timing) -> Result<Self> {
        // 崩溃时也要恢复终端
        let current_hook = take_hook();
        set_hook(Box::new(move |panic_info| {
            let _ = Terminal::terminate();
            current_hook(panic_info);
        }));
        Terminal::initialize()?;

        let mut player = Self {
            should_quit: false,
            stage: Stage::new(text, locale, &timing),
            controls_bar: ControlsBar::default(),
            timing,
            selected: TimingControl::default(),
            terminal_size: Size::default(),
        };
        let size = Terminal::size().unwrap_or_default();
        player.handle_resize_command(size);
        player.refresh_status();

        Ok(player)
    }

    /// 主循环
    pub fn run(&mut self) {
        loop {
            self.refresh_screen();
            if self.should_quit {
                break;
            }
            // 动画中按帧轮询，否则放慢轮询
            let timeout = if self.stage.is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };
            match poll(timeout) {
                Ok(true) => match read() {
                    Ok(event) => self.evaluate_event(event),
                    Err(err) => {
                        #[cfg(debug_assertions)]
                        {
                            panic!("Could not read event: {err:?}");
                        }
                        #[cfg(not(debug_assertions))]
                        {
                            tracing::error!("Could not read event: {err:?}");
                        }
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    tracing::error!("Could not poll events: {err:?}");
                    self.should_quit = true;
                }
            }
        }
    }

    fn evaluate_event(&mut self, event: Event) {
        match PlayerCommand::try_from(event) {
            Ok(command) => self.process_command(command),
            Err(err) => tracing::trace!("{err}"),
        }
    }

    fn process_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Quit => self.should_quit = true,
            PlayerCommand::Replay => self.stage.replay(),
            PlayerCommand::SelectNext => self.selected = self.selected.next(),
            PlayerCommand::SelectPrevious => self.selected = self.selected.previous(),
            PlayerCommand::Adjust(increase) => {
                let value = self.selected.adjust(&mut self.timing, increase);
                tracing::debug!(control = self.selected.label(), %value, "adjusted timing");
                self.stage.set_timing(&self.timing);
            }
            PlayerCommand::ResetTiming => {
                self.timing = Timing::default();
                self.stage.set_timing(&self.timing);
                self.controls_bar.update_message("Reset to defaults");
            }
            PlayerCommand::Resize(size) => self.handle_resize_command(size),
        }
        self.refresh_status();
    }

    // 舞台占据除控制区以外的所有行
    fn handle_resize_command(&mut self, size: Size) {
        self.terminal_size = size;
        let stage_height = size
            .height
            .saturating_sub(ControlsBar::HEIGHT)
            .saturating_sub(STAGE_MARGIN_TOP);
        self.stage.resize(Size {
            height: stage_height,
            width: size.width,
        });
        self.controls_bar.resize(Size {
            height: ControlsBar::HEIGHT,
            width: size.width,
        });
    }

    fn refresh_status(&mut self) {
        self.controls_bar.update_status(ControlsStatus {
            timing: self.timing.clone(),
            selected: self.selected,
            letter_count: self.stage.letter_count(),
            total: self.stage.total_duration(),
        });
    }

    fn refresh_screen(&mut self) {
        if self.terminal_size.height == 0 || self.terminal_size.width == 0 {
            return;
        }
        let _ = Terminal::hide_caret();
        self.stage.render(STAGE_MARGIN_TOP);
        let controls_origin = self.terminal_size.height.saturating_sub(ControlsBar::HEIGHT);
        self.controls_bar.render(controls_origin);
        let _ = Terminal::execute();
    }
}

impl Drop for Player {
    /// 恢复终端
    fn drop(&mut self) {
        let _ = Terminal::terminate();
    }
}
