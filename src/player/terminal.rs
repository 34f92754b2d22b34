use std::io::{stdout, Error, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute as CrosstermAttribute, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, Command};

use crate::prelude::*;

pub use attribute::Attribute;

mod attribute;

/// 表示终端。
/// 平台边缘情况处理：当 `usize` < `u16` 时：
/// 不管终端的实际大小如何，此表示最多只能覆盖 `usize::MAX` 或 `u16::MAX` 行/列，取较小值。
/// 每个返回的大小都会截断为 `min(usize::MAX, u16::MAX)`。
/// 如果尝试将光标设置到这些边界之外，也会被截断。
pub struct Terminal;

impl Terminal {
    // 恢复终端
    pub fn terminate() -> Result<(), Error> {
        Self::queue_command(LeaveAlternateScreen)?;
        Self::show_caret()?;
        Self::execute()?;
        disable_raw_mode()?;
        Ok(())
    }

    // 初始化：原始模式 + 备用屏幕
    pub fn initialize() -> Result<(), Error> {
        enable_raw_mode()?;
        Self::queue_command(EnterAlternateScreen)?;
        Self::clear_screen()?;
        Self::execute()?;
        Ok(())
    }

    pub fn clear_screen() -> Result<(), Error> {
        Self::queue_command(Clear(ClearType::All))?;
        Ok(())
    }

    pub fn clear_line() -> Result<(), Error> {
        Self::queue_command(Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    /// 移动终端光标至指定位置
    /// # Arguments
    /// * `Position` - the  `Position`to move the caret to. Will be truncated to `u16::MAX` if bigger.
    pub fn move_caret_to(position: Position) -> Result<(), Error> {
        // clippy::as_conversions: See doc above
        #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
        Self::queue_command(MoveTo(position.col as u16, position.row as u16))?;
        Ok(())
    }

    pub fn hide_caret() -> Result<(), Error> {
        Self::queue_command(Hide)?;
        Ok(())
    }

    pub fn show_caret() -> Result<(), Error> {
        Self::queue_command(Show)?;
        Ok(())
    }

    pub fn print(string: &str) -> Result<(), Error> {
        Self::queue_command(Print(string))?;
        Ok(())
    }

    /// 清空整行后打印
    pub fn print_row(row: RowIdx, line_text: &str) -> Result<(), Error> {
        Self::move_caret_to(Position { col: 0, row })?;
        Self::clear_line()?;
        Self::print(line_text)?;
        Ok(())
    }

    /// 以反色打印整行（状态栏）
    pub fn print_inverted_row(row: RowIdx, line_text: &str) -> Result<(), Error> {
        let width = Self::size()?.width;
        Self::move_caret_to(Position { col: 0, row })?;
        Self::clear_line()?;
        Self::queue_command(SetAttribute(CrosstermAttribute::Reverse))?;
        Self::print(&format!("{line_text:width$.width$}"))?;
        Self::queue_command(SetAttribute(CrosstermAttribute::Reset))?;
        Ok(())
    }

    /// 在指定位置打印，可选地带颜色属性
    pub fn print_at(
        position: Position,
        text: &str,
        attribute: Option<Attribute>,
    ) -> Result<(), Error> {
        Self::move_caret_to(position)?;
        match attribute {
            Some(attribute) => {
                if let Some(foreground) = attribute.foreground {
                    Self::queue_command(SetForegroundColor(foreground))?;
                }
                if let Some(background) = attribute.background {
                    Self::queue_command(SetBackgroundColor(background))?;
                }
                Self::print(text)?;
                Self::queue_command(ResetColor)?;
            }
            None => Self::print(text)?,
        }
        Ok(())
    }

    /// 获取终端size
    /// 对于 `usize` < `u16` 的系统：
    /// * 一个表示终端大小的 `Size`。任何坐标 `z` 如果 `usize` < `z` < `u16`，则会被截断为 `usize`。
    pub fn size() -> Result<Size, Error> {
        let (width_u16, height_u16) = size()?;
        // clippy::as_conversions: See doc above
        #[allow(clippy::as_conversions)]
        let height = height_u16 as usize;
        // clippy::as_conversions: See doc above
        #[allow(clippy::as_conversions)]
        let width = width_u16 as usize;
        Ok(Size { height, width })
    }

    // 刷新缓冲区
    pub fn execute() -> Result<(), Error> {
        stdout().flush()?;
        Ok(())
    }

    fn queue_command<T: Command>(command: T) -> Result<(), Error> {
        queue!(stdout(), command)?;
        Ok(())
    }
}
