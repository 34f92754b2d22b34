use std::io::Error;

use crate::prelude::*;

/// 终端 ui 组件。
///
/// 组件平时只在被标记后重绘；处于动画中时每一帧都重绘。
pub trait UIComponent {
    fn set_needs_redraw(&mut self, value: bool);

    fn needs_redraw(&self) -> bool;

    /// 是否有动画在进行
    fn is_animating(&self) -> bool {
        false
    }

    fn should_render(&self) -> bool {
        self.needs_redraw() || self.is_animating()
    }

    // 更新组件大小并标记为需要重绘
    fn resize(&mut self, size: Size) {
        self.set_size(size);
        self.set_needs_redraw(true);
    }

    fn set_size(&mut self, size: Size);

    fn render(&mut self, origin_row: RowIdx) {
        if !self.should_render() {
            return;
        }
        match self.draw(origin_row) {
            Ok(()) => self.set_needs_redraw(false),
            Err(err) => {
                #[cfg(debug_assertions)]
                {
                    panic!("Could not render component: {err:?}");
                }
                #[cfg(not(debug_assertions))]
                {
                    tracing::error!("Could not render component: {err:?}");
                }
            }
        }
    }

    fn draw(&mut self, origin_row: RowIdx) -> Result<(), Error>;
}
