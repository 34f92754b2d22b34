use crossterm::style::Color;

use crate::stagger::Phase;

// 正在出现的字母从这个灰度渐变到白色
const ENTERING_FROM: u8 = 64;
const ENTERING_TO: u8 = 255;

/// 终端可以使用的属性
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attribute {
    // 前景字体颜色
    pub foreground: Option<Color>,
    // 背景颜色
    pub background: Option<Color>,
}

impl Attribute {
    /// 字母在某个阶段的颜色；完全显示后使用终端默认颜色
    pub fn for_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Entering(progress) => {
                let span = f64::from(ENTERING_TO - ENTERING_FROM);
                // clippy::as_conversions: progress 在 [0, 1) 内，结果不会超出 u8
                #[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let level = ENTERING_FROM.saturating_add((progress.clamp(0.0, 1.0) * span) as u8);
                Some(Self {
                    foreground: Some(Color::Rgb {
                        r: level,
                        g: level,
                        b: level,
                    }),
                    background: None,
                })
            }
            Phase::Hidden | Phase::Shown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_letters_fade_in() {
        let start = Attribute::for_phase(Phase::Entering(0.0)).unwrap();
        assert_eq!(
            start.foreground,
            Some(Color::Rgb { r: 64, g: 64, b: 64 })
        );
        let halfway = Attribute::for_phase(Phase::Entering(0.5)).unwrap();
        assert_eq!(
            halfway.foreground,
            Some(Color::Rgb { r: 159, g: 159, b: 159 })
        );
        assert_eq!(Attribute::for_phase(Phase::Shown), None);
        assert_eq!(Attribute::for_phase(Phase::Hidden), None);
    }
}
