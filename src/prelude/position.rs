use super::{ColIdx, RowIdx};

/// 终端中的位置（列、行）
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct Position {
    pub col: ColIdx,
    pub row: RowIdx,
}

impl Position {
    /// 向下偏移若干行
    pub const fn below(self, rows: RowIdx) -> Self {
        Self {
            col: self.col,
            row: self.row.saturating_add(rows),
        }
    }
}
