pub use position::Position;
pub use size::Size;

mod position;
mod size;

pub type GraphemeIdx = usize;
pub type ByteIdx = usize;
pub type LetterIdx = usize;
pub type WordIdx = usize;
pub type ColIdx = usize;
pub type RowIdx = usize;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
