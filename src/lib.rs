//! 逐字母出现的打字机效果。
//!
//! 文本先按字素簇（而不是 `char`）切分，再组合成单词和空白，最后生成带有
//! 单词序号、字母序号的渲染树。原文会完整地保留一份给屏幕阅读器。
//!
//! ```
//! use typewriter::TypewriterByLetter;
//!
//! let root = TypewriterByLetter::new("Hi there").render();
//! let letters = root.find_all_with_attribute("data-letter-index");
//! assert_eq!(letters.len(), 7);
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod player;
pub mod prelude;
pub mod segmenter;
pub mod stagger;
pub mod timing;
pub mod tokenizer;
pub mod typewriter;

pub use error::{Error, Result};
pub use segmenter::{GraphemeSegment, GraphemeSegmenter, Locale, UnicodeGraphemeSegmenter};
pub use timing::{Timing, TimingValue};
pub use tokenizer::{segment, Token, TokenSequence, Word};
pub use typewriter::TypewriterByLetter;
