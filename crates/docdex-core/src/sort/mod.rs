/// Natural sort — orders filenames so embedded numbers compare by value
/// ("track2" before "track10") instead of character by character.
pub mod natural;

pub use natural::{natural_cmp, tokenize, Token};
