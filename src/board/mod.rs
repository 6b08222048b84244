//! The fixed 100-square board: squares, the ladder/snake jump table, and
//! step paths for animating token movement.

pub mod jumps;
pub mod path;
pub mod square;

pub use jumps::{Jump, JumpKind, JumpTable, LADDERS, SNAKES};
pub use path::MovePath;
pub use square::Square;
