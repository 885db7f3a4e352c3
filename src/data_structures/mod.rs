pub mod grid;
pub mod memo;
pub mod priority_queue;
pub mod range;

pub use grid::Grid;
pub use memo::{memoize, memoize2, MemoCache};
pub use priority_queue::MinQueue;
pub use range::{Range, RangeSplit};
