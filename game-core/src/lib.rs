pub mod evaluation;
pub mod stores;
pub mod tracker;

// Re-export main components
pub use evaluation::*;
pub use stores::*;
pub use tracker::*;
