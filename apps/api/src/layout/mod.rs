// Fixed-height A4 pagination: the resume becomes typed blocks, blocks pack
// greedily into pages, and nothing is ever split mid-block.

pub mod handlers;
pub mod paginate;

pub use paginate::{paginate, Page, PageConfig};
