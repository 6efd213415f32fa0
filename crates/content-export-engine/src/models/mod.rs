pub mod block;
pub mod document;

pub use block::Block;
pub use document::Document;
