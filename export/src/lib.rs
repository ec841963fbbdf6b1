//! Downloads crossword puzzles in the binary `.puz` exchange format and
//! exports them to printable PDFs.
//!
//! The pipeline is strictly sequential per puzzle identifier:
//! fetch → decode → map → render → write.

pub mod decode;
pub mod fetch;
pub mod pipeline;
pub mod puzzle;
pub mod render;
pub mod template;

mod errors;
pub use errors::ExportError;
