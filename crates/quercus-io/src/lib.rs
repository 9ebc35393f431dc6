//! Training-table loading for the quercus pipeline.

mod error;
mod reader;

pub use error::IoError;
pub use reader::TableReader;
