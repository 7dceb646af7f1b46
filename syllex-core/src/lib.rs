pub mod analysis;
pub mod consts;
pub mod error;
pub mod layout;
pub mod parse;

// Re-export commonly used types
pub use error::SyllexError;
pub use parse::{
    queue::ExtractQueue,
    tasks::{ExtractTask, SyllabusData, extract_fields},
};
