pub mod counter;
pub mod cs;
pub mod error;
pub mod logging;

pub use counter::{FreqConfig, WordCounter};
pub use cs::{hashing, string};
pub use error::{Error, Result};
