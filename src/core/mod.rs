pub mod lines;
pub mod prepender;

pub use crate::domain::model::{FileOutcome, InsertConfig, RunReport};
pub use crate::domain::ports::{ConfigProvider, FileStore};
pub use crate::utils::error::Result;
