//! Collects image files from several source folders into one flat
//! destination, renaming them `<folder>_<NNNN>.<ext>` in modification-time order.

pub mod collector;
pub mod error;
pub mod naming;
pub mod scanner;
pub mod sequence;
pub mod summary;
pub mod transfer;

pub use collector::{run, run_with_progress, Aborted, Options};
pub use error::{CollectError, CopyError};
pub use summary::{Summary, SummaryReport};
