//! Grouped statistics over tagged tweet records.
//!
//! Every reduction here is read-only over a slice of [`TaggedRecord`]s and
//! gives the same result for any ordering of its input. The summary report
//! bundles them all and is written as JSON alongside the exported table.
//!
//! [`TaggedRecord`]: crate::records::TaggedRecord

pub mod aggregate;
pub mod summary;
pub mod types;
pub mod utility;
pub mod welch;
