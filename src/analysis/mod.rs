//! Reference classification and the unused-symbol decision

mod classify;
mod unused;

pub use classify::{Classification, ReferenceClassifier};
pub use unused::is_unused;
