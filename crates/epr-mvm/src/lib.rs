pub mod client;
pub mod error;
pub mod parse;
mod retry;
pub mod types;

pub use client::{CustomFieldIds, MvmClient};
pub use error::MvmError;
