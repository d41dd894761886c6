pub mod error;
pub mod id;
pub mod manifest;
pub mod types;
