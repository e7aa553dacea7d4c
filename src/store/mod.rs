pub mod error;
pub mod operations;
pub mod search;
