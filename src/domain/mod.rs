pub mod evaluate;
pub mod filter;
pub mod gallery;
pub mod property;
pub mod query;
