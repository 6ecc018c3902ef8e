//! Domain logic for the kennel site.
//!
//! Everything here is free of database access so the `db` and `api` crates
//! can share it and it can be unit tested in isolation.

pub mod age;
pub mod attachments;
pub mod catalog;
pub mod content;
pub mod error;
pub mod imaging;
pub mod listing;
pub mod slugs;
pub mod storage;
pub mod types;
