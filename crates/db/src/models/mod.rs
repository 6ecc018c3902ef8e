//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs where the admin edits the entity

pub mod article;
pub mod attachment;
pub mod dog;
pub mod faq;
pub mod litter;
pub mod news;
