//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod attachment_repo;
pub mod dog_repo;
pub mod faq_repo;
pub mod litter_repo;
pub mod news_repo;
pub mod slug_repo;

pub use article_repo::ArticleRepo;
pub use attachment_repo::AttachmentRepo;
pub use dog_repo::DogRepo;
pub use faq_repo::FaqRepo;
pub use litter_repo::LitterRepo;
pub use news_repo::NewsRepo;
