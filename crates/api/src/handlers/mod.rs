pub mod article;
pub mod attachment;
pub mod dog;
pub mod faq;
pub mod health;
pub mod home;
pub mod litter;
pub mod media;
pub mod news;
