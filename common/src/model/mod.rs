pub mod digest;
pub mod error;
pub mod news_item;
