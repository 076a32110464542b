pub mod digest;
pub mod news_list;
pub mod notifier;
