pub mod conversation;
pub mod faq_entry;
