pub mod content;
pub mod question;
