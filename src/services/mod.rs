pub mod content_service;
pub mod question_service;
pub mod seed_data;
