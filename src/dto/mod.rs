pub mod content_dto;
pub mod patch;
pub mod question_dto;
