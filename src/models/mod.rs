pub mod domain;
pub mod dto;
pub mod editor_session;
