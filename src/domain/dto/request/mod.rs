//! 요청 DTO (클라이언트 → 서버)

pub mod auth_request;
pub mod settings_request;

pub use auth_request::*;
pub use settings_request::*;
