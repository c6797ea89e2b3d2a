//! 응답 DTO (서버 → 클라이언트)

pub mod auth_response;
pub mod settings_response;

pub use auth_response::*;
pub use settings_response::*;
