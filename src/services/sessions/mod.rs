//! 로그인 시도 세션 서비스

pub mod session_service;

pub use session_service::*;
