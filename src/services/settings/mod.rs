//! 모듈 설정 서비스

pub mod settings_service;

pub use settings_service::*;
