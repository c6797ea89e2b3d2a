//! 모듈 설정 저장소

pub mod settings_repo;
