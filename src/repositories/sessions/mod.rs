//! 로그인 시도 세션 저장소

pub mod session_repo;
