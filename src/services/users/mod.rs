//! 사용자 계정 서비스
//!
//! - [`user_manager`] - 소셜 로그인 신원을 로컬 계정에 연결하는 협력자

pub mod user_manager;

pub use user_manager::*;
