//! # Domain Module
//!
//! 소셜 로그인 서비스의 도메인 계층입니다.
//!
//! - [`entities`] - MongoDB에 저장되는 사용자 엔티티
//! - [`models`] - OAuth 값 객체, 세션 데이터, 프로바이더 설정, 인증 정보
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
