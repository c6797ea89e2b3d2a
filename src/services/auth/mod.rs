//! 인증 및 보안 서비스 모듈
//!
//! Yelp OAuth 2.0 로그인 플로우와 로그인 완료 후의 JWT 발급을 담당합니다.
//!
//! # Features
//!
//! - [`yelp_provider`] - Yelp OAuth 어댑터 (인가 URL, 코드 교환, 프로필 조회)
//! - [`yelp_auth_service`] - 로그인 시작과 콜백 처리 상태 머신
//! - [`token_service`] - 로그인 세션 JWT 생성/검증
//!
//! # Security
//!
//! - CSRF 방지 (OAuth State 매개변수, 1회용)
//! - HMAC-SHA256 토큰 서명
//! - 로그인 목적지는 로컬 경로만 허용

pub mod token_service;
pub mod yelp_provider;
pub mod yelp_auth_service;

pub use token_service::*;
pub use yelp_provider::*;
pub use yelp_auth_service::*;
