//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 로그인 플로우, 사용자 연동, 세션, 프로바이더 설정을 담당합니다.
//! 각 서비스는 [`crate::core::state::AppState`]에서 `Arc`로 공유됩니다.
//!
//! # Features
//!
//! - Yelp OAuth 2.0 로그인 시작/콜백 처리
//! - 소셜 신원과 로컬 계정 연결, JWT 발급
//! - 로그인 시도 세션 저장
//! - 프로바이더 자격 증명 설정
//!
//! # Examples
//!
//! ```rust,ignore
//! let mut session = state.sessions.load(&req).await?;
//! let url = state.yelp_auth.begin_login(session.data_mut(), None).await;
//! ```

pub mod users;
pub mod auth;
pub mod sessions;
pub mod settings;
