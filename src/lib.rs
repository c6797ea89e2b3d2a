//! Yelp 소셜 로그인 서비스
//!
//! Yelp OAuth 2.0 Authorization Code 플로우로 사용자를 인증하고
//! 로컬 계정에 연결하는 Actix-web 서비스입니다.
//!
//! # Features
//!
//! - **로그인 플로우**: 1회용 anti-forgery state, 코드 교환, 프로필 조회
//! - **추가 데이터 수집**: 신규 사용자에 한해 설정된 API를 순서대로 호출
//! - **계정 연동**: 소셜 신원을 로컬 사용자에 연결하고 JWT 쿠키 발급
//! - **관리자 설정**: 프로바이더 자격 증명, scope, 추가 API 목록
//! - **MongoDB**: 사용자 계정 저장
//! - **Redis**: 로그인 시도 세션과 프로바이더 설정 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /user/login/yelp, /user/login/yelp/callback, /admin/...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 세션 로드/저장, 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인 상태 머신, OAuth 어댑터, 사용자 연동
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 세션, 설정, 사용자 저장소
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_yelp::core::state::AppState;
//! use social_auth_yelp::routes::configure_all_routes;
//!
//! let state = web::Data::new(AppState::build().await?);
//! let app = App::new().app_data(state).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod testing;
