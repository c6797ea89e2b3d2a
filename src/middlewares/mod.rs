//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 로그인 완료 시 발급한 JWT 검증 (Bearer 헤더 또는 `auth_token` 쿠키)
//! - 사용자 정보를 request extension에 저장
//! - 필수 인증과 역할 검사
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/admin")
//!         .wrap(AuthMiddleware::required_with_role("admin"))
//!         .service(handlers::settings::get_settings)
//! );
//! ```
//!
//! 토큰 검증에는 `web::Data<AppState>`의 [`crate::services::auth::TokenService`]를 사용하므로
//! 앱에 상태가 등록되어 있어야 합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
