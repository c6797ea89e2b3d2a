//! # Core Module
//!
//! 애플리케이션 조립에 필요한 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 소셜 네트워크 레지스트리
//! - 플러그인 ID를 OAuth 어댑터 생성 함수에 매핑
//! - 통합 목록에 노출할 네트워크 메타데이터
//!
//! ### [`state`] - 애플리케이션 상태
//! - 저장소, 서비스, 레지스트리를 한 곳에서 생성해 `web::Data`로 공유
//! - 저장소 백엔드(Redis + MongoDB / 메모리) 선택
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use social_auth_yelp::core::state::AppState;
//!
//! let state = web::Data::new(AppState::build().await?);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 핸들러는 전역 싱글톤 대신 요청의 `web::Data<AppState>`에서 서비스를 꺼내 씁니다.

pub mod registry;
pub mod state;

pub use registry::*;
pub use state::*;
