//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 기능별 구조체의 연관 함수로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 사이트 URL, 저장소, 외부 HTTP 클라이언트 설정
//! - [`auth_config`] - Yelp 엔드포인트, JWT, 세션, 관리자 설정
//!
//! 프로바이더 자격 증명(client id/secret, scopes, api calls)은 환경 변수가 아니라
//! 설정 저장소([`crate::repositories::settings`])에 보관됩니다.
//! 환경 변수는 저장소가 비어 있을 때의 초기값으로만 사용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{SiteConfig, SessionConfig, HttpClientConfig};
//!
//! let redirect_uri = format!("{}/user/login/yelp/callback", SiteConfig::base_url());
//! let ttl = SessionConfig::ttl_seconds();
//! let http = HttpClientConfig::from_env();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
