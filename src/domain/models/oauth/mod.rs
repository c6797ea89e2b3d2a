//! OAuth 2.0 도메인 모델
//!
//! - [`oauth_provider`] - 토큰, 인가 요청, 사용자 연동 데이터
//! - [`yelp_user`] - Yelp 리소스 소유자 프로필
//! - [`identity`] - 콜백 처리 결과로 만들어지는 정규화된 신원

pub mod oauth_provider;
pub mod yelp_user;
pub mod identity;

pub use oauth_provider::*;
pub use yelp_user::*;
pub use identity::*;
