//! # Domain Models
//!
//! 영속화되지 않는 값 객체와 요청 범위 모델을 정의합니다.
//!
//! - [`oauth`] - 토큰, 인가 요청, Yelp 프로필, 정규화된 신원
//! - [`session`] - 로그인 시도 세션 데이터와 상태 메시지
//! - [`settings`] - 프로바이더 클라이언트 설정
//! - [`auth`] - 인증 미들웨어가 주입하는 사용자 정보
//! - [`token`] - JWT 클레임

pub mod oauth;
pub mod session;
pub mod settings;
pub mod auth;
pub mod token;
