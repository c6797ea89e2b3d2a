//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 키-값 저장과 JSON 기반 객체 직렬화를 제공합니다.
//! 로그인 세션(`session:{sid}`)과 모듈 설정(`config:social_auth_yelp.settings`)이
//! 이 클라이언트를 통해 저장됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
