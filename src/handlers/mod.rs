//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (리다이렉트 왕복), 관리자 클라이언트
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 세션 로드/저장, 리다이렉트   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 로그인 플로우, 사용자 연동, 설정       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Redis / MongoDB / 메모리        ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`에서 서비스를 꺼내 쓰며,
//! 에러는 `AppError`로 반환해 `ResponseError` 구현이 JSON 응답으로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인 시작, 콜백, 로그인 페이지, 로그아웃, 현재 사용자
//! - **`settings`**: 관리자용 프로바이더 설정과 통합 목록

pub mod auth;
pub mod settings;
