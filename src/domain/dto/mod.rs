//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의합니다.
//!
//! ```text
//! dto/
//! ├── request/        # 요청 DTO (쿼리 문자열, 설정 폼)
//! └── response/       # 응답 DTO (로그인 페이지, 현재 사용자, 설정)
//! ```
//!
//! 요청 DTO는 `validator` derive로 입력 검증 규칙을 선언합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
