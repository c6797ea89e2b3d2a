//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 trait으로 정의되고 영구 백엔드(MongoDB/Redis)와 메모리 백엔드
//! 구현을 함께 제공합니다. `STORAGE_BACKEND=memory`이면 외부 서버 없이 실행됩니다.
//!
//! - [`users`] - 소셜 로그인 사용자 계정 (MongoDB)
//! - [`sessions`] - 로그인 시도 세션 (Redis)
//! - [`settings`] - 모듈 설정 (Redis)

pub mod users;
pub mod sessions;
pub mod settings;
