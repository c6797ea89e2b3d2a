//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 값 객체 및 요청 범위 모델
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;
