//! 공통 유틸리티 모듈
//!
//! - [`string_utils`] - 입력 정리, 목록 분리, 리다이렉트 목적지 검증

pub mod string_utils;
