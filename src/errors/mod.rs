//! 애플리케이션 전역 에러 처리 모듈
//!
//! `thiserror` 기반의 [`AppError`](errors::AppError)와
//! `actix_web::ResponseError` 자동 변환을 제공합니다.

pub mod errors;

pub use errors::*;
