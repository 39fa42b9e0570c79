//! 도메인 계층 모듈
//!
//! 게시판 백엔드의 도메인 모델을 정의합니다.
//!
//! # 모듈 구성
//!
//! - [`entities`] - MongoDB 컬렉션에 저장되는 영속 엔티티 (User, Board)
//! - [`models`] - 세션 인증 컨텍스트, 카카오 클레임 등 내부 모델
//! - [`dto`] - HTTP 요청/응답 DTO

pub mod dto;
pub mod entities;
pub mod models;
