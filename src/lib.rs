//! 커뮤니티 게시판 백엔드
//!
//! Rust 기반의 커뮤니티 게시판 서비스입니다.
//! 카카오 OAuth 2.0 소셜 로그인, Redis 세션 기반 인증,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **게시글 조회**: 페이지네이션 목록 조회, 단건 조회
//! - **카카오 로그인**: OAuth 2.0 Authorization Code 플로우
//! - **세션 인증**: Redis에 저장되는 `SESSION_ID` 쿠키 기반 세션
//! - **사용자 해석**: 세션 인증 컨텍스트를 사용자 엔티티로 자동 바인딩
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 게시글/사용자 데이터 영구 저장
//! - **Redis**: 세션 저장 및 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 세션 쿠키 → 사용자 해석
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use community_board_backend::services::boards::board_service::BoardService;
//! use community_board_backend::services::auth::kakao_auth_service::KakaoAuthService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let board_service = BoardService::instance();
//! let kakao_auth = KakaoAuthService::instance();
//!
//! // 게시글 목록 조회 및 로그인 URL 발급
//! let boards = board_service.find_board_list(1, 10).await?;
//! let login = kakao_auth.get_login_url().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
