//! # Configuration Module
//!
//! 게시판 백엔드의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 페이지네이션 관련 설정
//! - [`auth_config`] - 카카오 OAuth, 세션, 소셜 프로바이더 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 카카오 OAuth
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! export KAKAO_REDIRECT_URI="https://yourdomain.com/api/v1/auth/kakao/callback"
//!
//! # 세션/보안
//! export OAUTH_STATE_SECRET="oauth-secret"
//! export SESSION_TTL_SECONDS="3600"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `PROFILE=dev` + `.env.dev` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
