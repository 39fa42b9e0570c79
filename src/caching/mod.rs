//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 분산 캐시 지원과 JSON 기반 객체 직렬화,
//! 그리고 Redis 기반 HTTP 세션 저장소를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 연결 풀링
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 및 키 삭제
//! - `SESSION_ID` 쿠키와 매핑되는 세션 저장소
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//! use crate::caching::session::SessionService;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:havi@gmail.com", &user, 3600).await?;
//!
//! let sessions = SessionService::instance();
//! sessions.store_user(&session_id, &user).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! SESSION_TTL_SECONDS=3600
//! ```

pub mod redis;
pub mod session;
