//! # Redis 세션 스토어
//!
//! 세션 쿠키(`SESSION_ID`)에 대응하는 서버 측 세션 상태를 Redis에 보관합니다.
//! 세션마다 두 개의 키를 사용합니다.
//!
//! - `session:{id}:auth` - 인증 컨텍스트 ([`Authentication`])
//! - `session:{id}:user` - 해석이 끝난 사용자 캐시 ([`User`])
//!
//! 모든 읽기/쓰기에서 TTL을 갱신하여 활동 중인 세션이
//! 만료되지 않도록 합니다.

use std::sync::Arc;
use singleton_macro::service;

use crate::{
    caching::redis::RedisClient,
    config::SessionConfig,
    domain::entities::users::user::User,
    domain::models::auth::authentication::Authentication,
    errors::errors::AppError,
};

/// 세션 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "SESSION_ID";

/// 사용자 캐시 키를 생성합니다.
pub fn user_key(session_id: &str) -> String {
    format!("session:{}:user", session_id)
}

/// 인증 컨텍스트 키를 생성합니다.
pub fn auth_key(session_id: &str) -> String {
    format!("session:{}:auth", session_id)
}

/// Redis 기반 세션 스토어 서비스
///
/// Spring Session의 `RedisSessionRepository`와 같은 역할을 합니다.
#[service]
pub struct SessionService {
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl SessionService {
    /// 세션에 캐시된 사용자를 조회합니다.
    ///
    /// 값이 있으면 세션 TTL을 갱신합니다.
    pub async fn load_user(&self, session_id: &str) -> Result<Option<User>, AppError> {
        let key = user_key(session_id);

        let user = self.redis
            .get::<User>(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        if user.is_some() {
            let _ = self.redis.expire(&key, SessionConfig::ttl_seconds() as i64).await;
        }

        Ok(user)
    }

    /// 해석이 끝난 사용자를 세션에 캐시합니다.
    pub async fn store_user(&self, session_id: &str, user: &User) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&user_key(session_id), user, SessionConfig::ttl_seconds() as usize)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 세션의 인증 컨텍스트를 조회합니다.
    ///
    /// 값이 있으면 세션 TTL을 갱신합니다.
    pub async fn load_authentication(&self, session_id: &str) -> Result<Option<Authentication>, AppError> {
        let key = auth_key(session_id);

        let auth = self.redis
            .get::<Authentication>(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        if auth.is_some() {
            let _ = self.redis.expire(&key, SessionConfig::ttl_seconds() as i64).await;
        }

        Ok(auth)
    }

    /// 인증 컨텍스트를 세션에 저장합니다.
    pub async fn store_authentication(&self, session_id: &str, auth: &Authentication) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&auth_key(session_id), auth, SessionConfig::ttl_seconds() as usize)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 세션의 모든 키를 삭제합니다.
    ///
    /// 로그아웃 시 호출됩니다.
    pub async fn clear(&self, session_id: &str) -> Result<(), AppError> {
        self.redis
            .del_multiple(&[user_key(session_id), auth_key(session_id)])
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_format() {
        assert_eq!(user_key("abc-123"), "session:abc-123:user");
    }

    #[test]
    fn test_auth_key_format() {
        assert_eq!(auth_key("abc-123"), "session:abc-123:auth");
    }

    #[test]
    fn test_keys_are_distinct() {
        assert_ne!(user_key("abc"), auth_key("abc"));
    }
}
