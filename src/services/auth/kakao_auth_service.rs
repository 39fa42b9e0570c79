//! # 카카오 OAuth 2.0 인증 서비스
//!
//! 카카오 OAuth 2.0 프로토콜을 통한 소셜 로그인 기능을 제공합니다.
//! RFC 6749 Authorization Code Grant 플로우를 따르며,
//! Spring Security OAuth2 Client와 유사한 인증 플로우를 구현합니다.
//!
//! ## 사용하는 카카오 API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://kauth.kakao.com/oauth/authorize` | GET |
//! | **Token Exchange** | `https://kauth.kakao.com/oauth/token` | POST |
//! | **User Info** | `https://kapi.kakao.com/v1/user/me` | GET |
//!
//! ## CSRF 방지 (State Parameter)
//!
//! ```text
//! State Generation:
//! timestamp:secret → hash → state_value → Redis 임시 저장 (TTL)
//!
//! State Verification:
//! received_state → Redis 조회 → 일회성 삭제
//! ```
//!
//! state 값은 Redis에 만료 시간과 함께 저장되고,
//! 콜백 검증 시 삭제되어 재사용이 불가능합니다.

use std::sync::Arc;
use singleton_macro::service;

use crate::{
    caching::redis::RedisClient,
    config::{KakaoOAuthConfig, OAuthConfig, SocialType},
    domain::dto::auth::response::OAuthLoginUrlResponse,
    domain::models::auth::authentication::SocialAuthentication,
    domain::models::oauth::kakao::kakao_user::KakaoTokenResponse,
    errors::errors::AppError,
};

/// 카카오 OAuth 2.0 인증 서비스
///
/// ## 주요 책임
///
/// 1. **로그인 URL 생성**: 카카오 인가 페이지로의 리다이렉트 URL 생성
/// 2. **State 관리**: CSRF 방지용 state 발급과 일회성 검증
/// 3. **토큰 교환**: Authorization Code를 Access Token으로 교환
/// 4. **클레임 조회**: 카카오 사용자 정보 API 호출
///
/// 인증 결과는 [`SocialAuthentication`]으로 반환되며,
/// 사용자 엔티티 생성은 신원 해석 단계에서 수행됩니다.
///
/// ## 설정 의존성
///
/// ```bash
/// KAKAO_CLIENT_ID=your-rest-api-key
/// KAKAO_CLIENT_SECRET=optional-client-secret
/// KAKAO_REDIRECT_URI=http://localhost:8080/api/v1/auth/kakao/callback
/// OAUTH_STATE_SECRET=your-state-secret
/// ```
#[service]
pub struct KakaoAuthService {
    /// state 임시 저장용 Redis 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl KakaoAuthService {
    /// 카카오 로그인 URL을 생성합니다.
    ///
    /// 발급된 state는 Redis에 만료 시간과 함께 저장됩니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://kauth.kakao.com/oauth/authorize?
    ///   client_id=REST_API_KEY&
    ///   redirect_uri=CALLBACK_URL&
    ///   response_type=code&
    ///   state=CSRF_PROTECTION_VALUE
    /// ```
    pub async fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = Self::generate_oauth_state()?;

        // 콜백 검증을 위해 state를 임시 저장
        self.redis
            .set_with_expiry(
                &Self::state_key(&state),
                &true,
                (OAuthConfig::state_timeout_minutes() * 60) as usize,
            )
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        let params = [
            ("client_id", KakaoOAuthConfig::client_id()),
            ("redirect_uri", KakaoOAuthConfig::redirect_uri()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", KakaoOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code로 카카오 인증을 완료합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. **State 검증**: Redis에 저장된 state 확인 후 삭제 (일회성)
    /// 2. **토큰 교환**: Authorization Code → Access Token
    /// 3. **클레임 조회**: 카카오 사용자 정보 API 호출
    /// 4. **인증 정보 구성**: `ROLE_KAKAO` 권한과 원본 클레임 결합
    ///
    /// # 반환값
    ///
    /// * `Ok(SocialAuthentication)` - 권한과 클레임을 담은 인증 정보
    /// * `Err(AppError::AuthenticationError)` - state 검증 실패
    /// * `Err(AppError::ExternalServiceError)` - 카카오 API 통신 오류
    pub async fn authenticate_with_code(&self, auth_code: &str, state: &str) -> Result<SocialAuthentication, AppError> {
        // 1. State 검증
        self.verify_oauth_state(state).await?;

        // 2. Authorization code로 액세스 토큰 교환
        let token_response = self.exchange_code_for_token(auth_code).await?;

        // 3. 액세스 토큰으로 사용자 클레임 조회
        let details = self.get_user_info(&token_response.access_token).await?;

        // 4. 카카오 역할과 원본 클레임으로 인증 정보 구성
        Ok(SocialAuthentication::new(
            vec![SocialType::Kakao.role_type().to_string()],
            details,
        ))
    }

    /// Authorization Code를 Access Token으로 교환합니다.
    ///
    /// 카카오는 client_secret 사용이 선택 사항이므로
    /// 설정된 경우에만 요청에 포함합니다.
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<KakaoTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let client_id = KakaoOAuthConfig::client_id();
        let redirect_uri = KakaoOAuthConfig::redirect_uri();

        let mut params = vec![
            ("grant_type", "authorization_code".to_string()),
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("code", auth_code.to_string()),
        ];

        if let Some(secret) = KakaoOAuthConfig::client_secret() {
            params.push(("client_secret", secret));
        }

        let response = client
            .post(KakaoOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "카카오 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<KakaoTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 카카오 사용자 클레임을 조회합니다.
    ///
    /// # API 호출 형식
    ///
    /// ```text
    /// GET https://kapi.kakao.com/v1/user/me
    /// Authorization: Bearer ACCESS_TOKEN
    /// ```
    ///
    /// 응답 클레임은 가공 없이 그대로 반환하여
    /// 신원 해석 단계에서 필요한 필드를 추출하게 합니다.
    async fn get_user_info(&self, access_token: &str) -> Result<serde_json::Map<String, serde_json::Value>, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(KakaoOAuthConfig::user_info_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "카카오 사용자 정보 조회 실패: {}", error_text
            )));
        }

        let claims = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 파싱 실패: {}", e)))?;

        match claims {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(AppError::ExternalServiceError(
                "카카오 사용자 정보가 객체 형태가 아닙니다".to_string(),
            )),
        }
    }

    /// OAuth state 매개변수를 생성합니다.
    ///
    /// # State 생성 알고리즘
    ///
    /// ```text
    /// 1. 현재 타임스탬프 획득
    /// 2. 시크릿과 결합: "timestamp:secret"
    /// 3. 해시 함수 적용 (DefaultHasher)
    /// 4. 16진수 문자열로 변환
    /// ```
    pub(crate) fn generate_oauth_state() -> Result<String, AppError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
            .as_nanos();

        let state_data = format!("{}:{}", timestamp, OAuthConfig::state_secret());

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        state_data.hash(&mut hasher);

        Ok(format!("{:x}", hasher.finish()))
    }

    /// 콜백에서 받은 state를 검증합니다.
    ///
    /// Redis에 저장된 state만 유효하며, 검증 즉시 삭제되어
    /// 같은 state를 두 번 사용할 수 없습니다.
    async fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        if state.is_empty() {
            return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string()));
        }

        let key = Self::state_key(state);

        let stored = self.redis
            .get::<bool>(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        if stored.is_none() {
            return Err(AppError::AuthenticationError("만료되었거나 알 수 없는 OAuth state".to_string()));
        }

        // 일회성 보장. 삭제가 실패하면 TTL이 끝날 때까지 재사용이 가능해집니다
        if let Err(e) = self.redis.del(&key).await {
            log::warn!("OAuth state 삭제 실패 ({}): {}", key, e);
        }

        Ok(())
    }

    fn state_key(state: &str) -> String {
        format!("oauth:state:{}", state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_state_is_hex() {
        let state = KakaoAuthService::generate_oauth_state().unwrap();

        assert!(!state.is_empty());
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_states_differ() {
        let first = KakaoAuthService::generate_oauth_state().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = KakaoAuthService::generate_oauth_state().unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_state_key_format() {
        assert_eq!(KakaoAuthService::state_key("abc123"), "oauth:state:abc123");
    }
}
