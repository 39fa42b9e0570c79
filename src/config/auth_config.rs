//! # Authentication Configuration Module
//!
//! 카카오 OAuth 프로바이더와 세션 관리 등 인증 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 OAuth2 클라이언트 설정과 유사한 역할을 수행합니다.
//!
//! ## Spring Security 와의 비교
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `@EnableOAuth2Sso` | `KakaoOAuthConfig` |
//! | `oauth2.client.registration.kakao` | `KakaoOAuthConfig` |
//! | `server.session.timeout` | `SessionConfig::ttl_seconds()` |
//! | `GrantedAuthority` | `SocialType::role_type()` |
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! export KAKAO_REDIRECT_URI="http://localhost:8080/api/v1/auth/kakao/callback"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export SESSION_TTL_SECONDS="3600"
//! ```

use std::env;

/// 카카오 OAuth 2.0 설정을 관리하는 구조체
///
/// 카카오 개발자 콘솔에서 발급받은 REST API 키와 엔드포인트 정보를 관리합니다.
/// Spring Security의 `spring.security.oauth2.client.registration.kakao` 설정과
/// 동일한 역할을 합니다.
///
/// ## 카카오 개발자 콘솔 설정 가이드
///
/// 1. [Kakao Developers](https://developers.kakao.com/) 접속
/// 2. 애플리케이션 생성 후 REST API 키 확인
/// 3. 카카오 로그인 활성화 및 Redirect URI 등록
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// 카카오 REST API 키(Client ID)를 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("KAKAO_CLIENT_ID")
            .expect("KAKAO_CLIENT_ID must be set")
    }

    /// 카카오 Client Secret을 반환합니다.
    ///
    /// 카카오는 Client Secret 사용이 선택 사항이므로 설정되지 않은 경우
    /// `None`을 반환하며, 토큰 교환 요청에서 생략됩니다.
    ///
    /// 이 값은 절대 클라이언트 사이드에 노출되어서는 안 됩니다.
    pub fn client_secret() -> Option<String> {
        env::var("KAKAO_CLIENT_SECRET").ok()
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// 카카오 개발자 콘솔의 Redirect URI 목록에 등록되어 있어야 합니다.
    ///
    /// - 개발: `http://localhost:8080/api/v1/auth/kakao/callback`
    /// - 프로덕션: `https://yourdomain.com/api/v1/auth/kakao/callback`
    ///
    /// # Panics
    ///
    /// `KAKAO_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("KAKAO_REDIRECT_URI")
            .expect("KAKAO_REDIRECT_URI must be set")
    }

    /// 카카오 인증 서버의 인가 엔드포인트 URI를 반환합니다.
    ///
    /// 사용자를 카카오 로그인 페이지로 리디렉션할 때 사용되는 URL 입니다.
    /// 일반적으로 변경할 필요가 없으므로 기본값을 제공합니다.
    ///
    /// # 기본값
    ///
    /// `https://kauth.kakao.com/oauth/authorize`
    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    /// 카카오 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// 인가 코드를 액세스 토큰으로 교환할 때 사용되는 URL 입니다.
    ///
    /// # 기본값
    ///
    /// `https://kauth.kakao.com/oauth/token`
    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    /// 카카오 사용자 정보 조회 엔드포인트 URI를 반환합니다.
    ///
    /// 액세스 토큰으로 사용자 클레임 맵을 조회할 때 사용되는 URL 입니다.
    ///
    /// # 기본값
    ///
    /// `https://kapi.kakao.com/v1/user/me`
    pub fn user_info_uri() -> String {
        env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v1/user/me".to_string())
    }
}

/// OAuth 공통 보안 설정을 관리하는 구조체
///
/// 모든 OAuth 프로바이더에 공통으로 적용되는 보안 설정을 관리합니다.
/// CSRF 공격 방지를 위한 state 매개변수 생성/검증에 사용됩니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 검증용 비밀키를 반환합니다.
    ///
    /// 1. 인증 요청 시 랜덤 state 값 생성
    /// 2. 이 비밀키를 사용하여 state 값 서명
    /// 3. OAuth 콜백에서 state 값 검증
    /// 4. 서명이 일치하지 않으면 요청 거부
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "oauth-state-secret"을 사용하지만,
    /// 프로덕션에서는 경고 로그가 출력됩니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }

    /// OAuth state 값의 유효 기간을 분 단위로 반환합니다.
    ///
    /// 사용자가 OAuth 인증을 시작한 후 콜백 완료까지 걸리는
    /// 최대 시간을 제한합니다.
    ///
    /// # 기본값
    ///
    /// 10분
    pub fn state_timeout_minutes() -> i64 {
        env::var("OAUTH_STATE_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// HTTP 세션 설정을 관리하는 구조체
///
/// Redis에 저장되는 세션 키의 TTL을 관리합니다.
/// Spring의 `server.servlet.session.timeout`과 동일한 역할입니다.
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 키의 TTL을 초 단위로 반환합니다.
    ///
    /// 세션을 읽거나 쓸 때마다 TTL이 갱신됩니다.
    ///
    /// # 기본값
    ///
    /// 3600초 (1시간)
    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600)
    }
}

/// 지원하는 소셜 로그인 공급자를 나타내는 열거형
///
/// Spring Security의 OAuth2 Client Registration과 유사한 개념으로,
/// 소셜 인증 방식을 추상화하여 통일된 인터페이스를 제공합니다.
///
/// ## 확장성
///
/// 새로운 소셜 프로바이더 추가 시 이 열거형에 변형을 추가하고
/// `from_authority` / `role_type` 매핑을 확장하면 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialType {
    /// 카카오 OAuth 2.0 인증
    ///
    /// 카카오 계정을 통한 소셜 로그인입니다.
    /// 현재 유일하게 지원되는 프로바이더입니다.
    Kakao,
}

impl SocialType {
    /// 인증 컨텍스트의 권한 태그에서 SocialType을 찾습니다.
    ///
    /// 알 수 없는 권한 태그는 `None`을 반환하며, 호출자는 이를
    /// 조용히 건너뜁니다 (지원하지 않는 프로바이더).
    pub fn from_authority(authority: &str) -> Option<Self> {
        match authority {
            "ROLE_KAKAO" => Some(SocialType::Kakao),
            _ => None,
        }
    }

    /// 이 프로바이더로 인증된 사용자에게 부여되는 권한 태그를 반환합니다.
    pub fn role_type(&self) -> &'static str {
        match self {
            SocialType::Kakao => "ROLE_KAKAO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_type_from_authority() {
        assert_eq!(
            SocialType::from_authority("ROLE_KAKAO"),
            Some(SocialType::Kakao)
        );
        assert_eq!(SocialType::from_authority("ROLE_GOOGLE"), None);
        assert_eq!(SocialType::from_authority("ROLE_USER"), None);
    }

    #[test]
    fn test_social_type_role_type() {
        assert_eq!(SocialType::Kakao.role_type(), "ROLE_KAKAO");
    }

    #[test]
    fn test_social_type_serialization() {
        let social_type = SocialType::Kakao;
        let json = serde_json::to_string(&social_type).unwrap();
        assert_eq!(json, "\"kakao\"");

        let deserialized: SocialType = serde_json::from_str(&json).unwrap();
        assert_eq!(social_type, deserialized);
    }
}
