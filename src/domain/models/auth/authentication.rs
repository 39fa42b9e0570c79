//! # 세션 인증 컨텍스트 모델
//!
//! Redis 세션에 저장되는 인증 상태를 표현합니다.
//! Spring Security의 `Authentication` 객체와 같은 역할을 하며,
//! 소셜 로그인 클레임과 부여된 권한 목록을 함께 보관합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 요청의 인증 상태
///
/// 세션에 인증 정보가 없거나 역직렬화에 실패한 경우
/// [`Authentication::Anonymous`]로 취급합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Authentication {
    /// 소셜 로그인으로 인증된 상태
    Social(SocialAuthentication),
    /// 인증되지 않은 상태
    Anonymous,
}

impl Authentication {
    /// 소셜 인증 정보를 반환합니다. 익명이면 None 입니다.
    pub fn as_social(&self) -> Option<&SocialAuthentication> {
        match self {
            Authentication::Social(social) => Some(social),
            Authentication::Anonymous => None,
        }
    }

    /// 소셜 로그인으로 인증된 상태인지 확인합니다.
    pub fn is_social(&self) -> bool {
        matches!(self, Authentication::Social(_))
    }
}

/// 소셜 로그인 인증 정보
///
/// `details`에는 프로바이더가 반환한 사용자 클레임이 그대로 담기고,
/// `authorities`에는 `ROLE_KAKAO` 같은 권한 문자열이 담깁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAuthentication {
    /// 부여된 권한 목록
    pub authorities: Vec<String>,
    /// 프로바이더가 반환한 원본 사용자 클레임
    pub details: Map<String, Value>,
}

impl SocialAuthentication {
    /// 새 소셜 인증 정보를 생성합니다.
    pub fn new(authorities: Vec<String>, details: Map<String, Value>) -> Self {
        Self { authorities, details }
    }

    /// 지정된 권한을 보유하고 있는지 확인합니다.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_details() -> Map<String, Value> {
        let mut details = Map::new();
        details.insert("id".to_string(), json!("12345"));
        details.insert("kaccount_email".to_string(), json!("havi@gmail.com"));
        details
    }

    #[test]
    fn test_has_authority() {
        let auth = SocialAuthentication::new(vec!["ROLE_KAKAO".to_string()], sample_details());

        assert!(auth.has_authority("ROLE_KAKAO"));
        assert!(!auth.has_authority("ROLE_ADMIN"));
    }

    #[test]
    fn test_as_social() {
        let auth = Authentication::Social(SocialAuthentication::new(
            vec!["ROLE_KAKAO".to_string()],
            sample_details(),
        ));

        assert!(auth.is_social());
        assert!(auth.as_social().is_some());
        assert!(!Authentication::Anonymous.is_social());
        assert!(Authentication::Anonymous.as_social().is_none());
    }

    #[test]
    fn test_anonymous_round_trip() {
        let json = serde_json::to_string(&Authentication::Anonymous).unwrap();
        let parsed: Authentication = serde_json::from_str(&json).unwrap();

        assert!(!parsed.is_social());
    }
}
