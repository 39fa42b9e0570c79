//! # 카카오 사용자 클레임 모델
//!
//! 카카오 사용자 정보 API(`/v1/user/me`)가 반환하는 클레임 맵에서
//! 사용자 식별에 필요한 필드를 추출합니다.
//!
//! ## 클레임 구조
//!
//! ```json
//! {
//!   "id": 12345,
//!   "kaccount_email": "havi@gmail.com",
//!   "properties": { "nickname": "havi" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 카카오 토큰 엔드포인트 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoTokenResponse {
    /// API 호출에 사용할 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (bearer)
    pub token_type: String,
    /// 갱신 토큰
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 액세스 토큰 만료 시간 (초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// 동의한 스코프 목록
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// 클레임 맵에서 추출한 카카오 사용자 정보
///
/// 필수 클레임이 하나라도 없으면 추출에 실패하며,
/// 이 경우 호출 측은 기존 인증 상태를 그대로 유지합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KakaoUserInfo {
    /// 카카오 프로필 닉네임
    pub name: String,
    /// 카카오 계정 이메일
    pub email: String,
    /// 카카오가 발급한 고유 식별자
    pub principal: String,
}

impl KakaoUserInfo {
    /// 클레임 맵에서 사용자 정보를 추출합니다.
    ///
    /// `properties.nickname`, `kaccount_email`, `id` 세 클레임이
    /// 모두 있어야 하며, `id`는 숫자와 문자열 모두 허용합니다.
    pub fn from_claims(details: &Map<String, Value>) -> Option<Self> {
        let name = details
            .get("properties")?
            .get("nickname")?
            .as_str()?
            .to_string();

        let email = details.get("kaccount_email")?.as_str()?.to_string();

        let principal = match details.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        Some(Self { name, email, principal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_claims() {
        let details = claims(json!({
            "id": "12345",
            "kaccount_email": "havi@gmail.com",
            "properties": { "nickname": "havi" }
        }));

        let info = KakaoUserInfo::from_claims(&details).unwrap();
        assert_eq!(info.name, "havi");
        assert_eq!(info.email, "havi@gmail.com");
        assert_eq!(info.principal, "12345");
    }

    #[test]
    fn test_from_claims_numeric_id() {
        let details = claims(json!({
            "id": 12345,
            "kaccount_email": "havi@gmail.com",
            "properties": { "nickname": "havi" }
        }));

        let info = KakaoUserInfo::from_claims(&details).unwrap();
        assert_eq!(info.principal, "12345");
    }

    #[test]
    fn test_from_claims_missing_email() {
        let details = claims(json!({
            "id": 12345,
            "properties": { "nickname": "havi" }
        }));

        assert!(KakaoUserInfo::from_claims(&details).is_none());
    }

    #[test]
    fn test_from_claims_missing_nickname() {
        let details = claims(json!({
            "id": 12345,
            "kaccount_email": "havi@gmail.com",
            "properties": {}
        }));

        assert!(KakaoUserInfo::from_claims(&details).is_none());
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{
            "access_token": "abc123",
            "token_type": "bearer",
            "refresh_token": "def456",
            "expires_in": 21599
        }"#;

        let token: KakaoTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.expires_in, Some(21599));
        assert!(token.scope.is_none());
    }
}
