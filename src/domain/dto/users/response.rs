//! # 사용자 응답 DTO

use serde::Serialize;

use crate::config::SocialType;
use crate::domain::entities::users::user::User;

/// 현재 로그인한 사용자 정보 응답
///
/// 비밀번호는 응답에 포함되지 않습니다.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// 사용자 ID (16진수 문자열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 사용자 표시 이름
    pub name: String,
    /// 이메일 주소
    pub email: String,
    /// 가입 경로가 된 소셜 프로바이더
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_type: Option<SocialType>,
    /// 계정 생성 시각 (RFC 3339)
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string(),
            name: user.name,
            email: user.email,
            social_type: user.social_type,
            created_at: user
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password() {
        let user = User::new_local(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "test".to_string(),
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "havi");
        assert_eq!(json["email"], "havi@gmail.com");
    }

    #[test]
    fn test_user_response_hex_id() {
        let mut user = User::new_local(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "test".to_string(),
        );
        let oid = mongodb::bson::oid::ObjectId::new();
        user.id = Some(oid);

        let response = UserResponse::from(user);
        assert_eq!(response.id, Some(oid.to_hex()));
    }

    #[test]
    fn test_user_response_social_type() {
        let user = User::new_social(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "12345".to_string(),
            SocialType::Kakao,
        );

        let response = UserResponse::from(user);
        assert_eq!(response.social_type, Some(SocialType::Kakao));
    }
}
