//! # 사용자 엔티티 정의
//!
//! MongoDB `users` 컬렉션에 저장되는 사용자 도메인 모델입니다.
//! 카카오 소셜 로그인으로 가입한 사용자와 시드 데이터로 생성되는
//! 로컬 사용자를 하나의 문서 형태로 표현합니다.
//!
//! ## Spring Boot와의 비교
//!
//! | Spring Boot (JPA/MongoDB) | Rust (mongodb) |
//! |---------------------------|----------------|
//! | `@Document(collection = "users")` | 리포지토리의 컬렉션 바인딩 |
//! | `@Id String id` | `#[serde(rename = "_id")] Option<ObjectId>` |
//! | `@CreatedDate` | 생성자에서 `DateTime::now()` 설정 |

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::config::SocialType;

/// 사용자 엔티티
///
/// 소셜 로그인 사용자는 `principal`(프로바이더 고유 식별자)과
/// `social_type`을 갖고, 로컬 사용자는 `password`만 갖습니다.
/// 이메일이 사용자 식별의 기준 키입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// MongoDB 문서 ID (자동 생성)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 사용자 표시 이름
    pub name: String,

    /// 이메일 주소 (고유 식별 키)
    pub email: String,

    /// 로컬 계정 비밀번호 (소셜 사용자는 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// 소셜 프로바이더가 발급한 고유 식별자
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,

    /// 가입 경로가 된 소셜 프로바이더
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_type: Option<SocialType>,

    /// 계정 생성 시각
    pub created_at: DateTime,
}

impl User {
    /// 소셜 로그인 클레임으로부터 신규 사용자를 생성합니다.
    pub fn new_social(name: String, email: String, principal: String, social_type: SocialType) -> Self {
        Self {
            id: None,
            name,
            email,
            password: None,
            principal: Some(principal),
            social_type: Some(social_type),
            created_at: DateTime::now(),
        }
    }

    /// 비밀번호 기반 로컬 사용자를 생성합니다.
    ///
    /// 시드 데이터 적재 시에만 사용됩니다.
    pub fn new_local(name: String, email: String, password: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password: Some(password),
            principal: None,
            social_type: None,
            created_at: DateTime::now(),
        }
    }

    /// 문서 ID를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }

    /// 소셜 로그인으로 가입한 사용자인지 확인합니다.
    pub fn is_social(&self) -> bool {
        self.social_type.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_social_user() {
        let user = User::new_social(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "12345".to_string(),
            SocialType::Kakao,
        );

        assert_eq!(user.name, "havi");
        assert_eq!(user.email, "havi@gmail.com");
        assert_eq!(user.principal.as_deref(), Some("12345"));
        assert_eq!(user.social_type, Some(SocialType::Kakao));
        assert!(user.password.is_none());
        assert!(user.id.is_none());
        assert!(user.is_social());
    }

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "test".to_string(),
        );

        assert_eq!(user.password.as_deref(), Some("test"));
        assert!(user.principal.is_none());
        assert!(user.social_type.is_none());
        assert!(!user.is_social());
    }

    #[test]
    fn test_id_string() {
        let mut user = User::new_local("havi".to_string(), "havi@gmail.com".to_string(), "test".to_string());
        assert!(user.id_string().is_none());

        let oid = ObjectId::new();
        user.id = Some(oid);
        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let user = User::new_social(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "12345".to_string(),
            SocialType::Kakao,
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["social_type"], "kakao");
    }
}
