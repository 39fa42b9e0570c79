//! # 사용자 신원 해석 서비스
//!
//! 세션의 인증 컨텍스트를 사용자 엔티티로 해석합니다.
//! Spring MVC의 `HandlerMethodArgumentResolver`로 소셜 사용자를
//! 바인딩하던 로직에 해당하는 계층입니다.
//!
//! ## 해석 순서
//!
//! ```text
//! 세션 캐시 확인
//!     │
//!     ├─ 캐시된 사용자 있음 ───► 그대로 반환 (저장소 접근 없음)
//!     │
//!     └─ 캐시 없음
//!             │
//!             ├─ 익명 인증 ──────────► 사용자 없음
//!             │
//!             ├─ 지원하지 않는 권한 ──► 사용자 없음 (debug 로그)
//!             │
//!             ├─ 클레임 형태 불일치 ──► 사용자 없음
//!             │
//!             └─ 클레임 추출 성공
//!                     │
//!                     ├─ 이메일로 기존 사용자 조회
//!                     │
//!                     └─ 없으면 신규 저장 후 권한 보정
//! ```

use std::sync::Arc;
use singleton_macro::service;

use crate::{
    config::SocialType,
    domain::entities::users::user::User,
    domain::models::auth::authentication::{Authentication, SocialAuthentication},
    domain::models::oauth::kakao::kakao_user::KakaoUserInfo,
    errors::errors::AppError,
    repositories::users::user_repo::UserRepository,
};

/// 신원 해석 결과
///
/// `reconciled`가 Some이면 세션의 인증 컨텍스트를
/// 보정된 권한으로 갱신해야 합니다.
#[derive(Debug)]
pub struct ResolvedIdentity {
    /// 해석된 사용자. 해석에 실패하면 None 입니다.
    pub user: Option<User>,
    /// 권한 보정이 필요한 경우의 새 인증 정보
    pub reconciled: Option<SocialAuthentication>,
}

impl ResolvedIdentity {
    fn empty() -> Self {
        Self { user: None, reconciled: None }
    }
}

/// 저장소 접근 이전에 결정되는 해석 분기
///
/// [`UserResolverService::decide`]가 반환하며,
/// `Candidate`만 저장소 조회로 이어집니다.
#[derive(Debug)]
pub(crate) enum Resolution {
    /// 세션에 캐시된 사용자를 그대로 사용
    Cached(User),
    /// 해석할 사용자가 없음
    Empty,
    /// 이메일로 조회하거나 새로 저장할 신규 후보
    Candidate(User),
}

/// 인증 컨텍스트를 사용자 엔티티로 해석하는 서비스
///
/// 해석 과정에서 저장소 쓰기는 신규 사용자 저장 한 번으로 제한됩니다.
/// 인증 정보가 기대한 형태가 아니어도 에러를 내지 않고
/// 기존 상태를 유지합니다. 실패한 해석이 요청 자체를
/// 막아서는 안 되기 때문입니다.
#[service]
pub struct UserResolverService {
    /// 사용자 리포지토리 (자동 주입)
    user_repository: Arc<UserRepository>,
}

impl UserResolverService {
    /// 세션 캐시와 인증 컨텍스트로부터 사용자를 해석합니다.
    ///
    /// # 인자
    ///
    /// * `cached` - 세션에 캐시된 사용자 (있으면 항상 우선)
    /// * `auth` - 세션의 인증 컨텍스트
    pub async fn resolve(&self, cached: Option<User>, auth: &Authentication) -> Result<ResolvedIdentity, AppError> {
        let candidate = match Self::decide(cached, auth) {
            // 캐시된 사용자가 있으면 저장소를 거치지 않음
            Resolution::Cached(user) => {
                return Ok(ResolvedIdentity { user: Some(user), reconciled: None });
            }
            Resolution::Empty => return Ok(ResolvedIdentity::empty()),
            Resolution::Candidate(candidate) => candidate,
        };

        // 이메일 기준으로 찾고, 없으면 저장 (쓰기는 최대 한 번)
        let user = match self.user_repository.find_by_email(&candidate.email).await? {
            Some(existing) => existing,
            None => {
                log::info!("새 소셜 사용자 등록: {}", candidate.email);
                self.user_repository.create(candidate).await?
            }
        };

        let reconciled = auth
            .as_social()
            .and_then(|social| Self::reconcile_authorities(&user, social));

        Ok(ResolvedIdentity { user: Some(user), reconciled })
    }

    /// 저장소 접근 없이 해석 분기를 결정합니다.
    pub(crate) fn decide(cached: Option<User>, auth: &Authentication) -> Resolution {
        if let Some(user) = cached {
            return Resolution::Cached(user);
        }

        let social = match auth.as_social() {
            Some(social) => social,
            None => return Resolution::Empty,
        };

        let social_type = match Self::provider_of(social) {
            Some(social_type) => social_type,
            None => {
                log::debug!("지원하지 않는 소셜 권한: {:?}", social.authorities);
                return Resolution::Empty;
            }
        };

        match Self::candidate_from_claims(social_type, social) {
            Some(candidate) => Resolution::Candidate(candidate),
            None => {
                log::debug!("소셜 클레임 형태가 일치하지 않아 해석을 건너뜁니다");
                Resolution::Empty
            }
        }
    }

    /// 권한 목록에서 소셜 프로바이더를 식별합니다.
    pub(crate) fn provider_of(auth: &SocialAuthentication) -> Option<SocialType> {
        auth.authorities
            .iter()
            .find_map(|authority| SocialType::from_authority(authority))
    }

    /// 프로바이더별 클레임에서 신규 사용자 후보를 만듭니다.
    pub(crate) fn candidate_from_claims(social_type: SocialType, auth: &SocialAuthentication) -> Option<User> {
        match social_type {
            SocialType::Kakao => KakaoUserInfo::from_claims(&auth.details).map(|info| {
                User::new_social(info.name, info.email, info.principal, social_type)
            }),
        }
    }

    /// 사용자의 소셜 역할이 인증 컨텍스트에 없으면
    /// 역할 하나만 담은 권한 목록으로 보정합니다.
    ///
    /// 이미 역할을 보유한 경우 None을 반환하여
    /// 불필요한 세션 쓰기를 피합니다.
    pub(crate) fn reconcile_authorities(user: &User, auth: &SocialAuthentication) -> Option<SocialAuthentication> {
        let role = user.social_type?.role_type();

        if auth.has_authority(role) {
            return None;
        }

        Some(SocialAuthentication::new(
            vec![role.to_string()],
            auth.details.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn kakao_details() -> Map<String, Value> {
        json!({
            "id": "12345",
            "kaccount_email": "havi@gmail.com",
            "properties": { "nickname": "havi" }
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn social_auth(authorities: Vec<&str>) -> SocialAuthentication {
        SocialAuthentication::new(
            authorities.into_iter().map(String::from).collect(),
            kakao_details(),
        )
    }

    #[test]
    fn test_decide_prefers_cached_user() {
        let cached = User::new_social(
            "cached".to_string(),
            "cached@gmail.com".to_string(),
            "99999".to_string(),
            SocialType::Kakao,
        );
        let auth = Authentication::Social(social_auth(vec!["ROLE_KAKAO"]));

        // 캐시가 있으면 클레임의 다른 사용자와 무관하게 캐시를 반환
        match UserResolverService::decide(Some(cached), &auth) {
            Resolution::Cached(user) => assert_eq!(user.email, "cached@gmail.com"),
            other => panic!("캐시 분기가 아님: {:?}", other),
        }
    }

    #[test]
    fn test_decide_anonymous_is_empty() {
        assert!(matches!(
            UserResolverService::decide(None, &Authentication::Anonymous),
            Resolution::Empty
        ));
    }

    #[test]
    fn test_decide_candidate_for_new_session() {
        let auth = Authentication::Social(social_auth(vec!["ROLE_KAKAO"]));

        match UserResolverService::decide(None, &auth) {
            Resolution::Candidate(candidate) => {
                assert_eq!(candidate.email, "havi@gmail.com");
                assert!(candidate.id.is_none());
            }
            other => panic!("후보 분기가 아님: {:?}", other),
        }
    }

    #[test]
    fn test_decide_unknown_authority_is_empty() {
        let auth = Authentication::Social(social_auth(vec!["ROLE_ADMIN"]));

        assert!(matches!(
            UserResolverService::decide(None, &auth),
            Resolution::Empty
        ));
    }

    #[test]
    fn test_provider_of_kakao() {
        let auth = social_auth(vec!["ROLE_KAKAO"]);
        assert_eq!(UserResolverService::provider_of(&auth), Some(SocialType::Kakao));
    }

    #[test]
    fn test_provider_of_unknown_authority() {
        let auth = social_auth(vec!["ROLE_ADMIN"]);
        assert_eq!(UserResolverService::provider_of(&auth), None);
    }

    #[test]
    fn test_candidate_from_kakao_claims() {
        let auth = social_auth(vec!["ROLE_KAKAO"]);
        let candidate = UserResolverService::candidate_from_claims(SocialType::Kakao, &auth).unwrap();

        assert_eq!(candidate.name, "havi");
        assert_eq!(candidate.email, "havi@gmail.com");
        assert_eq!(candidate.principal.as_deref(), Some("12345"));
        assert_eq!(candidate.social_type, Some(SocialType::Kakao));
    }

    #[test]
    fn test_candidate_from_malformed_claims() {
        let mut auth = social_auth(vec!["ROLE_KAKAO"]);
        auth.details.remove("kaccount_email");

        assert!(UserResolverService::candidate_from_claims(SocialType::Kakao, &auth).is_none());
    }

    #[test]
    fn test_reconcile_adds_missing_role() {
        let user = User::new_social(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "12345".to_string(),
            SocialType::Kakao,
        );
        let auth = social_auth(vec![]);

        let reconciled = UserResolverService::reconcile_authorities(&user, &auth).unwrap();
        assert_eq!(reconciled.authorities, vec!["ROLE_KAKAO".to_string()]);
        assert_eq!(reconciled.details, auth.details);
    }

    #[test]
    fn test_reconcile_noop_when_role_present() {
        let user = User::new_social(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "12345".to_string(),
            SocialType::Kakao,
        );
        let auth = social_auth(vec!["ROLE_KAKAO"]);

        assert!(UserResolverService::reconcile_authorities(&user, &auth).is_none());
    }

    #[test]
    fn test_reconcile_skips_local_user() {
        let user = User::new_local(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "test".to_string(),
        );
        let auth = social_auth(vec!["ROLE_KAKAO"]);

        assert!(UserResolverService::reconcile_authorities(&user, &auth).is_none());
    }
}
