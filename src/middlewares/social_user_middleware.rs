//! 세션 기반 소셜 사용자 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `SESSION_ID` 쿠키를 읽어
//! 세션의 인증 상태를 사용자 엔티티로 해석하고 요청 확장에 저장합니다.
//! Spring MVC의 `HandlerMethodArgumentResolver` 기반
//! `@SocialUser` 바인딩에 해당합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, Result,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::middlewares::social_user_inner::SocialUserMiddlewareService;

/// 세션 사용자 해석 미들웨어
///
/// 쿠키가 없거나 세션이 해석되지 않아도 요청은 통과하며,
/// 인증 강제는 핸들러의 [`SocialUser`] 추출기가 담당합니다.
/// 해석 중 MongoDB/Redis 접근이 실패하면 요청을 막고
/// 저장소 에러 응답을 반환합니다.
pub struct SocialUserMiddleware;

impl SocialUserMiddleware {
    /// 새로운 세션 사용자 미들웨어 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for SocialUserMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SocialUserMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SocialUserMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SocialUserMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// 로그인한 사용자를 요구하는 핸들러 인자
///
/// 미들웨어가 요청 확장에 저장한 사용자를 꺼내며,
/// 없으면 401 응답으로 이어지는 인증 에러를 반환합니다.
pub struct SocialUser(pub User);

impl FromRequest for SocialUser {
    type Error = AppError;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<User>()
                .cloned()
                .map(SocialUser)
                .ok_or_else(|| AppError::AuthenticationError("로그인이 필요합니다".to_string())),
        )
    }
}

/// 로그인 여부와 무관하게 동작하는 핸들러 인자
///
/// 사용자가 해석되지 않았으면 `None`을 담아 전달합니다.
pub struct OptionalSocialUser(pub Option<User>);

impl FromRequest for OptionalSocialUser {
    type Error = AppError;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalSocialUser(
            req.extensions().get::<User>().cloned(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SocialType;
    use actix_web::test::TestRequest;

    fn sample_user() -> User {
        User::new_social(
            "havi".to_string(),
            "havi@gmail.com".to_string(),
            "12345".to_string(),
            SocialType::Kakao,
        )
    }

    #[actix_web::test]
    async fn test_social_user_extraction() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(sample_user());

        let extracted = SocialUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(extracted.0.email, "havi@gmail.com");
    }

    #[actix_web::test]
    async fn test_social_user_missing_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = SocialUser::from_request(&req, &mut Payload::None).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_optional_social_user_present() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(sample_user());

        let extracted = OptionalSocialUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert!(extracted.0.is_some());
    }

    #[actix_web::test]
    async fn test_optional_social_user_absent() {
        let req = TestRequest::default().to_http_request();

        let extracted = OptionalSocialUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert!(extracted.0.is_none());
    }
}
