//! SocialUserMiddleware 세션 해석 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::caching::session::{SESSION_COOKIE_NAME, SessionService};
use crate::domain::models::auth::authentication::Authentication;
use crate::errors::errors::AppError;
use crate::services::users::user_resolver_service::UserResolverService;

/// 실제 세션 해석을 수행하는 서비스
pub struct SocialUserMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SocialUserMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
                // 저장소 계층 오류는 익명으로 넘기지 않고 그대로 응답합니다
                attach_session_user(&req, cookie.value()).await?;
            }

            // 다음 서비스로 요청 전달
            service.call(req).await
        })
    }
}

/// 세션을 해석하여 사용자를 요청 확장에 저장
///
/// 인증 컨텍스트의 형태 불일치는 리졸버가 내부에서 흡수하여
/// 익명으로 진행하지만, MongoDB/Redis 접근 실패는
/// [`AppError`]로 전파되어 5xx 응답이 됩니다.
async fn attach_session_user(req: &ServiceRequest, session_id: &str) -> Result<(), AppError> {
    let sessions = SessionService::instance();
    let resolver = UserResolverService::instance();

    let cached = sessions.load_user(session_id).await?;
    let had_cached = cached.is_some();

    let auth = match sessions.load_authentication(session_id).await? {
        Some(auth) => auth,
        None => Authentication::Anonymous,
    };

    let resolved = resolver.resolve(cached, &auth).await?;

    // 보정된 권한은 세션에 다시 기록
    if let Some(reconciled) = resolved.reconciled {
        sessions
            .store_authentication(session_id, &Authentication::Social(reconciled))
            .await?;
    }

    if let Some(user) = resolved.user {
        // 처음 해석된 사용자만 세션에 캐시
        if !had_cached {
            sessions.store_user(session_id, &user).await?;
        }

        log::debug!("세션 사용자 해석 완료: {}", user.email);
        req.extensions_mut().insert(user);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_redis_failure_maps_to_server_error() {
        let err: Error = AppError::RedisError("connection refused".to_string()).into();

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_failure_maps_to_server_error() {
        let err: Error = AppError::DatabaseError("pool timeout".to_string()).into();

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
