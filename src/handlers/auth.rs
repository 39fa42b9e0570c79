//! # 인증 핸들러
//!
//! 카카오 소셜 로그인과 로그아웃 엔드포인트를 제공합니다.
//!
//! ## 로그인 플로우
//!
//! ```text
//! 1. GET  /api/v1/auth/kakao/login     → 카카오 인가 URL 발급
//! 2. 사용자가 카카오에서 동의
//! 3. GET  /api/v1/auth/kakao/callback  → 토큰 교환, 세션 발급, 게시판으로 리다이렉트
//! 4. POST /api/v1/auth/logout          → 세션 삭제, 쿠키 만료
//! ```

use actix_web::{HttpRequest, HttpResponse, cookie::Cookie, get, http::header, post, web};
use validator::Validate;

use crate::caching::session::{SESSION_COOKIE_NAME, SessionService};
use crate::config::SessionConfig;
use crate::domain::dto::auth::request::KakaoCallbackQuery;
use crate::domain::dto::auth::response::LogoutResponse;
use crate::domain::models::auth::authentication::Authentication;
use crate::errors::errors::AppError;
use crate::services::auth::kakao_auth_service::KakaoAuthService;
use crate::services::users::user_resolver_service::UserResolverService;

/// 카카오 로그인 URL 발급
///
/// 클라이언트가 브라우저를 이동시킬 카카오 인가 페이지 URL을 반환합니다.
///
/// # API 명세
///
/// ```text
/// GET /api/v1/auth/kakao/login
///
/// Response: 200 OK
/// {
///   "login_url": "https://kauth.kakao.com/oauth/authorize?...",
///   "state": "a1b2c3d4..."
/// }
/// ```
#[get("/kakao/login")]
pub async fn kakao_login_url() -> Result<HttpResponse, AppError> {
    let auth_service = KakaoAuthService::instance();

    let response = auth_service.get_login_url().await?;
    log::info!("카카오 로그인 URL 발급");

    Ok(HttpResponse::Ok().json(response))
}

/// 카카오 OAuth 콜백 처리
///
/// 인가 코드를 토큰으로 교환하고 세션을 발급한 뒤
/// 게시판 목록으로 리다이렉트합니다.
///
/// # 처리 단계
///
/// 1. 사용자 동의 거부(`error` 파라미터) 확인
/// 2. 쿼리 파라미터 검증
/// 3. state 검증과 토큰 교환, 클레임 조회
/// 4. 세션 발급 및 인증 컨텍스트 저장
/// 5. 즉시 신원 해석 후 사용자 캐시
/// 6. `SESSION_ID` 쿠키와 함께 302 응답
#[get("/kakao/callback")]
pub async fn kakao_callback(query: web::Query<KakaoCallbackQuery>) -> Result<HttpResponse, AppError> {
    // 사용자가 인가를 거부한 경우
    if let Some(error) = &query.error {
        log::warn!(
            "카카오 인가 거부: {} ({})",
            error,
            query.error_description.as_deref().unwrap_or("사유 없음")
        );
        return Err(AppError::AuthenticationError("카카오 인증이 취소되었습니다".to_string()));
    }

    query.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let code = query
        .code
        .as_deref()
        .ok_or_else(|| AppError::ValidationError("인가 코드가 비어있습니다".to_string()))?;
    let state = query
        .state
        .as_deref()
        .ok_or_else(|| AppError::ValidationError("state 값이 비어있습니다".to_string()))?;

    let auth_service = KakaoAuthService::instance();
    let social = auth_service.authenticate_with_code(code, state).await?;

    // 세션 발급 및 인증 컨텍스트 저장
    let session_id = uuid::Uuid::new_v4().to_string();
    let sessions = SessionService::instance();
    let authentication = Authentication::Social(social);
    sessions.store_authentication(&session_id, &authentication).await?;

    // 첫 요청을 기다리지 않고 즉시 신원 해석
    let resolver = UserResolverService::instance();
    let resolved = resolver.resolve(None, &authentication).await?;

    if let Some(reconciled) = resolved.reconciled {
        sessions
            .store_authentication(&session_id, &Authentication::Social(reconciled))
            .await?;
    }

    if let Some(ref user) = resolved.user {
        sessions.store_user(&session_id, user).await?;
        log::info!("카카오 로그인 성공: {}", user.email);
    }

    let cookie = Cookie::build(SESSION_COOKIE_NAME, session_id)
        .path("/")
        .http_only(true)
        .max_age(actix_web::cookie::time::Duration::seconds(
            SessionConfig::ttl_seconds() as i64,
        ))
        .finish();

    Ok(HttpResponse::Found()
        .append_header((header::LOCATION, "/api/v1/boards"))
        .cookie(cookie)
        .finish())
}

/// 로그아웃 처리
///
/// 세션의 Redis 키를 삭제하고 쿠키를 만료시킵니다.
/// 세션 쿠키가 없어도 성공으로 처리됩니다.
#[post("/logout")]
pub async fn logout(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        SessionService::instance().clear(cookie.value()).await?;
        log::info!("세션 종료: {}", cookie.value());
    }

    let mut removal = Cookie::build(SESSION_COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .finish();
    removal.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(LogoutResponse { message: "로그아웃 되었습니다".to_string() }))
}
