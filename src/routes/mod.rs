//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 게시글, 인증, 사용자 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 게시글 목록/단건 조회 API 엔드포인트
//! - 카카오 소셜 로그인 API 엔드포인트
//! - 세션 기반 사용자 해석 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Middleware Usage
//!
//! 세션 미들웨어는 쿠키가 있으면 사용자를 해석해 요청에 붙이고,
//! 없으면 그대로 통과시킵니다. 인증 강제는 핸들러 추출기의 몫입니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/me")
//!         .wrap(SocialUserMiddleware::new())
//!         .service(handlers::users::get_me)  // SocialUser 추출기가 401 처리
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::middlewares::SocialUserMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_board_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 카카오 소셜 로그인 엔드포인트를 등록합니다.
/// 로그인/콜백은 Public 접근이 가능합니다.
///
/// # Available Routes
///
/// - `GET /api/v1/auth/kakao/login` - 카카오 로그인 URL 발급
/// - `GET /api/v1/auth/kakao/callback` - 카카오 OAuth 콜백 처리
/// - `POST /api/v1/auth/logout` - 세션 종료
///
/// # Examples
///
/// ```bash
/// # 카카오 로그인 시작
/// curl http://localhost:8080/api/v1/auth/kakao/login
///
/// # 로그아웃
/// curl -X POST http://localhost:8080/api/v1/auth/logout \
///   -H "Cookie: SESSION_ID=..."
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::kakao_login_url)
            .service(handlers::auth::kakao_callback)
            .service(handlers::auth::logout),
    );
}

/// 게시글 관련 라우트를 설정합니다
///
/// 목록과 단건 조회 엔드포인트를 등록합니다.
/// 조회 자체는 로그인 없이 가능하지만, 세션 미들웨어를 거쳐
/// 로그인한 사용자 정보가 함께 해석됩니다.
///
/// # Available Routes
///
/// - `GET /api/v1/boards?page=1&size=10` - 게시글 목록 조회
/// - `GET /api/v1/boards/{idx}` - 게시글 단건 조회
///
/// # Examples
///
/// ```bash
/// curl "http://localhost:8080/api/v1/boards?page=2&size=20"
/// curl http://localhost:8080/api/v1/boards/507f1f77bcf86cd799439011
/// ```
fn configure_board_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/boards")
            .wrap(SocialUserMiddleware::new())
            .service(handlers::boards::get_board_list)
            .service(handlers::boards::get_board),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 현재 로그인한 사용자 조회 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// - `GET /api/v1/me` - 현재 사용자 조회 (세션 필요)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(SocialUserMiddleware::new())
            .service(handlers::users::get_me),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "community_board_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "community_board_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
