//! # 사용자 핸들러
//!
//! 현재 로그인한 사용자 조회 엔드포인트를 제공합니다.

use actix_web::{HttpResponse, get};

use crate::domain::dto::users::response::UserResponse;
use crate::errors::errors::AppError;
use crate::middlewares::SocialUser;

/// 현재 로그인한 사용자 조회
///
/// 세션 미들웨어가 해석한 사용자를 반환합니다.
/// 로그인하지 않은 경우 401 응답을 받습니다.
///
/// # API 명세
///
/// ```text
/// GET /api/v1/me
/// Cookie: SESSION_ID=...
///
/// Response: 200 OK
/// { "id": "...", "name": "havi", "email": "havi@gmail.com", "social_type": "kakao", ... }
/// ```
#[get("")]
pub async fn get_me(user: SocialUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user.0)))
}
