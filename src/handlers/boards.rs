//! # 게시글 핸들러
//!
//! 게시글 목록과 단건 조회 엔드포인트를 제공합니다.

use actix_web::{HttpResponse, get, web};
use validator::Validate;

use crate::config::PageConfig;
use crate::domain::dto::boards::request::PageQuery;
use crate::errors::errors::AppError;
use crate::middlewares::OptionalSocialUser;
use crate::services::boards::board_service::BoardService;

/// 게시글 목록 조회
///
/// # API 명세
///
/// ```text
/// GET /api/v1/boards?page=1&size=10
///
/// Response: 200 OK
/// {
///   "content": [ { "id": "...", "title": "게시글1", ... } ],
///   "page": 0,
///   "size": 10,
///   "total_elements": 200,
///   "total_pages": 20
/// }
/// ```
///
/// `page`는 1부터 시작하며 생략 시 첫 페이지를 반환합니다.
/// 로그인 여부와 무관하게 조회할 수 있습니다.
#[get("")]
pub async fn get_board_list(
    query: web::Query<PageQuery>,
    viewer: OptionalSocialUser,
) -> Result<HttpResponse, AppError> {
    query.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    if let Some(user) = &viewer.0 {
        log::debug!("게시글 목록 조회 사용자: {}", user.email);
    }

    let page = query.page.unwrap_or(1);
    let size = query.size.unwrap_or_else(PageConfig::default_size);

    let board_service = BoardService::instance();
    let response = board_service.find_board_list(page, size).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시글 단건 조회
///
/// 게시글이 존재하지 않으면 404 대신 빈 게시글을 반환합니다.
///
/// # API 명세
///
/// ```text
/// GET /api/v1/boards/{idx}
///
/// Response: 200 OK
/// { "title": "게시글1", "sub_title": "순서1", "content": "콘텐츠", ... }
/// ```
#[get("/{idx}")]
pub async fn get_board(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let board_service = BoardService::instance();

    let response = board_service.find_board_by_idx(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
