//! # 게시글 서비스
//!
//! 게시글 목록 조회와 단건 조회 비즈니스 로직을 담당합니다.
//! Spring의 `BoardService`에 해당하는 계층입니다.
//!
//! ## 페이지 번호 정규화
//!
//! 클라이언트는 1부터 시작하는 페이지 번호를 사용하고,
//! 저장소는 0부터 시작하는 페이지 번호를 사용합니다.
//! 0 이하의 값은 모두 첫 페이지로 처리합니다.
//!
//! | 요청 page | 저장소 page |
//! |-----------|-------------|
//! | -3, 0, 1  | 0           |
//! | 2         | 1           |
//! | 10        | 9           |

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;

use crate::{
    domain::dto::boards::response::{BoardResponse, PageResponse},
    domain::entities::boards::board::Board,
    errors::errors::AppError,
    repositories::boards::board_repo::BoardRepository,
};

/// 게시글 비즈니스 로직 서비스
///
/// ## 조회 실패 처리
///
/// 단건 조회에서 게시글이 없으면 에러 대신 [`Board::default`]로
/// 만든 빈 게시글을 반환합니다. 목록 화면에서 삭제된 게시글
/// 링크를 눌러도 404가 아닌 빈 화면을 보여주기 위한 정책입니다.
#[service]
pub struct BoardService {
    /// 게시글 리포지토리 (자동 주입)
    board_repository: Arc<BoardRepository>,
}

impl BoardService {
    /// 1부터 시작하는 요청 페이지 번호를 0부터 시작하는
    /// 저장소 페이지 번호로 변환합니다.
    ///
    /// 0 이하의 값은 첫 페이지로 정규화됩니다.
    pub(crate) fn normalize_page(page: i64) -> u64 {
        if page <= 1 { 0 } else { (page - 1) as u64 }
    }

    /// 게시글 목록 한 페이지를 조회합니다.
    ///
    /// # 인자
    ///
    /// * `page` - 1부터 시작하는 요청 페이지 번호
    /// * `size` - 페이지당 게시글 수
    pub async fn find_board_list(&self, page: i64, size: i64) -> Result<PageResponse<BoardResponse>, AppError> {
        let stored_page = Self::normalize_page(page);

        let boards = self.board_repository.find_page(stored_page, size).await?;
        let total = self.board_repository.count().await?;

        let content = boards.into_iter().map(BoardResponse::from).collect();

        Ok(PageResponse::new(content, stored_page, size, total))
    }

    /// 게시글 한 건을 조회합니다.
    ///
    /// 게시글이 존재하지 않으면 빈 게시글을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(BoardResponse)` - 조회된 게시글 또는 빈 게시글
    /// * `Err(AppError::ValidationError)` - 잘못된 ID 형식
    pub async fn find_board_by_idx(&self, idx: &str) -> Result<BoardResponse, AppError> {
        let object_id = ObjectId::parse_str(idx)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let board = self.board_repository
            .find_by_id(&object_id)
            .await?
            .unwrap_or_default();

        Ok(BoardResponse::from(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page_first_page() {
        assert_eq!(BoardService::normalize_page(1), 0);
    }

    #[test]
    fn test_normalize_page_zero_and_negative() {
        assert_eq!(BoardService::normalize_page(0), 0);
        assert_eq!(BoardService::normalize_page(-3), 0);
    }

    #[test]
    fn test_normalize_page_shifts_by_one() {
        assert_eq!(BoardService::normalize_page(2), 1);
        assert_eq!(BoardService::normalize_page(10), 9);
        assert_eq!(BoardService::normalize_page(21), 20);
    }
}
