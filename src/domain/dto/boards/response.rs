//! # 게시글 응답 DTO

use serde::Serialize;

use crate::domain::entities::boards::board::{Board, BoardType};

/// 게시글 단건 응답
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// 게시글 ID (16진수 문자열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 게시글 제목
    pub title: String,
    /// 게시글 부제목
    pub sub_title: String,
    /// 게시글 본문
    pub content: String,
    /// 게시글 유형
    pub board_type: BoardType,
    /// 작성 시각 (RFC 3339)
    pub created_at: String,
    /// 마지막 수정 시각 (RFC 3339)
    pub updated_at: String,
    /// 작성자 ID (16진수 문자열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id_string(),
            title: board.title,
            sub_title: board.sub_title,
            content: board.content,
            board_type: board.board_type,
            created_at: board
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
            updated_at: board
                .updated_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
            user_id: board.user_id.map(|oid| oid.to_hex()),
        }
    }
}

/// 페이지네이션 응답 래퍼
///
/// Spring Data의 `Page<T>`와 같은 메타데이터를 제공합니다.
/// `page`는 0부터 시작하는 저장소 기준 페이지 번호입니다.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    /// 현재 페이지의 항목 목록
    pub content: Vec<T>,
    /// 0부터 시작하는 페이지 번호
    pub page: u64,
    /// 페이지당 항목 수
    pub size: i64,
    /// 전체 항목 수
    pub total_elements: u64,
    /// 전체 페이지 수
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// 페이지 메타데이터를 계산하여 응답을 생성합니다.
    pub fn new(content: Vec<T>, page: u64, size: i64, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_board_response_from_entity() {
        let author = ObjectId::new();
        let board = Board::new(
            "게시글1".to_string(),
            "순서1".to_string(),
            "콘텐츠".to_string(),
            BoardType::Notice,
            Some(author),
        );

        let response = BoardResponse::from(board);
        assert!(response.id.is_none());
        assert_eq!(response.title, "게시글1");
        assert_eq!(response.board_type, BoardType::Notice);
        assert_eq!(response.user_id, Some(author.to_hex()));
        assert!(!response.created_at.is_empty());
    }

    #[test]
    fn test_board_response_hex_id() {
        let mut board = Board::new(
            "게시글1".to_string(),
            "순서1".to_string(),
            "콘텐츠".to_string(),
            BoardType::Free,
            None,
        );
        let oid = ObjectId::new();
        board.id = Some(oid);

        let response = BoardResponse::from(board);
        assert_eq!(response.id, Some(oid.to_hex()));
    }

    #[test]
    fn test_page_response_metadata() {
        let page: PageResponse<i32> = PageResponse::new(vec![1, 2, 3], 0, 10, 23);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 23);
        assert_eq!(page.size, 10);
    }

    #[test]
    fn test_page_response_exact_division() {
        let page: PageResponse<i32> = PageResponse::new(vec![], 1, 10, 200);
        assert_eq!(page.total_pages, 20);
    }

    #[test]
    fn test_page_response_empty() {
        let page: PageResponse<i32> = PageResponse::new(vec![], 0, 10, 0);
        assert_eq!(page.total_pages, 0);
    }
}
