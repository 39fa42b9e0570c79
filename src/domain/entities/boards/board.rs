//! # 게시글 엔티티 정의
//!
//! MongoDB `boards` 컬렉션에 저장되는 게시글 도메인 모델입니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 게시글 유형
///
/// 자유 게시글과 공지사항을 구분합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    /// 일반 자유 게시글
    Free,
    /// 공지사항
    Notice,
}

/// 게시글 엔티티
///
/// 단건 조회에서 문서가 존재하지 않으면 404 대신
/// [`Board::default`]로 만든 빈 게시글이 반환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// MongoDB 문서 ID (자동 생성)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 게시글 제목
    pub title: String,

    /// 게시글 부제목
    pub sub_title: String,

    /// 게시글 본문
    pub content: String,

    /// 게시글 유형
    pub board_type: BoardType,

    /// 작성 시각
    pub created_at: DateTime,

    /// 마지막 수정 시각
    pub updated_at: DateTime,

    /// 작성자 문서 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
}

impl Board {
    /// 새 게시글을 생성합니다.
    pub fn new(
        title: String,
        sub_title: String,
        content: String,
        board_type: BoardType,
        user_id: Option<ObjectId>,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            title,
            sub_title,
            content,
            board_type,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }

    /// 문서 ID를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }
}

impl Default for Board {
    /// 조회 실패 시 대체되는 빈 게시글을 생성합니다.
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            sub_title: String::new(),
            content: String::new(),
            board_type: BoardType::Free,
            created_at: DateTime::from_millis(0),
            updated_at: DateTime::from_millis(0),
            user_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let author = ObjectId::new();
        let board = Board::new(
            "게시글1".to_string(),
            "순서1".to_string(),
            "콘텐츠".to_string(),
            BoardType::Free,
            Some(author),
        );

        assert_eq!(board.title, "게시글1");
        assert_eq!(board.sub_title, "순서1");
        assert_eq!(board.board_type, BoardType::Free);
        assert_eq!(board.user_id, Some(author));
        assert_eq!(board.created_at, board.updated_at);
        assert!(board.id.is_none());
    }

    #[test]
    fn test_default_board_is_empty() {
        let board = Board::default();

        assert!(board.id.is_none());
        assert!(board.title.is_empty());
        assert!(board.sub_title.is_empty());
        assert!(board.content.is_empty());
        assert_eq!(board.board_type, BoardType::Free);
        assert!(board.user_id.is_none());
    }

    #[test]
    fn test_board_type_serialization() {
        assert_eq!(serde_json::to_string(&BoardType::Free).unwrap(), "\"free\"");
        assert_eq!(serde_json::to_string(&BoardType::Notice).unwrap(), "\"notice\"");
    }
}
