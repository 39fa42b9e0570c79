//! # 게시글 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 게시글 목록 페이지네이션 쿼리
///
/// `page`는 1부터 시작하는 사용자 기준 페이지 번호입니다.
/// 0 이하의 값은 첫 페이지로 정규화됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct PageQuery {
    /// 조회할 페이지 번호 (1부터 시작, 기본 1)
    pub page: Option<i64>,

    /// 페이지당 게시글 수 (기본값은 BOARD_PAGE_SIZE)
    #[validate(range(min = 1, max = 100, message = "페이지 크기는 1에서 100 사이여야 합니다"))]
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let query = PageQuery { page: None, size: None };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_negative_page_is_allowed() {
        // 음수 페이지는 검증 대상이 아니라 서비스 계층에서 정규화됩니다.
        let query = PageQuery { page: Some(-3), size: Some(10) };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_oversized_page_size_rejected() {
        let query = PageQuery { page: Some(1), size: Some(500) };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let query = PageQuery { page: Some(1), size: Some(0) };
        assert!(query.validate().is_err());
    }
}
