//! # 게시글 리포지토리 구현
//!
//! 게시글 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 페이지네이션 목록 조회와 단건 조회, 시드 데이터 적재를 지원합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::boards::board::Board,
    errors::errors::AppError,
};

/// 게시글 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **개별 게시글**: `board:{id}`, TTL 600초
/// - **목록 조회**: 페이지 조합이 많아 캐싱하지 않음
///
/// ## 인덱스
///
/// - `user_id`: 작성자 기준 조회 최적화
/// - `created_at` (내림차순): 최신 게시글 조회 최적화
#[repository(name = "board", collection = "boards")]
pub struct BoardRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl BoardRepository {
    /// 게시글 한 페이지를 조회합니다.
    ///
    /// `_id` 오름차순으로 정렬하여 삽입 순서와 같은 안정적인
    /// 페이지 경계를 보장합니다.
    ///
    /// # 인자
    ///
    /// * `page` - 0부터 시작하는 페이지 번호
    /// * `size` - 페이지당 게시글 수
    pub async fn find_page(&self, page: u64, size: i64) -> Result<Vec<Board>, AppError> {
        let cursor = self.collection::<Board>()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(page.saturating_mul(size.max(0) as u64))
            .limit(size)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 게시글 수를 조회합니다.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<Board>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 게시글을 조회합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `board:{id}` (리포지토리 매크로의 `cache_key()` 사용)
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Board>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Board>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let board = self.collection::<Board>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref board) = board {
            let _ = self.redis
                .set_with_expiry(&cache_key, board, 600)
                .await;
        }

        Ok(board)
    }

    /// 새 게시글을 저장합니다.
    ///
    /// 시드 데이터 적재에 사용됩니다.
    pub async fn create(&self, mut board: Board) -> Result<Board, AppError> {
        let result = self.collection::<Board>()
            .insert_one(&board)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        board.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(board)
    }

    /// 게시글 컬렉션의 인덱스를 생성합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. `user_id` 인덱스 - 작성자 기준 조회 최적화
    /// 2. `created_at` 내림차순 인덱스 - 최신 게시글 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Board>();

        // 작성자 인덱스
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_asc".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([user_id_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
