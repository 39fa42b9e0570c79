//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **이메일 기준 식별**: 소셜 로그인 사용자를 이메일로 찾거나 생성

use std::sync::Arc;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 조회와 생성을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합하여 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `user:email:{email}`
/// - **TTL**: 600초 (10분)
/// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
///
/// ## 인덱스
///
/// - `email` (유니크): 이메일 기준 식별의 무결성 보장
/// - `created_at` (내림차순): 최근 가입자 조회 최적화
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자를 조회합니다.
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// 새 사용자를 저장합니다.
    ///
    /// 동일 이메일의 사용자가 동시에 저장되어 유니크 인덱스 충돌이
    /// 발생하면 먼저 저장된 사용자를 다시 조회하여 반환합니다.
    /// 두 세션이 같은 계정으로 처음 로그인하는 경쟁 상황을 흡수합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (ID 포함) 또는 먼저 저장된 사용자
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await;

        match result {
            Ok(inserted) => {
                user.id = inserted.inserted_id.as_object_id();

                // 컬렉션 캐시 무효화
                let _ = self.invalidate_collection_cache(None).await;

                Ok(user)
            }
            // 유니크 인덱스 충돌은 다른 요청이 먼저 저장했다는 의미
            Err(e) if e.to_string().contains("E11000") => {
                self.find_by_email(&user.email)
                    .await?
                    .ok_or_else(|| AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    /// 사용자 컬렉션의 인덱스를 생성합니다.
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. `email` 유니크 인덱스 - 중복 이메일 방지 및 조회 최적화
    /// 2. `created_at` 내림차순 인덱스 - 최근 가입자 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
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
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
