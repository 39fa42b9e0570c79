//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 게시판 백엔드의 모든 서비스/리포지토리를 관리하는 싱글톤 DI 컨테이너입니다.
//! Spring Framework의 ApplicationContext와 BeanFactory 역할을 Rust에서 구현한 것으로,
//! 컴파일 타임 타입 안전성과 런타임 효율성을 모두 제공합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Component` | `#[service]` / `#[repository]` | 컴포넌트 자동 등록 |
//! | `@Autowired` | `Arc<T>` 필드 | 자동 의존성 주입 |
//! | `@Lazy` | 기본 동작 | 모든 빈이 지연 초기화 |
//! | `@Scope("singleton")` | 기본 동작 | 모든 컴포넌트가 싱글톤 |
//! | `CircularDependencyException` | 런타임 패닉 | 조기 발견 |
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ #[service] 매크로 → ServiceRegistration 생성
//!    ├─ #[repository] 매크로 → RepositoryRegistration 생성
//!    └─ inventory::collect! → 전역 레지스트리에 등록
//!
//! 2. 런타임 초기화 (Infrastructure Beans)
//!    ├─ Database, RedisClient 인프라 컴포넌트 직접 등록
//!    └─ ServiceLocator::set() → 전역 컨테이너에 저장
//!
//! 3. 의존성 주입 (Autowiring)
//!    ├─ Arc<T> 필드 감지 → ServiceLocator::get::<T>() 호출
//!    ├─ 타입 이름 매칭 → 등록된 컴포넌트 검색
//!    └─ 인스턴스 생성 후 캐싱 → 이후 동일 인스턴스 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[service]
//! struct BoardService {
//!     board_repository: Arc<BoardRepository>,  // @Autowired와 동일
//! }
//!
//! #[repository(name = "board", collection = "boards")]
//! struct BoardRepository {
//!     db: Arc<Database>,
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 모든 `#[service]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리에서 서비스를 식별하는 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 생성 직후 호출되는 초기화 로직입니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 모든 `#[repository]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 데이터 액세스 관련 초기화 작업을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 생성하는 등록 메타데이터
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 생성하는 등록 메타데이터
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

// 컴파일 타임에 모든 등록 정보를 수집합니다.
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        // 매크로가 등록하는 `board_service` 형태를 `board`로 정규화
        cache.insert(service_key(registration.name), registration);
    }

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시
///
/// 리포지토리는 `#[repository(name = "board", ...)]`처럼
/// 엔티티 이름으로 직접 등록되므로 정규화가 필요 없습니다.
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        cache.insert(registration.name.to_string(), registration);
    }

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 매크로 등록 이름에서 `_service` 접미사를 제거합니다.
fn service_key(name: &str) -> String {
    name.strip_suffix("_service").unwrap_or(name).to_string()
}

/// 싱글톤 의존성 주입 컨테이너
///
/// Spring Framework의 ApplicationContext + BeanFactory 역할을 담당합니다.
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스만 생성
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **Thread-safe**: `RwLock`을 사용한 동시성 안전성
/// - **순환 참조 방지**: 초기화 중인 타입을 추적하여 데드락 방지
pub struct ServiceLocator {
    /// 생성된 인스턴스 캐시 (`TypeId` → 인스턴스)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들 (순환 참조 방지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// Spring의 `ApplicationContext.getBean(Class<T>)`과 동일한 역할입니다.
    ///
    /// 1. 인스턴스 캐시 확인 (O(1))
    /// 2. 순환 참조 검사 (생성 중인 타입 재요청 시 패닉)
    /// 3. 타입 이름 분석 (`BoardRepository` → 엔티티 이름 `board`)
    /// 4. 레지스트리 캐시에서 등록 정보 조회 후 생성자 호출
    /// 5. 생성된 인스턴스 캐싱
    ///
    /// # 패닉 상황
    ///
    /// - **순환 참조**: A → B → A 형태의 의존성 순환
    /// - **미등록 타입**: 매크로 적용이나 `ServiceLocator::set()` 등록 없이 요청
    /// - **타입 불일치**: 등록된 타입과 요청 타입이 다른 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 현재 초기화 중인지 확인 (순환 참조 방지)
        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                eprintln!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        LOCATOR.initializing.write().unwrap().insert(type_id);

        // 생성자 호출은 잠금을 잡지 않은 채로 수행합니다.
        // 생성자가 다른 의존성의 get()을 재귀 호출하기 때문입니다.
        let short_name = Self::type_basename(type_name);
        let constructor = Self::find_constructor(&short_name).unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            )
        });

        let boxed_instance = constructor();
        let instance = match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => (*arc_instance).clone(),
            Err(_) => panic!("Type mismatch for component: {}", short_name),
        };

        // 경쟁 생성 시 먼저 캐싱된 인스턴스를 유지
        let result = {
            let mut instances = LOCATOR.instances.write().unwrap();
            instances
                .entry(type_id)
                .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
                .clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator")
        };

        LOCATOR.initializing.write().unwrap().remove(&type_id);

        result
    }

    /// 타입 이름으로 등록된 생성자를 찾습니다.
    ///
    /// `BoardRepository`는 리포지토리 캐시에서 `board`로,
    /// `SessionService`는 서비스 캐시에서 `session`으로 조회합니다.
    fn find_constructor(short_name: &str) -> Option<fn() -> Box<dyn Any + Send + Sync>> {
        if let Some(entity) = short_name.strip_suffix("Repository") {
            return REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| registration.constructor);
        }

        if let Some(entity) = short_name.strip_suffix("Service") {
            return SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| registration.constructor);
        }

        None
    }

    /// 타입 이름에서 마지막 경로 세그먼트를 추출합니다.
    ///
    /// `std::any::type_name::<T>()`는 전체 모듈 경로를 포함하므로
    /// (예: `community_board_backend::services::BoardService`),
    /// 마지막 세그먼트만 매칭에 사용합니다.
    fn type_basename(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// Spring의 `@Bean` 메서드나 `registerSingleton()`과 동일한 역할로,
    /// 매크로로 관리되지 않는 인프라 컴포넌트(Database, RedisClient)를
    /// 수동으로 등록할 때 사용됩니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    ///
    /// let redis = Arc::new(RedisClient::new().await?);
    /// ServiceLocator::set(redis);
    /// ```
    ///
    /// 인프라를 먼저 등록한 뒤 `initialize_all()`을 호출해야
    /// 의존성 해결이 정상적으로 동작합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        println!("📦 Registering: {}", Self::type_basename(type_name));

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 서비스와 리포지토리를 초기화합니다.
    ///
    /// 애플리케이션 시작 시 호출되어 등록된 모든 컴포넌트의 인스턴스를
    /// 미리 생성합니다. 데이터 계층(Repository)을 비즈니스 계층(Service)보다
    /// 먼저 초기화합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        // 1단계: 리포지토리 인스턴스 생성
        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        // 2단계: 서비스 인스턴스 생성
        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
///
/// 첫 접근 시에만 초기화되며, 이후에는 동일한 인스턴스가 재사용됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_key_strips_macro_suffix() {
        assert_eq!(service_key("board_service"), "board");
        assert_eq!(service_key("session_service"), "session");
        assert_eq!(service_key("board"), "board");
    }

    #[test]
    fn test_type_basename_drops_module_path() {
        assert_eq!(
            ServiceLocator::type_basename("community_board_backend::repositories::boards::board_repo::BoardRepository"),
            "BoardRepository"
        );
        assert_eq!(ServiceLocator::type_basename("BoardService"), "BoardService");
    }
}
