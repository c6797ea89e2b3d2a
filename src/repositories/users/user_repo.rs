//! # 사용자 리포지토리 구현
//!
//! 소셜 로그인 사용자 엔티티의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **프로바이더 ID 조회**: `(auth_provider, oauth_data.provider_user_id)` 쌍으로 계정 식별
//! - **데이터 무결성**: 프로바이더 ID와 사용자명에 유니크 인덱스
//! - **교체 가능한 백엔드**: MongoDB 구현과 메모리 구현

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};

/// 사용자 계정 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 프로바이더와 프로바이더 사용자 ID로 계정을 조회합니다.
    async fn find_by_provider_id(&self, provider: AuthProvider, provider_user_id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// ObjectId 16진수 문자열로 조회합니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 할당된 엔티티를 반환합니다.
    ///
    /// 사용자명이나 프로바이더 ID가 이미 있으면 `ConflictError`입니다.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 마지막 로그인 시각을 현재 시각으로 갱신합니다.
    async fn record_login(&self, id: &str) -> Result<(), AppError>;
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// MongoDB 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: (auth_provider, oauth_data.provider_user_id) unique, username unique
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    const COLLECTION: &'static str = "users";

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 사용자 컬렉션 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let provider_index = IndexModel::builder()
            .keys(doc! { "auth_provider": 1, "oauth_data.provider_user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_user_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([provider_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_provider_id(&self, provider: AuthProvider, provider_user_id: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! {
                "auth_provider": provider.as_str(),
                "oauth_data.provider_user_id": provider_user_id,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_provider_id(user.auth_provider, user.provider_user_id()).await?.is_some() {
            return Err(AppError::ConflictError("이미 연동된 프로바이더 계정입니다".to_string()));
        }

        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn record_login(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;
        let now = DateTime::now();

        self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "last_login_at": now, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 메모리 사용자 저장소
///
/// 로컬 개발(`STORAGE_BACKEND=memory`)과 테스트에서 사용합니다.
/// 프로세스가 끝나면 데이터가 사라집니다.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_provider_id(&self, provider: AuthProvider, provider_user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?
            .iter()
            .find(|u| u.auth_provider == provider && u.provider_user_id() == provider_user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;
        Ok(self.read()?.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if users.iter().any(|u| u.auth_provider == user.auth_provider && u.provider_user_id() == user.provider_user_id()) {
            return Err(AppError::ConflictError("이미 연동된 프로바이더 계정입니다".to_string()));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn record_login(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;
        let now = DateTime::now();

        if let Some(user) = self.write()?.iter_mut().find(|u| u.id == Some(object_id)) {
            user.last_login_at = Some(now);
            user.updated_at = now;
        }
        Ok(())
    }
}
