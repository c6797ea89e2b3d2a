//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_repo::UserStore)를 통해 사용자 계정을 조회/생성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_yelp::repositories::users::user_repo::{MongoUserRepository, UserStore};
//!
//! let repo = MongoUserRepository::new(database);
//! repo.create_indexes().await?;
//! let user = repo.find_by_provider_id(AuthProvider::Yelp, "U1").await?;
//! ```

pub mod user_repo;
