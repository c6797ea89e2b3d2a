//! Users Entity Module
//!
//! 소셜 로그인으로 생성되는 [`user::User`] 엔티티를 포함합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_social(
//!     "ada".to_string(),
//!     "Ada L.".to_string(),
//!     Some("a@b.com".to_string()),
//!     AuthProvider::Yelp,
//!     oauth_data,
//!     vec!["user".to_string()],
//! );
//! ```

pub mod user;
