//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Route Groups
//!
//! | 경로 | 인증 |
//! |------|------|
//! | `/health` | 없음 |
//! | `/user/login`, `/user/login/yelp`, `/user/login/yelp/callback`, `/user/logout` | 없음 |
//! | `/user/me` | JWT 필요 |
//! | `/admin/config/social-api/*` | JWT + `admin` 역할 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(state.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_admin_routes(cfg);
}

/// 로그인 플로우 라우트
///
/// 로그인/콜백/로그아웃은 인증 전 단계이므로 공개되고,
/// `/user/me`만 토큰 인증을 요구합니다.
///
/// ```bash
/// # 로그인 시작 (브라우저에서)
/// curl -i "http://localhost:8080/user/login/yelp?destination=/node/1"
///
/// # 현재 사용자
/// curl http://localhost:8080/user/me -H "Authorization: Bearer eyJhbGciOi..."
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::auth::login_page)
            .service(handlers::auth::yelp_login)
            .service(handlers::auth::yelp_callback)
            .service(handlers::auth::logout)
            .service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::auth::current_user))
            )
    );
}

/// 관리자 설정 라우트 (`admin` 역할 필요)
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/config/social-api")
            .wrap(AuthMiddleware::required_with_role("admin"))
            .service(handlers::settings::list_integrations)
            .service(handlers::settings::get_yelp_settings)
            .service(handlers::settings::update_yelp_settings)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_auth_yelp",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::core::registry::NetworkManager;
    use crate::testing::{memory_state, yelp_settings};

    #[actix_web::test]
    async fn test_health_check() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings("abc"));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure_all_routes),
        )
        .await;

        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "social_auth_yelp");
    }
}
