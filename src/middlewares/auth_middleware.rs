//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 로그인 완료 시 발급한 JWT를 검증하고 사용자 정보를 추출합니다.
//! 토큰은 `Authorization: Bearer` 헤더 또는 `auth_token` 쿠키에서 읽습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 유효한 토큰이 없으면 401, 필요한 역할이 없으면 403으로 응답합니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<String>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(role: &str) -> Self {
        Self {
            required_role: Some(role.to_string()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};
    use crate::config::AuthProvider;
    use crate::core::registry::NetworkManager;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::domain::models::oauth::OAuthData;
    use crate::testing::{memory_state, yelp_settings};
    use mongodb::bson::oid::ObjectId;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    fn user(roles: &[&str]) -> User {
        let mut user = User::new_social(
            "ada".to_string(),
            "Ada".to_string(),
            None,
            AuthProvider::Yelp,
            OAuthData {
                provider_user_id: "U1".to_string(),
                provider_profile_image: None,
                provider_data: None,
            },
            roles.iter().map(|r| r.to_string()).collect(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings("abc"));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/p").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_bearer_header_and_cookie_are_accepted() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings("abc"));
        let token = state.tokens.generate_access_token(&user(&["user"])).unwrap();
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"ada"));

        let req = test::TestRequest::get()
            .uri("/p")
            .cookie(Cookie::new("auth_token", token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"ada"));
    }

    #[actix_web::test]
    async fn test_role_requirement() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings("abc"));
        let plain = state.tokens.generate_access_token(&user(&["user"])).unwrap();
        let admin = state.tokens.generate_access_token(&user(&["user", "admin"])).unwrap();
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role("admin"))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", plain)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", admin)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_required_rejects_forged_token() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings("abc"));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }
}
