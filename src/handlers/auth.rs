//! Authentication HTTP Handlers
//!
//! Yelp 소셜 로그인의 브라우저 리다이렉트 엔드포인트입니다.
//! 핸들러는 세션을 불러오고 서비스 결과를 리다이렉트로 바꾼 뒤 세션을 다시 저장합니다.
//! 로그인 플로우의 실패는 JSON 에러가 아니라 로그인 페이지로의 302와 상태 메시지로 끝납니다.
//!
//! # Endpoints
//!
//! - `GET /user/login` - 로그인 프로바이더 목록과 상태 메시지
//! - `GET /user/login/yelp` - 로그인 시작 (302 → Yelp)
//! - `GET /user/login/yelp/callback` - 프로바이더 콜백 (302)
//! - `GET /user/logout` - 세션과 인증 쿠키 제거
//! - `GET /user/me` - 현재 로그인한 사용자 (인증 필요)
use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use log::error;
use validator::Validate;

use crate::config::SessionConfig;
use crate::core::state::AppState;
use crate::domain::dto::request::auth_request::{LoginQuery, OAuthCallbackQuery};
use crate::domain::dto::response::auth_response::{CurrentUserResponse, LoginPageResponse, LoginProviderLink};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::session::{MessageLevel, SessionKey};
use crate::errors::errors::{AppError, ErrorContext};

/// 로그인 실패 시 돌아갈 경로
const LOGIN_PAGE_PATH: &str = "/user/login";

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 로그인 페이지 핸들러
///
/// 세션에 쌓인 메시지는 한 번 보여준 뒤 지웁니다.
///
/// # Endpoint
/// `GET /user/login`
#[get("/login")]
pub async fn login_page(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut session = state.sessions.load(&req).await?;
    let messages = session.data_mut().drain_messages();

    let providers = state
        .networks
        .networks()
        .into_iter()
        .map(|n| LoginProviderLink {
            id: n.id,
            name: n.social_network,
            login_path: n.login_path,
        })
        .collect();

    let mut response = HttpResponse::Ok().json(LoginPageResponse { providers, messages });
    state.sessions.persist(&session, &mut response).await?;
    Ok(response)
}

/// Yelp 로그인 시작 핸들러
///
/// # Endpoint
/// `GET /user/login/yelp?destination=/node/1`
#[get("/login/yelp")]
pub async fn yelp_login(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut session = state.sessions.load(&req).await?;

    let mut response = match state
        .yelp_auth
        .begin_login(session.data_mut(), query.destination.as_deref())
        .await
    {
        Ok(url) => redirect(&url),
        Err(_) => redirect(LOGIN_PAGE_PATH),
    };

    state.sessions.persist(&session, &mut response).await?;
    Ok(response)
}

/// Yelp 콜백 핸들러
///
/// 인증된 신원은 사용자 협력자에게 넘기고, 협력자의 응답을 그대로 반환합니다.
/// 협력자가 로그인을 거부하면 세션의 state와 액세스 토큰을 비웁니다.
///
/// # Endpoint
/// `GET /user/login/yelp/callback?code={code}&state={state}`
#[get("/login/yelp/callback")]
pub async fn yelp_callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let mut session = state.sessions.load(&req).await?;

    let identity = state
        .yelp_auth
        .handle_callback(session.data_mut(), &query, state.user_manager.as_ref())
        .await;

    let mut response = match identity {
        Ok(identity) => {
            let destination = session.data_mut().destination.take();

            match state
                .user_manager
                .authenticate_user(&identity, destination.as_deref())
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    error!("Yelp 사용자 인증 실패 ({}): {}", identity.provider_user_id, e);
                    session
                        .data_mut()
                        .nullify(&[SessionKey::OAuth2State, SessionKey::AccessToken]);
                    session.data_mut().push_message(
                        MessageLevel::Error,
                        "You could not be authenticated. Please contact the administrator.",
                    );
                    redirect(LOGIN_PAGE_PATH)
                }
            }
        }
        Err(_) => redirect(LOGIN_PAGE_PATH),
    };

    state.sessions.persist(&session, &mut response).await?;
    Ok(response)
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `GET /user/logout`
#[get("/logout")]
pub async fn logout(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.load(&req).await?;
    let mut response = redirect("/");

    state.sessions.destroy(&session, &mut response).await?;

    let mut auth_cookie = Cookie::build(SessionConfig::auth_cookie_name(), "")
        .path("/")
        .finish();
    auth_cookie.make_removal();
    response
        .add_cookie(&auth_cookie)
        .context("인증 쿠키 삭제 실패")?;

    Ok(response)
}

/// 현재 인증된 사용자 정보 조회
///
/// `AuthMiddleware::required()`가 적용된 리소스에 등록합니다.
///
/// # Endpoint
/// `GET /user/me`
pub async fn current_user(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let found = state
        .users
        .find_by_id(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(CurrentUserResponse::from(found)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};

    use crate::config::AuthProvider;
    use crate::core::registry::NetworkManager;
    use crate::core::state::AppState;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::oauth::OAuthData;
    use crate::domain::models::settings::ProviderSettings;
    use crate::routes::configure_all_routes;
    use crate::testing::{memory_state, scripted_networks, yelp_settings, RecordingUserManager, ScriptedProvider};

    fn location<B>(res: &ServiceResponse<B>) -> String {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn cookie<B>(res: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
        res.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.into_owned())
    }

    fn scripted_state(settings: ProviderSettings) -> AppState {
        memory_state(scripted_networks(Arc::new(ScriptedProvider::default())), settings)
    }

    #[actix_web::test]
    async fn test_login_redirects_to_yelp_and_sets_session_cookie() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings("abc"));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/user/login/yelp").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let url = location(&res);
        assert!(url.starts_with("https://www.yelp.com/oauth2/authorize?response_type=code"));
        assert!(url.contains("client_id=abc&scope=email&state="));
        assert!(cookie(&res, "social_auth_sid").is_some());
    }

    #[actix_web::test]
    async fn test_unconfigured_login_returns_to_login_page_with_message() {
        let state = memory_state(NetworkManager::with_builtin(), yelp_settings(""));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure_all_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/user/login/yelp").to_request()).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/user/login");
        let sid = cookie(&res, "social_auth_sid").unwrap();

        let req = test::TestRequest::get().uri("/user/login").cookie(sid.clone()).to_request();
        let page: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            page["messages"][0]["message"],
            "Social Auth Yelp not configured properly. Contact site administrator."
        );
        assert_eq!(page["providers"][0]["login_path"], "/user/login/yelp");

        let req = test::TestRequest::get().uri("/user/login").cookie(sid).to_request();
        let page: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(page["messages"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_full_login_flow_creates_user_and_issues_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(scripted_state(yelp_settings("abc"))))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/user/login/yelp?destination=/node/1").to_request();
        let res = test::call_service(&app, req).await;
        let sid = cookie(&res, "social_auth_sid").unwrap();
        let url = location(&res);
        let oauth_state = url.split("state=").nth(1).unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/user/login/yelp/callback?code=C&state={}", oauth_state))
            .cookie(sid)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/node/1");
        let token = cookie(&res, "auth_token").unwrap();

        let req = test::TestRequest::get().uri("/user/me").cookie(token).to_request();
        let me: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["username"], "ada");
        assert_eq!(me["provider_user_id"], "U1");
        assert_eq!(me["email"], "a@b.com");
    }

    #[actix_web::test]
    async fn test_callback_hands_identity_and_destination_to_user_manager() {
        let users = Arc::new(RecordingUserManager::new(true));
        let state = scripted_state(yelp_settings("abc")).with_user_manager(users.clone());
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/user/login/yelp?destination=/node/7").to_request();
        let res = test::call_service(&app, req).await;
        let sid = cookie(&res, "social_auth_sid").unwrap();
        let oauth_state = location(&res).split("state=").nth(1).unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/user/login/yelp/callback?code=C&state={}", oauth_state))
            .cookie(sid)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/node/7");

        let calls = users.authenticated();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.provider_user_id, "U1");
        assert_eq!(calls[0].0.email.as_deref(), Some("a@b.com"));
        assert_eq!(calls[0].1.as_deref(), Some("/node/7"));
    }

    #[actix_web::test]
    async fn test_callback_with_wrong_state_returns_to_login_page() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(scripted_state(yelp_settings("abc"))))
                .configure(configure_all_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/user/login/yelp").to_request()).await;
        let sid = cookie(&res, "social_auth_sid").unwrap();

        let req = test::TestRequest::get()
            .uri("/user/login/yelp/callback?code=C&state=forged")
            .cookie(sid.clone())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/user/login");
        assert!(cookie(&res, "auth_token").is_none());

        let req = test::TestRequest::get().uri("/user/login").cookie(sid).to_request();
        let page: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            page["messages"][0]["message"],
            "Yelp login failed. Please try again or contact site administrator."
        );
    }

    #[actix_web::test]
    async fn test_refused_login_clears_access_token_from_session() {
        let state = scripted_state(yelp_settings("abc"));
        let mut blocked = User::new_social(
            "ada".to_string(),
            "Ada".to_string(),
            None,
            AuthProvider::Yelp,
            OAuthData {
                provider_user_id: "U1".to_string(),
                provider_profile_image: None,
                provider_data: None,
            },
            vec!["user".to_string()],
        );
        blocked.is_active = false;
        state.users.create(blocked).await.unwrap();

        let app = test::init_service(
            App::new().app_data(web::Data::new(state.clone())).configure(configure_all_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/user/login/yelp").to_request()).await;
        let sid = cookie(&res, "social_auth_sid").unwrap();
        let oauth_state = location(&res).split("state=").nth(1).unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/user/login/yelp/callback?code=C&state={}", oauth_state))
            .cookie(sid.clone())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/user/login");
        assert!(cookie(&res, "auth_token").is_none());

        let req = test::TestRequest::default().cookie(sid).to_http_request();
        let session = state.sessions.load(&req).await.unwrap();
        assert!(!session.is_new());
        assert!(session.data().access_token.is_none());
        assert!(session.data().oauth2state.is_none());
        assert_eq!(
            session.data().messages[0].message,
            "You could not be authenticated. Please contact the administrator."
        );
    }

    #[actix_web::test]
    async fn test_me_requires_authentication() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(scripted_state(yelp_settings("abc"))))
                .configure(configure_all_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/user/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_logout_clears_cookies() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(scripted_state(yelp_settings("abc"))))
                .configure(configure_all_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/user/logout").to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
        assert_eq!(cookie(&res, "auth_token").unwrap().value(), "");
        assert_eq!(cookie(&res, "social_auth_sid").unwrap().value(), "");
    }
}
