//! 소셜 로그인 관리자 설정 핸들러
//!
//! 관리자 역할(`admin`)이 필요한 스코프에 등록됩니다.
//!
//! # Endpoints
//!
//! - `GET /admin/config/social-api/social-auth` - 통합 목록
//! - `GET /admin/config/social-api/social-auth/yelp` - Yelp 설정 조회
//! - `PUT /admin/config/social-api/social-auth/yelp` - Yelp 설정 저장
use actix_web::{get, put, web, HttpResponse};
use log::info;
use validator::Validate;

use crate::core::registry::YELP_PLUGIN_ID;
use crate::core::state::AppState;
use crate::domain::dto::request::settings_request::UpdateSettingsRequest;
use crate::domain::dto::response::settings_response::SettingsResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 등록된 소셜 네트워크 목록
#[get("/social-auth")]
pub async fn list_integrations(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.networks.networks())
}

/// Yelp 설정 조회
///
/// 비밀값은 마스킹되며, 프로바이더 앱에 등록할 리다이렉트 URI와 Origin을 함께 반환합니다.
#[get("/social-auth/yelp")]
pub async fn get_yelp_settings(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let settings = state.settings.load(YELP_PLUGIN_ID).await?;

    Ok(HttpResponse::Ok().json(SettingsResponse::new(
        &settings,
        state.yelp_auth.redirect_uri(),
        state.yelp_auth.base_url().to_string(),
    )))
}

/// Yelp 설정 저장
#[put("/social-auth/yelp")]
pub async fn update_yelp_settings(
    admin: AuthenticatedUser,
    state: web::Data<AppState>,
    payload: web::Json<UpdateSettingsRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let saved = state
        .settings
        .save(YELP_PLUGIN_ID, payload.into_inner().into_settings())
        .await?;
    info!("관리자 {}가 Yelp 설정을 변경했습니다", admin.username);

    Ok(HttpResponse::Ok().json(SettingsResponse::new(
        &saved,
        state.yelp_auth.redirect_uri(),
        state.yelp_auth.base_url().to_string(),
    )))
}
