//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 사이트 URL, 저장소 백엔드, 외부 HTTP 클라이언트 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// HTTPS 전용 쿠키를 사용해야 하는 환경인지 확인합니다.
    pub fn requires_secure_cookies(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버 호스트 (기본값: 0.0.0.0)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(4)
    }
}

/// 사이트 공개 URL 관련 설정
///
/// 프로바이더에 등록하는 리디렉션 URI는 이 값에서 파생되며 저장되지 않습니다.
pub struct SiteConfig;

impl SiteConfig {
    /// 사이트 기본 URL (끝의 `/` 제거)
    pub fn base_url() -> String {
        let url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        url.trim_end_matches('/').to_string()
    }

    /// 로그인 성공 후 목적지가 없을 때 이동할 경로
    pub fn post_login_path() -> String {
        env::var("POST_LOGIN_PATH").unwrap_or_else(|_| "/user/me".to_string())
    }

    /// 허용할 CORS Origin 목록 (쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// Redis(세션, 설정) + MongoDB(사용자)
    Persistent,
    /// 프로세스 메모리 (개발/테스트 전용)
    Memory,
}

/// 저장소 연결 설정
pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> StorageBackend {
        match env::var("STORAGE_BACKEND")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "memory" | "mem" => StorageBackend::Memory,
            _ => StorageBackend::Persistent,
        }
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "social_auth_dev".to_string())
    }
}

/// 외부 HTTP 호출(프로바이더 API)에 사용할 클라이언트 설정
///
/// 호스트 전역 네트워크 설정에 해당하며, 아웃바운드 프록시와 타임아웃을 지정합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpClientConfig {
    /// 아웃바운드 프록시 URL (예: `http://proxy.internal:3128`)
    pub proxy: Option<String>,
    /// 요청 타임아웃
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// * `HTTP_CLIENT_PROXY` - 프록시 URL (비어 있으면 사용하지 않음)
    /// * `HTTP_CLIENT_TIMEOUT_SECONDS` - 타임아웃 (기본값: 30)
    pub fn from_env() -> Self {
        let proxy = env::var("HTTP_CLIENT_PROXY")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let timeout_secs = env::var("HTTP_CLIENT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            proxy,
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        }
    }
}
