use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default directory for locally stored listing images.
pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
    /// Where uploaded images go.
    pub storage: StorageConfig,
    /// Credentials for the first administrator, created on an empty database.
    pub admin: AdminSeed,
}

/// Image storage backend selection.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Files written under `upload_dir` and served from `/uploads/{filename}`.
    Local { upload_dir: PathBuf },
    /// Objects written to an S3 bucket and referenced by public URL.
    S3 { bucket: String, region: String },
}

/// Bootstrap administrator account.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    /// When unset, no account is created and startup logs a warning.
    pub password: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `local` (`local` or `s3`)  |
    /// | `UPLOAD_DIR`           | `static/uploads`           |
    /// | `AWS_BUCKET_NAME`      | required when `s3`         |
    /// | `AWS_REGION`           | `us-east-1`                |
    /// | `ADMIN_USERNAME`       | `admin`                    |
    /// | `ADMIN_PASSWORD`       | unset                      |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let storage = StorageConfig::from_env();

        let admin = AdminSeed {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            storage,
            admin,
        }
    }
}

impl StorageConfig {
    /// # Panics
    ///
    /// Panics on an unknown `STORAGE_BACKEND`, or when `s3` is selected
    /// without `AWS_BUCKET_NAME`.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        match backend.trim().to_ascii_lowercase().as_str() {
            "local" => Self::Local {
                upload_dir: std::env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into())
                    .into(),
            },
            "s3" => Self::S3 {
                bucket: std::env::var("AWS_BUCKET_NAME")
                    .expect("AWS_BUCKET_NAME must be set when STORAGE_BACKEND=s3"),
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".into()),
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be one of: local, s3"),
        }
    }

    /// Local upload directory, if images are stored on disk.
    pub fn upload_dir(&self) -> Option<&PathBuf> {
        match self {
            Self::Local { upload_dir } => Some(upload_dir),
            Self::S3 { .. } => None,
        }
    }
}
