use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_MAX_LOGO_BYTES: usize = 5 * 1024 * 1024; // 5 MiB

/// Room for multipart boundaries and part headers on top of the file itself.
pub const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

pub const SITE_CACHE_CONTROL: &str = "public, max-age=300";
pub const LISTING_CACHE_CONTROL: &str = "public, max-age=60";

/// Runtime settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub max_logo_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: server_port(),
            static_dir: static_dir(),
            public_dir: public_dir(),
            max_logo_bytes: max_logo_bytes(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,
        }
    }
}

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn static_dir() -> PathBuf {
    dir_from_env("STATIC_DIR", DEFAULT_STATIC_DIR)
}

pub fn public_dir() -> PathBuf {
    dir_from_env("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)
}

pub fn max_logo_bytes() -> usize {
    std::env::var("MAX_LOGO_BYTES")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_MAX_LOGO_BYTES)
}

fn dir_from_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
