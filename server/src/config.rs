use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
/// Trunk output of the client crate.
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
/// Holds `us.svg`, served under `/assets/`.
pub const DEFAULT_MAP_ASSET_DIR: &str = "assets";

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

fn dir_from_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

pub fn static_dir() -> PathBuf {
    dir_from_env("STATIC_DIR", DEFAULT_STATIC_DIR)
}

pub fn map_asset_dir() -> PathBuf {
    dir_from_env("MAP_ASSET_DIR", DEFAULT_MAP_ASSET_DIR)
}
