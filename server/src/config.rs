use std::path::PathBuf;

use sixcities_shared::DEFAULT_NEARBY_LIMIT;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "server/data/offers.json";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn data_path() -> PathBuf {
    std::env::var("SIXCITIES_DATA")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

pub fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

pub fn nearby_limit() -> usize {
    std::env::var("NEARBY_LIMIT")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_NEARBY_LIMIT)
}
