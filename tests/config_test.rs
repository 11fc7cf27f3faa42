//! 設定・データ読み込みテスト

use job_board::config::Config;
use job_board::error::JobBoardError;
use job_board::listings::{find_listing, load_listings};
use job_board_common::{seed_listings, DEFAULT_API_BASE_URL};
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_config_uses_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert!(config.data_file.is_none());
}

/// 保存と再読み込み
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_api_base_url("https://jobs.example.com/api/".into()).unwrap();
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api_base_url, "https://jobs.example.com/api");

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"apiBaseUrl\""));
}

/// 不正なURLは拒否
#[test]
fn test_set_invalid_base_url() {
    let mut config = Config::default();
    let err = config.set_api_base_url("ftp://example.com".into()).unwrap_err();

    assert!(matches!(err, JobBoardError::Config(_)));
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

/// 環境変数の値が設定ファイルより優先
#[test]
fn test_env_overrides_base_url() {
    let config = Config::default();

    assert_eq!(
        config.resolve_base_url(Some("http://staging:9000/api".into())),
        "http://staging:9000/api"
    );
    assert_eq!(config.resolve_base_url(Some("   ".into())), DEFAULT_API_BASE_URL);
    assert_eq!(config.resolve_base_url(None), DEFAULT_API_BASE_URL);
}

/// 部分的な設定ファイルは既定値で補完
#[test]
fn test_partial_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"dataFile": "/tmp/jobs.json"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.data_file.as_deref(), Some(std::path::Path::new("/tmp/jobs.json")));
}

/// データファイル未指定ならシードデータ
#[test]
fn test_load_listings_default_seed() {
    let listings = load_listings(None).unwrap();
    assert_eq!(listings, seed_listings());
}

/// JSONファイルから読み込み
#[test]
fn test_load_listings_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.json");
    let mut listings = seed_listings();
    listings.truncate(2);
    std::fs::write(&path, serde_json::to_string(&listings).unwrap()).unwrap();

    let loaded = load_listings(Some(&path)).unwrap();
    assert_eq!(loaded, listings);
}

#[test]
fn test_load_listings_missing_file() {
    let err = load_listings(Some(std::path::Path::new("/nonexistent/jobs-12345.json"))).unwrap_err();
    assert!(matches!(err, JobBoardError::FileNotFound(_)));
}

#[test]
fn test_load_listings_duplicate_ids() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.json");
    let mut listings = seed_listings();
    listings[1].id = listings[0].id;
    std::fs::write(&path, serde_json::to_string(&listings).unwrap()).unwrap();

    let err = load_listings(Some(&path)).unwrap_err();
    assert!(matches!(err, JobBoardError::Config(_)));
}

#[test]
fn test_find_listing() {
    let listings = seed_listings();
    assert_eq!(find_listing(&listings, 4).unwrap().title, "Backend Engineer");
    assert!(matches!(
        find_listing(&listings, 99),
        Err(JobBoardError::ListingNotFound(99))
    ));
}
