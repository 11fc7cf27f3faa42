//! 一覧データの読み込み
//!
//! 既定はシードデータ。JSONファイル（Listing配列）を指定した場合はそちらを使う。

use crate::error::{JobBoardError, Result};
use job_board_common::{seed_listings, Listing};
use std::collections::HashSet;
use std::path::Path;

pub fn load_listings(data_file: Option<&Path>) -> Result<Vec<Listing>> {
    let Some(path) = data_file else {
        return Ok(seed_listings());
    };

    if !path.exists() {
        return Err(JobBoardError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let listings: Vec<Listing> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    if let Some(dup) = listings.iter().find(|l| !seen.insert(l.id)) {
        return Err(JobBoardError::Config(format!(
            "求人IDが重複しています: {} ({})",
            dup.id,
            path.display()
        )));
    }

    Ok(listings)
}

pub fn find_listing(listings: &[Listing], id: u32) -> Result<&Listing> {
    listings
        .iter()
        .find(|l| l.id == id)
        .ok_or(JobBoardError::ListingNotFound(id))
}
