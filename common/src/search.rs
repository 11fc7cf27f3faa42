//! 求人一覧の絞り込みと並び替え
//!
//! 処理順序:
//! 1. キーワード検索（タイトル・会社名・タグの部分一致、大文字小文字無視）
//! 2. 勤務形態・雇用形態フィルタ（選択時のみ完全一致）
//! 3. 並び替え（優先表示 → マッチ度の降順）

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{EmploymentType, Listing, WorkArrangement};

/// フィルタパネルの選択状態
///
/// `None` は「指定なし」で全件に一致する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub work_arrangement: Option<WorkArrangement>,
    pub employment_type: Option<EmploymentType>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.work_arrangement.is_none() && self.employment_type.is_none()
    }
}

/// キーワードに一致するか判定
///
/// 空白のみのキーワードは全件一致として扱う。
pub fn matches_search(listing: &Listing, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.company.to_lowercase().contains(&needle)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// フィルタ選択に一致するか判定
pub fn matches_filters(listing: &Listing, filters: &FilterSelection) -> bool {
    let arrangement_ok = filters
        .work_arrangement
        .map_or(true, |a| listing.work_arrangement == a);
    let employment_ok = filters
        .employment_type
        .map_or(true, |e| listing.employment_type == e);

    arrangement_ok && employment_ok
}

/// 検索とフィルタのAND条件で絞り込む（入力順を保持）
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    query: &str,
    filters: &FilterSelection,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches_search(listing, query) && matches_filters(listing, filters))
        .collect()
}

/// 表示順の比較: 優先表示が先、同グループ内はマッチ度の高い順
pub fn display_order(a: &Listing, b: &Listing) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.match_percentage.cmp(&a.match_percentage))
}

/// 表示順に並び替える（安定ソート）
pub fn sort_listings(listings: &mut [&Listing]) {
    listings.sort_by(|a, b| display_order(a, b));
}

/// 絞り込み＋並び替え済みの表示リスト
pub fn visible_listings<'a>(
    listings: &'a [Listing],
    query: &str,
    filters: &FilterSelection,
) -> Vec<&'a Listing> {
    let mut visible = filter_listings(listings, query, filters);
    sort_listings(&mut visible);
    visible
}
