//! 求人パネルのUI状態
//!
//! 検索語・選択中の求人・フィルタパネルの開閉・フィルタ選択を保持する。
//! 表示リストは状態変更のたびに元データから再計算する（キャッシュしない）。

use serde::{Deserialize, Serialize};

use crate::search::{visible_listings, FilterSelection};
use crate::types::{EmploymentType, Listing, WorkArrangement};

/// 詳細パネル未選択時の案内文
pub const EMPTY_SELECTION_PROMPT: &str = "Select a job to view details";

/// 一覧が0件のときの案内文
pub const NO_RESULTS_MESSAGE: &str = "No jobs match your search";

/// 詳細パネルの表示内容
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Empty,
    Listing(&'a Listing),
}

impl<'a> DetailView<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, DetailView::Empty)
    }

    pub fn listing(self) -> Option<&'a Listing> {
        match self {
            DetailView::Empty => None,
            DetailView::Listing(listing) => Some(listing),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub search: String,
    /// 選択中の求人ID。絞り込みで一覧から外れても選択は維持する。
    pub selected: Option<u32>,
    pub show_filters: bool,
    pub filters: FilterSelection,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn set_work_arrangement(&mut self, value: Option<WorkArrangement>) {
        self.filters.work_arrangement = value;
    }

    pub fn set_employment_type(&mut self, value: Option<EmploymentType>) {
        self.filters.employment_type = value;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSelection::default();
    }

    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    /// 現在の状態で表示する求人一覧
    pub fn visible<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        visible_listings(listings, &self.search, &self.filters)
    }

    /// 詳細パネルの内容
    ///
    /// 選択IDがデータに存在しない場合も `Empty` を返す。
    pub fn detail<'a>(&self, listings: &'a [Listing]) -> DetailView<'a> {
        self.selected
            .and_then(|id| listings.iter().find(|l| l.id == id))
            .map_or(DetailView::Empty, DetailView::Listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_listings;

    #[test]
    fn test_initial_state_shows_everything_and_prompt() {
        let listings = seed_listings();
        let state = PanelState::new();

        assert_eq!(state.visible(&listings).len(), 5);
        assert!(state.detail(&listings).is_empty());
        assert!(!state.show_filters);
    }

    #[test]
    fn test_select_shows_exactly_that_listing() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.select(3);

        match state.detail(&listings) {
            DetailView::Listing(listing) => {
                assert_eq!(listing, &listings[2]);
                assert_eq!(listing.title, "DevOps Engineer");
            }
            DetailView::Empty => panic!("選択した求人が表示されない"),
        }
        assert!(state.is_selected(3));
        assert!(!state.is_selected(1));
        assert_eq!(state.detail(&listings).listing().map(|l| l.id), Some(3));
    }

    #[test]
    fn test_clear_selection_returns_to_prompt() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.select(1);
        state.clear_selection();

        assert_eq!(state.detail(&listings), DetailView::Empty);
    }

    #[test]
    fn test_unknown_id_renders_empty() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.select(42);

        assert!(state.detail(&listings).is_empty());
    }

    #[test]
    fn test_selection_survives_filtering() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.select(2);
        state.set_work_arrangement(Some(WorkArrangement::Remote));

        assert!(state.visible(&listings).iter().all(|l| l.id != 2));
        assert!(matches!(state.detail(&listings), DetailView::Listing(l) if l.id == 2));
    }

    #[test]
    fn test_toggle_and_clear_filters() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.toggle_filters();
        assert!(state.show_filters);

        state.set_employment_type(Some(EmploymentType::PartTime));
        assert_eq!(state.visible(&listings).len(), 1);

        state.clear_filters();
        assert!(state.filters.is_empty());
        assert_eq!(state.visible(&listings).len(), 5);

        state.toggle_filters();
        assert!(!state.show_filters);
    }

    #[test]
    fn test_search_and_filter_together() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.set_search("engineer");
        state.set_work_arrangement(Some(WorkArrangement::Remote));

        let ids: Vec<u32> = state.visible(&listings).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        state.set_search("nothing-matches-this");
        assert!(state.visible(&listings).is_empty());
    }
}
