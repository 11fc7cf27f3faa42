//! 対話式の求人ブラウズ
//!
//! 一覧を表示 → 操作を入力 → 状態を更新、を終了まで繰り返す。
//! 状態は `PanelState` に集約し、表示リストは毎回再計算する。

use crate::error::Result;
use crate::render::{render_detail, render_option};
use dialoguer::Input;
use job_board_common::{
    EmploymentType, Listing, PanelState, WorkArrangement, NO_RESULTS_MESSAGE,
};

/// 対話アクション
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    /// 一覧の n 番目（1始まり）を選択
    Select(usize),
    /// 検索語を変更（空なら解除）
    Search(String),
    /// 勤務形態フィルタ（Noneで解除）
    Arrangement(Option<WorkArrangement>),
    /// 雇用形態フィルタ（Noneで解除）
    Employment(Option<EmploymentType>),
    /// フィルタをすべて解除
    ClearFilters,
    /// 選択解除
    ClearSelection,
    /// 一覧を再表示
    Refresh,
    Quit,
}

pub const BROWSE_HELP: &str =
    "操作: [番号]選択 [/語]検索 [a 勤務形態|any] [t 雇用形態|any] [c]フィルタ解除 [x]選択解除 [q]終了";

/// 入力行をアクションに変換
pub fn parse_browse_action(input: &str) -> std::result::Result<BrowseAction, String> {
    let trimmed = input.trim();

    if let Some(query) = trimmed.strip_prefix('/') {
        return Ok(BrowseAction::Search(query.trim().to_string()));
    }

    match trimmed {
        "" => return Ok(BrowseAction::Refresh),
        "q" | "Q" => return Ok(BrowseAction::Quit),
        "c" => return Ok(BrowseAction::ClearFilters),
        "x" => return Ok(BrowseAction::ClearSelection),
        _ => {}
    }

    if let Ok(n) = trimmed.parse::<usize>() {
        return Ok(BrowseAction::Select(n));
    }

    let (command, arg) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let arg = arg.trim();
    let is_any = arg.is_empty() || arg.eq_ignore_ascii_case("any");
    match command {
        "a" if is_any => Ok(BrowseAction::Arrangement(None)),
        "a" => arg
            .parse()
            .map(|a| BrowseAction::Arrangement(Some(a)))
            .map_err(|e: job_board_common::Error| e.to_string()),
        "t" if is_any => Ok(BrowseAction::Employment(None)),
        "t" => arg
            .parse()
            .map(|t| BrowseAction::Employment(Some(t)))
            .map_err(|e: job_board_common::Error| e.to_string()),
        _ => Err(format!("不明な操作です: {}", trimmed)),
    }
}

/// アクションを状態に適用
///
/// `Select` の番号は現在の表示リスト上の位置として解釈する。
/// 戻り値は終了するかどうか。
pub fn apply_action(
    state: &mut PanelState,
    listings: &[Listing],
    action: BrowseAction,
) -> std::result::Result<bool, String> {
    match action {
        BrowseAction::Select(n) => {
            let visible = state.visible(listings);
            let listing = n
                .checked_sub(1)
                .and_then(|i| visible.get(i))
                .ok_or_else(|| format!("番号は 1〜{} で指定してください", visible.len()))?;
            state.select(listing.id);
        }
        BrowseAction::Search(query) => state.set_search(query),
        BrowseAction::Arrangement(value) => state.set_work_arrangement(value),
        BrowseAction::Employment(value) => state.set_employment_type(value),
        BrowseAction::ClearFilters => state.clear_filters(),
        BrowseAction::ClearSelection => state.clear_selection(),
        BrowseAction::Refresh => {}
        BrowseAction::Quit => return Ok(true),
    }
    Ok(false)
}

fn print_list(state: &PanelState, listings: &[Listing]) {
    let visible = state.visible(listings);
    let mut conditions = Vec::new();
    if !state.search.trim().is_empty() {
        conditions.push(format!("検索: \"{}\"", state.search.trim()));
    }
    if let Some(a) = state.filters.work_arrangement {
        conditions.push(format!("勤務形態: {}", a));
    }
    if let Some(t) = state.filters.employment_type {
        conditions.push(format!("雇用形態: {}", t));
    }
    if !conditions.is_empty() {
        println!("({})", conditions.join(" / "));
    }

    if visible.is_empty() {
        println!("  {}", NO_RESULTS_MESSAGE);
        return;
    }

    for (i, listing) in visible.iter().enumerate() {
        let marker = if state.is_selected(listing.id) { ">" } else { " " };
        println!("{} {:>2}. {}", marker, i + 1, render_option(listing));
    }
}

/// 対話式ブラウズを実行
pub fn run_browse(listings: &[Listing], mut state: PanelState) -> Result<()> {
    println!("🔎 求人一覧: {}件", listings.len());
    println!("{}", BROWSE_HELP);
    println!("---");

    loop {
        print_list(&state, listings);
        println!();

        let input: String = Input::new()
            .with_prompt("操作")
            .allow_empty(true)
            .interact_text()?;

        let action = match parse_browse_action(&input) {
            Ok(action) => action,
            Err(message) => {
                println!("  → {}\n", message);
                continue;
            }
        };
        let shows_detail = matches!(
            action,
            BrowseAction::Select(_) | BrowseAction::ClearSelection
        );

        match apply_action(&mut state, listings, action) {
            Ok(true) => break,
            Ok(false) => {}
            Err(message) => {
                println!("  → {}\n", message);
                continue;
            }
        }

        if shows_detail {
            println!("\n{}\n", render_detail(state.detail(listings)));
        }
        println!("---");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_board_common::seed_listings;

    #[test]
    fn test_parse_basic_actions() {
        assert_eq!(parse_browse_action("3").unwrap(), BrowseAction::Select(3));
        assert_eq!(parse_browse_action(" q ").unwrap(), BrowseAction::Quit);
        assert_eq!(parse_browse_action("").unwrap(), BrowseAction::Refresh);
        assert_eq!(parse_browse_action("c").unwrap(), BrowseAction::ClearFilters);
        assert_eq!(parse_browse_action("x").unwrap(), BrowseAction::ClearSelection);
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(
            parse_browse_action("/ Security ").unwrap(),
            BrowseAction::Search("Security".into())
        );
        assert_eq!(parse_browse_action("/").unwrap(), BrowseAction::Search(String::new()));
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_browse_action("a remote").unwrap(),
            BrowseAction::Arrangement(Some(WorkArrangement::Remote))
        );
        assert_eq!(parse_browse_action("a any").unwrap(), BrowseAction::Arrangement(None));
        assert_eq!(
            parse_browse_action("t contract").unwrap(),
            BrowseAction::Employment(Some(EmploymentType::Contract))
        );
        assert!(parse_browse_action("a moon").is_err());
        assert!(parse_browse_action("zzz").is_err());
    }

    #[test]
    fn test_select_uses_visible_position() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        apply_action(&mut state, &listings, BrowseAction::Arrangement(Some(WorkArrangement::Remote)))
            .unwrap();

        // Remote の表示順は id 1, 3, 4
        apply_action(&mut state, &listings, BrowseAction::Select(2)).unwrap();
        assert_eq!(state.selected, Some(3));

        assert!(apply_action(&mut state, &listings, BrowseAction::Select(0)).is_err());
        assert!(apply_action(&mut state, &listings, BrowseAction::Select(4)).is_err());
        assert_eq!(state.selected, Some(3));
    }

    #[test]
    fn test_quit_and_clear_selection() {
        let listings = seed_listings();
        let mut state = PanelState::new();
        state.select(1);

        assert!(!apply_action(&mut state, &listings, BrowseAction::ClearSelection).unwrap());
        assert!(state.detail(&listings).is_empty());
        assert!(apply_action(&mut state, &listings, BrowseAction::Quit).unwrap());
    }
}
