//! 端末向けの一覧カード・詳細パネル描画

use job_board_common::{DetailView, Listing, EMPTY_SELECTION_PROMPT, NO_RESULTS_MESSAGE};
use std::fmt::Write as _;

/// 一覧カード1件分（1行目: タイトル等、2行目: 条件、3行目: タグ）
pub fn render_card(listing: &Listing) -> String {
    let featured = if listing.featured { " ★Featured" } else { "" };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] #{} {} - {}{}",
        listing.logo, listing.id, listing.title, listing.company, featured
    );
    let _ = writeln!(
        out,
        "    {} | {} | {} | {} | {}% match",
        listing.location,
        listing.work_arrangement,
        listing.employment_type,
        listing.salary,
        listing.match_percentage
    );
    let _ = write!(
        out,
        "    {} · {} applicants",
        listing.posted, listing.applicants
    );
    if !listing.tags.is_empty() {
        let _ = write!(out, " · {}", listing.tags.join(", "));
    }
    out
}

/// 一覧全体。0件なら案内文のみ。
pub fn render_list(listings: &[&Listing]) -> String {
    if listings.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }
    listings
        .iter()
        .map(|l| render_card(l))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 選択肢用の1行表示（browseで使用）
pub fn render_option(listing: &Listing) -> String {
    let featured = if listing.featured { "★ " } else { "" };
    format!(
        "{}{} - {} ({}%, {})",
        featured, listing.title, listing.company, listing.match_percentage, listing.work_arrangement
    )
}

pub fn render_detail(view: DetailView<'_>) -> String {
    let listing = match view {
        DetailView::Empty => return EMPTY_SELECTION_PROMPT.to_string(),
        DetailView::Listing(listing) => listing,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", listing.title);
    let _ = writeln!(out, "{} · {}", listing.company, listing.location);
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "勤務形態: {}", listing.work_arrangement);
    let _ = writeln!(out, "雇用形態: {}", listing.employment_type);
    let _ = writeln!(out, "給与:     {}", listing.salary);
    let _ = writeln!(out, "経験:     {}", listing.experience);
    let _ = writeln!(out, "掲載:     {} ({} applicants)", listing.posted, listing.applicants);
    let _ = writeln!(out, "マッチ度: {}%", listing.match_percentage);
    if !listing.tags.is_empty() {
        let _ = writeln!(out, "タグ:     {}", listing.tags.join(", "));
    }

    if !listing.description.is_empty() {
        let _ = writeln!(out, "\n{}", listing.description);
    }

    if !listing.requirements.is_empty() {
        let _ = writeln!(out, "\nRequirements:");
        for item in &listing.requirements {
            let _ = writeln!(out, "  • {}", item);
        }
    }

    if !listing.responsibilities.is_empty() {
        let _ = writeln!(out, "\nResponsibilities:");
        for item in &listing.responsibilities {
            let _ = writeln!(out, "  • {}", item);
        }
    }

    out.trim_end().to_string()
}
