//! UIコンポーネント

pub mod filter_panel;
pub mod header;
pub mod job_detail;
pub mod job_list;
pub mod search_bar;
