//! Job Board Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod seed;
pub mod error;
pub mod search;
pub mod panel;
pub mod request;
pub mod api_error;

pub use types::{EmploymentType, Listing, WorkArrangement};
pub use seed::seed_listings;
pub use error::{Error, Result};
pub use search::{filter_listings, matches_filters, matches_search, sort_listings, visible_listings, FilterSelection};
pub use panel::{DetailView, PanelState, EMPTY_SELECTION_PROMPT, NO_RESULTS_MESSAGE};
pub use request::{join_url, ApiLogEntry, HttpMethod, RawResponse, RequestOptions, DEFAULT_API_BASE_URL};
pub use api_error::{ApiError, legacy_error, primary_error};
