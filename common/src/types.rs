//! 求人データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Listing: 求人1件分のレコード
//! - WorkArrangement: 勤務形態（リモート/ハイブリッド/出社）
//! - EmploymentType: 雇用形態

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 勤務形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkArrangement {
    Remote,
    Hybrid,
    #[serde(rename = "On-site", alias = "OnSite")]
    OnSite,
}

impl WorkArrangement {
    pub const ALL: [WorkArrangement; 3] = [
        WorkArrangement::Remote,
        WorkArrangement::Hybrid,
        WorkArrangement::OnSite,
    ];

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            WorkArrangement::Remote => "Remote",
            WorkArrangement::Hybrid => "Hybrid",
            WorkArrangement::OnSite => "On-site",
        }
    }

    /// フォーム値・CLI引数用のkebab-case表記
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkArrangement::Remote => "remote",
            WorkArrangement::Hybrid => "hybrid",
            WorkArrangement::OnSite => "on-site",
        }
    }
}

impl fmt::Display for WorkArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkArrangement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(WorkArrangement::Remote),
            "hybrid" => Ok(WorkArrangement::Hybrid),
            "on-site" | "onsite" | "on site" => Ok(WorkArrangement::OnSite),
            _ => Err(Error::InvalidFilter(s.to_string())),
        }
    }
}

/// 雇用形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time", alias = "FullTime")]
    FullTime,
    #[serde(rename = "Part-time", alias = "PartTime")]
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Internship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmploymentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" | "fulltime" | "full time" => Ok(EmploymentType::FullTime),
            "part-time" | "parttime" | "part time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "internship" | "intern" => Ok(EmploymentType::Internship),
            _ => Err(Error::InvalidFilter(s.to_string())),
        }
    }
}

/// 求人レコード
///
/// 一覧カードと詳細パネルの両方で使う。作成・更新・削除は存在しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub company: String,

    /// ロゴ代わりの短いラベル（例: "CS"）
    pub logo: String,

    pub location: String,

    #[serde(rename = "type")]
    pub work_arrangement: WorkArrangement,

    pub employment_type: EmploymentType,

    /// 給与レンジ（自由記述）
    pub salary: String,

    /// 必要経験年数（自由記述）
    pub experience: String,

    /// 掲載からの経過（例: "2 days ago"）
    pub posted: String,

    pub applicants: u32,

    /// 事前計算済みのマッチ度（%）
    #[serde(rename = "match")]
    pub match_percentage: u8,

    /// 優先表示フラグ
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub requirements: Vec<String>,

    #[serde(default)]
    pub responsibilities: Vec<String>,
}
