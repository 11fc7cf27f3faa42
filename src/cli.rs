use clap::{Parser, Subcommand};
use job_board_common::{EmploymentType, HttpMethod, WorkArrangement};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-board")]
#[command(about = "求人検索パネル・APIクライアントツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 求人データJSONファイル（未指定ならシードデータ）
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 求人一覧を検索・絞り込みして表示
    List {
        /// キーワード（タイトル・会社名・タグ）
        #[arg(short, long, default_value = "")]
        search: String,

        /// 勤務形態 (remote/hybrid/on-site)
        #[arg(short = 'a', long)]
        arrangement: Option<WorkArrangement>,

        /// 雇用形態 (full-time/part-time/contract/internship)
        #[arg(short = 't', long)]
        employment_type: Option<EmploymentType>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 求人の詳細を表示
    Show {
        /// 求人ID
        #[arg(required = true)]
        id: u32,
    },

    /// 対話的に求人を選んで詳細を表示
    Browse {
        /// 初期キーワード
        #[arg(short, long, default_value = "")]
        search: String,

        /// 勤務形態 (remote/hybrid/on-site)
        #[arg(short = 'a', long)]
        arrangement: Option<WorkArrangement>,

        /// 雇用形態 (full-time/part-time/contract/internship)
        #[arg(short = 't', long)]
        employment_type: Option<EmploymentType>,
    },

    /// バックエンドAPIを呼び出してレスポンスを表示
    Request {
        /// エンドポイント（例: /auth/me）
        #[arg(required = true)]
        endpoint: String,

        /// HTTPメソッド
        #[arg(short = 'X', long, default_value = "GET")]
        method: HttpMethod,

        /// リクエストボディ（JSON）
        #[arg(short = 'd', long = "body")]
        body: Option<String>,

        /// 追加ヘッダ（"Name: value"、複数指定可）
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// 旧経路（Content-Type判定あり）で送信
        #[arg(long)]
        legacy: bool,
    },

    /// 設定
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
