use clap::Parser;
use job_board::{api, browse, cli, config, error, listings, render};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use job_board_common::request::{parse_header, RequestOptions};
use job_board_common::{FilterSelection, PanelState};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let data_file = cli.data_file.clone().or_else(|| config.data_file.clone());

    match cli.command {
        Commands::List { search, arrangement, employment_type, json } => {
            let all = listings::load_listings(data_file.as_deref())?;
            let filters = FilterSelection {
                work_arrangement: arrangement,
                employment_type,
            };
            let visible = job_board_common::visible_listings(&all, &search, &filters);
            tracing::debug!(total = all.len(), visible = visible.len(), "listings filtered");

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!("{}", render::render_list(&visible));
            }
        }

        Commands::Show { id } => {
            let all = listings::load_listings(data_file.as_deref())?;
            // 存在しないIDはエラーにせず、未選択時の案内を表示する
            if let Err(e) = listings::find_listing(&all, id) {
                tracing::warn!("{}", e);
            }

            let mut state = PanelState::new();
            state.select(id);
            println!("{}", render::render_detail(state.detail(&all)));
        }

        Commands::Browse { search, arrangement, employment_type } => {
            let all = listings::load_listings(data_file.as_deref())?;
            let mut state = PanelState::new();
            state.set_search(search);
            state.set_work_arrangement(arrangement);
            state.set_employment_type(employment_type);
            browse::run_browse(&all, state)?;
        }

        Commands::Request { endpoint, method, body, headers, legacy } => {
            let mut options = RequestOptions::new(method);
            if let Some(raw) = body {
                // JSONとして解釈できなければ文字列のまま送る
                let value = serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw));
                options = options.with_body(value);
            }
            for raw in &headers {
                let (name, value) = parse_header(raw)?;
                options = options.with_header(name, value);
            }

            let client = api::ApiClient::new(config.api_base_url())?;
            tracing::debug!(base_url = client.base_url(), legacy, "sending request");

            let response: serde_json::Value = if legacy {
                client.legacy_request(&endpoint, &options).await?
            } else {
                client.request(&endpoint, &options).await?
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_api_base_url(url)?;
                config.save()?;
                println!("✔ APIベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url);
                println!("  有効なベースURL: {}", config.api_base_url());
                println!(
                    "  データファイル: {}",
                    config
                        .data_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(シードデータ)".into())
                );
            }
        }
    }

    Ok(())
}
