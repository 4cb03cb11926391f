pub mod api;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod scoring;
pub mod services;
pub mod similarity;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::ranking::RankingService;
use crate::services::recommending::RecommendService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_rank(genre: Option<String>, year: Option<i32>, limit: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    let service = RankingService::new(config);
    service.run(genre, year, limit)
}

pub fn handle_recommend(title: &str, count: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    let service = RecommendService::new(config);
    service.run(title, count)
}
