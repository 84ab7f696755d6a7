mod cli;
mod context;
mod handlers;
mod http;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;
use kanban_core::SyncConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_env("KANBAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }

    let cli = Cli::parse();

    let Some(user_id) = cli.user.filter(|u| !u.trim().is_empty()) else {
        output::output_error("--user is required (or set KANBAN_USER)");
    };

    let mut config = SyncConfig::load();
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    tracing::debug!(api = %config.api_base(), user = %user_id, "Using board service");

    let ctx = CliContext::new(user_id, config)?;

    let result = match cli.command {
        Commands::Boards => handlers::board::list_boards(&ctx).await,
        Commands::CreateBoard { name } => handlers::board::create_board(&ctx, name).await,
        Commands::Show(args) => handlers::board::show(&ctx, args.board).await,
        Commands::DeleteBoard(args) => handlers::board::delete_board(&ctx, args.board).await,
        Commands::Logs(args) => handlers::board::logs(&ctx, args).await,
        Commands::AddMember(args) => {
            handlers::board::add_member(&ctx, args.board.board, args.member).await
        }
        Commands::RemoveMember(args) => {
            handlers::board::remove_member(&ctx, args.board.board, args.member).await
        }
        Commands::CreateList { board, name } => {
            handlers::list::create_list(&ctx, board.board, name).await
        }
        Commands::RenameList { board, list, name } => {
            handlers::list::rename_list(&ctx, board.board, list, name).await
        }
        Commands::DeleteList { board, list } => {
            handlers::list::delete_list(&ctx, board.board, list).await
        }
        Commands::Move(args) => handlers::card::move_card(&ctx, args).await,
        Commands::CreateCard(args) => handlers::card::create_card(&ctx, args).await,
        Commands::UpdateCard(args) => handlers::card::update_card(&ctx, args).await,
        Commands::DeleteCard { board, card } => {
            handlers::card::delete_card(&ctx, board.board, card).await
        }
    };

    if let Err(e) = result {
        output::output_error(&e.to_string());
    }
    Ok(())
}
