use crate::cli::LogsArgs;
use crate::context::CliContext;
use crate::output;
use kanban_domain::{BoardId, CreateBoardRequest};
use kanban_sync::LoadOutcome;

pub async fn list_boards(ctx: &CliContext) -> anyhow::Result<()> {
    let boards = ctx.dashboard().load_boards().await?;
    output::output_list(boards)
}

pub async fn create_board(ctx: &CliContext, name: String) -> anyhow::Result<()> {
    let request = CreateBoardRequest::new(&name, &ctx.user_id)?;
    ctx.dashboard().create_board(&request.name).await?;
    output::output_success(&request)
}

pub async fn show(ctx: &CliContext, board_id: BoardId) -> anyhow::Result<()> {
    let session = ctx.session(board_id).await?;
    match session.board() {
        Some(board) => output::output_success(&board),
        None => output::output_error(&format!("Board not found: {}", board_id)),
    }
}

pub async fn delete_board(ctx: &CliContext, board_id: BoardId) -> anyhow::Result<()> {
    let session = ctx.session(board_id).await?;
    session.delete_board().await?;
    output::output_success(serde_json::json!({ "deleted": board_id.to_string() }))
}

pub async fn logs(ctx: &CliContext, args: LogsArgs) -> anyhow::Result<()> {
    let session = ctx.detached_session(args.board.board);
    let activity = session.activity();
    match activity.load(args.page, true, args.search).await {
        LoadOutcome::Loaded(_) => output::output_success(serde_json::json!({
            "page": activity.page(),
            "hasMore": activity.has_more(),
            "search": activity.search_term(),
            "entries": activity.entries(),
        })),
        _ => {
            let message = session
                .notifications()
                .latest()
                .map(|n| format!("{}: {}", n.title, n.message))
                .unwrap_or_else(|| "Failed to load activity log".to_string());
            output::output_error(&message)
        }
    }
}

pub async fn add_member(ctx: &CliContext, board_id: BoardId, member: String) -> anyhow::Result<()> {
    let session = ctx.session(board_id).await?;
    session.add_member(&member).await?;
    output::output_success(session.board().map(|b| b.member_ids))
}

pub async fn remove_member(
    ctx: &CliContext,
    board_id: BoardId,
    member: String,
) -> anyhow::Result<()> {
    let session = ctx.session(board_id).await?;
    if member == ctx.user_id {
        session.leave_board().await?;
        return output::output_success(serde_json::json!({ "left": board_id.to_string() }));
    }
    session.remove_member(&member).await?;
    output::output_success(session.board().map(|b| b.member_ids))
}
