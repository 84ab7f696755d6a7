use crate::context::CliContext;
use crate::output;
use kanban_domain::{BoardId, List, ListId};

pub async fn create_list(ctx: &CliContext, board_id: BoardId, name: String) -> anyhow::Result<()> {
    List::validate_name(&name)?;
    let session = ctx.session(board_id).await?;
    session.create_list(&name).await?;
    output::output_list(session.board().map(|b| b.lists).unwrap_or_default())
}

pub async fn rename_list(
    ctx: &CliContext,
    board_id: BoardId,
    list_id: ListId,
    name: String,
) -> anyhow::Result<()> {
    List::validate_name(&name)?;
    let session = ctx.session(board_id).await?;
    session.rename_list(list_id, &name).await?;
    match session.board().and_then(|b| b.list(list_id).cloned()) {
        Some(list) => output::output_success(&list),
        None => output::output_error(&format!("List not found: {}", list_id)),
    }
}

pub async fn delete_list(ctx: &CliContext, board_id: BoardId, list_id: ListId) -> anyhow::Result<()> {
    let session = ctx.session(board_id).await?;
    session.delete_list(list_id).await?;
    output::output_success(serde_json::json!({ "deleted": list_id.to_string() }))
}
