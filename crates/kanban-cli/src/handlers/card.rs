use crate::cli::{CardCreateArgs, CardUpdateArgs, MoveArgs};
use crate::context::CliContext;
use crate::output;
use kanban_domain::{BoardId, CardId, CreateCardRequest, List, UpdateCardRequest};
use kanban_sync::MoveOutcome;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveReport {
    card_id: CardId,
    outcome: &'static str,
    lists: Vec<ListLayout>,
}

#[derive(Serialize)]
struct ListLayout {
    id: kanban_domain::ListId,
    name: String,
    cards: Vec<String>,
}

impl From<&List> for ListLayout {
    fn from(list: &List) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            cards: list.cards.iter().map(|c| c.title.clone()).collect(),
        }
    }
}

pub async fn move_card(ctx: &CliContext, args: MoveArgs) -> anyhow::Result<()> {
    let session = ctx.session(args.board.board).await?;
    let Some(location) = session.store().locate(args.card) else {
        return output::output_error(&format!("Card not found: {}", args.card));
    };

    let mover = session.mover();
    mover.drag_start(args.card, location.list_id);
    let outcome = match mover.drop_on(args.to_list, args.index).await {
        MoveOutcome::Confirmed => "moved",
        MoveOutcome::Skipped => "unchanged",
        MoveOutcome::NoGesture => "unchanged",
        MoveOutcome::Failed(message) => return output::output_error(&message),
    };

    let lists = session
        .board()
        .map(|b| b.lists.iter().map(ListLayout::from).collect())
        .unwrap_or_default();
    output::output_success(MoveReport {
        card_id: args.card,
        outcome,
        lists,
    })
}

pub async fn create_card(ctx: &CliContext, args: CardCreateArgs) -> anyhow::Result<()> {
    CreateCardRequest::new(&args.title, args.description.as_deref())?;
    let session = ctx.session(args.board.board).await?;
    session
        .create_card(args.list, &args.title, args.description.as_deref())
        .await?;
    match session.board().and_then(|b| b.list(args.list).cloned()) {
        Some(list) => output::output_success(&list),
        None => output::output_error(&format!("List not found: {}", args.list)),
    }
}

pub async fn update_card(ctx: &CliContext, args: CardUpdateArgs) -> anyhow::Result<()> {
    UpdateCardRequest::new(&args.title, args.description.as_deref())?;
    let session = ctx.session(args.board.board).await?;
    session
        .update_card(args.card, &args.title, args.description.as_deref())
        .await?;
    match session.board().and_then(|b| b.card(args.card).cloned()) {
        Some(card) => output::output_success(&card),
        None => output::output_error(&format!("Card not found: {}", args.card)),
    }
}

pub async fn delete_card(ctx: &CliContext, board_id: BoardId, card_id: CardId) -> anyhow::Result<()> {
    let session = ctx.session(board_id).await?;
    session.delete_card(card_id).await?;
    output::output_success(serde_json::json!({ "deleted": card_id.to_string() }))
}
