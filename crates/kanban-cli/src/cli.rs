use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "kanban-sync")]
#[command(about = "Command-line client for shared kanban boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board service base URL (overrides the config file)
    #[arg(long, global = true, env = "KANBAN_API_URL")]
    pub api_url: Option<String>,

    /// Acting user id, sent with every request
    #[arg(long, global = true, env = "KANBAN_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List boards you own or belong to
    Boards,
    /// Create a board owned by you
    CreateBoard {
        #[arg(long)]
        name: String,
    },
    /// Show a board with its lists and cards
    Show(BoardArg),
    /// Delete a board (owner only)
    DeleteBoard(BoardArg),
    /// Show one page of a board's activity log
    Logs(LogsArgs),
    /// Move a card to a list and index
    Move(MoveArgs),
    /// Add a list to a board
    CreateList {
        #[command(flatten)]
        board: BoardArg,
        #[arg(long)]
        name: String,
    },
    /// Rename a list
    RenameList {
        #[command(flatten)]
        board: BoardArg,
        #[arg(long)]
        list: Uuid,
        #[arg(long)]
        name: String,
    },
    /// Delete a list and its cards
    DeleteList {
        #[command(flatten)]
        board: BoardArg,
        #[arg(long)]
        list: Uuid,
    },
    /// Add a card to a list
    CreateCard(CardCreateArgs),
    /// Change a card's title and description
    UpdateCard(CardUpdateArgs),
    /// Delete a card
    DeleteCard {
        #[command(flatten)]
        board: BoardArg,
        #[arg(long)]
        card: Uuid,
    },
    /// Invite a user to a board (owner only)
    AddMember(MemberArgs),
    /// Remove a member, or yourself, from a board
    RemoveMember(MemberArgs),
}

#[derive(Args)]
pub struct BoardArg {
    #[arg(long)]
    pub board: Uuid,
}

#[derive(Args)]
pub struct LogsArgs {
    #[command(flatten)]
    pub board: BoardArg,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct MoveArgs {
    #[command(flatten)]
    pub board: BoardArg,
    #[arg(long)]
    pub card: Uuid,
    /// Target list id
    #[arg(long)]
    pub to_list: Uuid,
    /// Zero-based index in the target list; appends when past the end
    #[arg(long)]
    pub index: usize,
}

#[derive(Args)]
pub struct CardCreateArgs {
    #[command(flatten)]
    pub board: BoardArg,
    #[arg(long)]
    pub list: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[command(flatten)]
    pub board: BoardArg,
    #[arg(long)]
    pub card: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct MemberArgs {
    #[command(flatten)]
    pub board: BoardArg,
    /// User id of the member
    #[arg(long)]
    pub member: String,
}
