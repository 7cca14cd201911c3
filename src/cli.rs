use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pauta", author, version, about = "Terminal dashboard for a social content agency", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, optionally filtered
    Tasks {
        /// Only tasks belonging to this client (by name)
        #[arg(short, long)]
        client: Option<String>,
        /// Only tasks in this status (todo, doing, review, done)
        #[arg(short, long)]
        status: Option<String>,
        /// Free-text search over title and client name
        #[arg(long)]
        search: Option<String>,
    },
    /// Print the kanban board, lane by lane
    Board {
        /// Emit the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Move a task to another lane
    Mv {
        /// Task title (fuzzy matched against the board)
        #[arg(value_name = "TASK")]
        task: String,
        /// Destination lane: a status or a column title
        #[arg(value_name = "LANE")]
        lane: String,
        /// Position in the destination lane (defaults to the end)
        #[arg(long)]
        at: Option<usize>,
    },
    /// Add a new board column
    AddColumn {
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// List clients
    Clients,
    /// List scheduled content events
    Events,
    /// Launch the dashboard TUI
    Tui,
    /// Generate shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}
