//! Command-line front end for the todo API.
//!
//! Composes configuration, base URL resolution, the shared transport and
//! the facade, then runs one operation and prints the raw response body.

use clap::{Args, Parser, Subcommand};
use log::debug;
use todo_core::{ClientConfig, TodoApi, TodoId, TodoInput};

/// todo - talk to the todo service
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Talk to the todo service")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the service (overrides TODO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Hostname this client runs on (overrides TODO_CLIENT_HOST)
    #[arg(long, global = true)]
    pub current_host: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all todos
    List,

    /// Show one todo
    Get {
        /// Todo ID
        id: TodoId,
    },

    /// Create a todo
    Create(TodoArgs),

    /// Replace a todo's fields
    Update {
        /// Todo ID
        id: TodoId,

        #[command(flatten)]
        fields: TodoArgs,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: TodoId,
    },
}

#[derive(Args, Debug)]
pub struct TodoArgs {
    /// Title
    #[arg(short, long)]
    pub title: String,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Completion state; omitted from the request when not given
    #[arg(short, long, value_name = "true|false")]
    pub completed: Option<bool>,
}

impl From<TodoArgs> for TodoInput {
    fn from(args: TodoArgs) -> Self {
        TodoInput {
            title: Some(args.title),
            description: args.description,
            completed: args.completed,
        }
    }
}

impl Cli {
    /// Environment config with command-line overrides applied.
    fn config(&self) -> ClientConfig {
        let env = ClientConfig::from_env();
        ClientConfig {
            configured_url: self.api_url.clone().or(env.configured_url),
            current_host: self.current_host.clone().or(env.current_host),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = cli.config();
    let api = TodoApi::from_config(&config)?;
    debug!("using {}", api.transport().base_url());

    let response = match cli.command {
        Command::List => api.list_todos().await?,
        Command::Get { id } => api.get_todo(id).await?,
        Command::Create(fields) => api.create_todo(&fields.into()).await?,
        Command::Update { id, fields } => api.update_todo(id, &fields.into()).await?,
        Command::Delete { id } => api.delete_todo(id).await?,
    };

    if !response.body.is_empty() {
        println!("{}", response.body);
    }
    Ok(())
}
