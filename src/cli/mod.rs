pub mod api_client;
mod commands;
pub mod error;
mod utils;


use std::net::IpAddr;

use clap::{Parser, Subcommand};

use crate::telemetry::{Output, init_tracing};

#[derive(Parser)]
#[command(name = "tsf")]
#[command(author, version, about = "Sitefinity CMS tools over MCP and REST", long_about = None)]
pub struct Cli {
    /// Sitefinity base URL (default: SITEFINITY_SITE_PREFIX env)
    #[arg(long, global = true)]
    pub site_url: Option<String>,

    /// API server used by `tools` (default: http://localhost:8000)
    #[arg(long, global = true, env = "TSF_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdin/stdout
    Stdio,
    /// Serve MCP over Streamable HTTP at /mcp
    Mcp {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Serve the REST API with OpenAPI docs at /docs
    Api {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Invoke a tool directly against the CMS
    Call {
        /// Tool name, e.g. get_news
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long)]
        params: Option<String>,
    },
    /// Use the tools of a running REST server
    Tools {
        #[command(subcommand)]
        command: ToolsCommands,
    },
}

#[derive(Subcommand)]
enum ToolsCommands {
    /// List available tools
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Run a tool
    Run {
        /// Tool name
        name: String,
        /// Tool arguments as a JSON object
        #[arg(long)]
        params: Option<String>,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stdio) => {
            init_tracing(Output::Stderr);
            let tools = commands::load_tools(cli.site_url)?;
            commands::serve::stdio(tools).await
        }
        Some(Commands::Mcp { host, port }) => {
            init_tracing(Output::Stdout);
            let tools = commands::load_tools(cli.site_url)?;
            commands::serve::mcp_http(tools, host, port).await
        }
        Some(Commands::Api { host, port }) => {
            init_tracing(Output::Stdout);
            let tools = commands::load_tools(cli.site_url)?;
            commands::serve::api(tools, host, port).await
        }
        Some(Commands::Call { tool, params }) => {
            init_tracing(Output::Stderr);
            let tools = commands::load_tools(cli.site_url)?;
            let output = commands::call::call_tool(&tools, &tool, params.as_deref()).await?;
            println!("{}", output);
            Ok(())
        }
        Some(Commands::Tools { command }) => {
            let api_client = api_client::ApiClient::new(cli.api_url);
            let output = match command {
                ToolsCommands::List { format } => {
                    commands::tools::list_tools(&api_client, &format).await?
                }
                ToolsCommands::Run { name, params } => {
                    commands::tools::run_tool(&api_client, &name, params.as_deref()).await?
                }
            };
            println!("{}", output);
            Ok(())
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["tsf", "--help"]);
            Ok(())
        }
    }
}
