//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for search-relay
#[derive(Parser, Debug)]
#[command(name = "search-relay")]
#[command(author, version, about = "Secret-gated LLM gateway with one-shot web search augmentation")]
#[command(long_about = r#"
search-relay serves a small web form that forwards a query to Claude or
DeepSeek. When the model says it lacks current information, the query is
searched once on Tavily and re-asked with the results appended.

Every request must carry ?secret=<shared secret>; anything else is
redirected to the configured redirect_url.

Configuration is loaded from (in priority order):
1. RELAY_* environment variables (e.g. RELAY_SERVER__BIND)
2. --config <path>     Explicit config file
3. ./relay.toml        Project-level config
4. ~/.config/search-relay/config.toml   Global config

Credentials default to the AUTH_SECRET, CLAUDE_API_KEY, DEEPSEEK_API_KEY and
TAVILY_API_KEY environment variables.

Example:
  search-relay --bind 0.0.0.0:8787 -v
"#)]
pub struct Cli {
    /// Listen address, overriding [server].bind
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
