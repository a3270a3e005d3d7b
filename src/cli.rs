use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "toolrouter")]
#[command(about = "Route free-text questions to declared HTTP data tools", long_about = None)]
pub struct Args {
    #[arg(short = 'c', long = "config", help = "Path to a YAML or JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Log matching and tool calls")]
    pub verbose: bool,

    #[arg(long = "timeout", help = "Per-tool request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(
        long = "insecure",
        help = "Skip TLS certificate validation for tool endpoints"
    )]
    pub insecure: bool,

    #[arg(long = "list-tools", help = "Print the declared tools and exit")]
    pub list_tools: bool,

    #[arg(
        long = "config-init",
        help = "Write an example config file with the builtin tools"
    )]
    pub config_init: bool,

    #[arg(help = "Question to answer once; starts an interactive session when omitted")]
    pub query: Vec<String>,
}
