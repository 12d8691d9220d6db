use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "quizdesk", about = "Serve a multiple-choice quiz")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Admin {
    #[arg(long, env = "QUIZDESK_ADMIN_USER", requires = "admin_password")]
    pub(crate) admin_user: Option<String>,

    #[arg(long, env = "QUIZDESK_ADMIN_PASSWORD", requires = "admin_user", hide_env_values = true)]
    pub(crate) admin_password: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long, env = "HOST")]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long, env = "PORT")]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgres:// url of the database")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) admin: Admin,

    #[arg(long, env = "QUIZDESK_STATIC_DIR", help = "Directory with static assets served under /")]
    pub(crate) static_dir: Option<PathBuf>,

    #[arg(long, default_value = "dev", help = "Name of the environment reported in the logs")]
    pub(crate) env: String,
}
