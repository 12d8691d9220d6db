use crate::admin::AdminCredentials;
use crate::opt::{Commands, Db, Run};
use crate::views::Views;
use anyhow::Result;
use axum::serve;
use clap::Parser;
use quizdesk_db::migration;
use quizdesk_db::sea_orm::{ConnectOptions, Database};
use quizdesk_utils::net::create_listener;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use url::Url;

mod admin;
mod app;
mod opt;
mod routes;
mod views;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    views: Views,
    admin: Option<AdminCredentials>,
}

/// Process wide, read-only state shared by all handlers.
#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(views: Views, admin: Option<AdminCredentials>) -> Self {
        Self(Arc::new(InnerAppConfig { views, admin }))
    }

    pub fn views(&self) -> &Views {
        &self.0.views
    }

    pub fn admin(&self) -> Option<&AdminCredentials> {
        self.0.admin.as_ref()
    }
}

async fn run(opt: Run) -> Result<()> {
    quizdesk_utils::tracing::setup(
        quizdesk_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .env(opt.env.clone())
            .build(),
    )?;

    let Run {
        host,
        port,
        database_url,
        db,
        admin,
        static_dir,
        ..
    } = opt;

    let seaorm_pool = Database::connect(build_connect_options(&db, database_url)).await?;
    migration::run(&seaorm_pool).await?;

    let admin = AdminCredentials::from_opt(admin);
    if admin.is_none() {
        tracing::warn!("no admin credentials configured, the add-question form is open to everyone");
    }

    let app_config = AppConfig::new(Views::new()?, admin);
    let app = app::create_app(app_config, Arc::new(seaorm_pool), static_dir.as_deref());

    let listener = create_listener((host, port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: Url) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

fn main() -> Result<()> {
    // A missing .env file is fine, the variables may come from the environment
    let _ = dotenvy::dotenv();

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
