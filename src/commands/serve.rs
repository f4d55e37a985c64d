use crate::db::db::Db;
use crate::libs::config::Config;
use crate::web;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Overrides for the configured server settings.
#[derive(Debug, Clone, Default, Args)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
    /// SQLite database file
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl ServerArgs {
    /// Layers the flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = &self.db {
            config.database = Some(db.clone());
        }
        config
    }

    /// Full configuration: file, then environment, then these flags.
    pub fn resolve(&self) -> Result<Config> {
        Ok(self.apply(Config::read()?.apply_env()?))
    }
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    server: ServerArgs,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = args.server.resolve()?;
    let db = Db::open(config.database_path()?)?;

    web::serve(&config, db).await
}
