use super::serve::ServerArgs;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    server: ServerArgs,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let config = args.server.resolve()?;
    let path = config.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));

    Ok(())
}
