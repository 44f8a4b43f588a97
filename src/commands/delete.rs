use crate::{
    db::clients::Clients,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Client ID
    id: i64,

    #[arg(long, short, help = "Delete without asking for confirmation")]
    yes: bool,
}

/// Deletes a client. Archived packages, pauses and activities go with it.
pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut clients = Clients::new()?;
    let client = clients.get(args.id)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteClient(client.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    clients.delete(client.id)?;
    msg_success!(Message::ClientDeleted(client.name));
    Ok(())
}
