use crate::{
    db::{clients::Clients, packages::Packages},
    libs::{analysis::analyze, date::parse_date, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Client ID
    id: i64,
}

/// Lists archived packages, each analysed as of the day it was archived.
pub fn cmd(args: HistoryArgs) -> Result<()> {
    let client = Clients::new()?.get(args.id)?;
    let packages = Packages::new()?.fetch_for_client(client.id)?;

    if packages.is_empty() {
        msg_info!(Message::NoArchivedPackages(client.name));
        return Ok(());
    }

    let rows: Vec<_> = packages
        .into_iter()
        .map(|package| {
            let analysis = package
                .snapshot()
                .zip(parse_date(&package.archived_on))
                .map(|(snapshot, archived_on)| analyze(&snapshot.as_client_snapshot(), archived_on));
            (package, analysis)
        })
        .collect();

    msg_print!(Message::PackagesHeader(client.name), true);
    View::packages(&rows)
}
