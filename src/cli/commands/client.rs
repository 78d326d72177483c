use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{ClientAction, Commands};
use crate::config::Config;
use crate::core::client_list::ClientList;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::clients;
use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

/// Handle the `client` subcommands. All mutations go through the
/// ClientList model, so the printed state is always the post-reload
/// snapshot.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Client { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut list = ClientList::new(pool)?;

        match action {
            ClientAction::Add {
                company,
                name,
                email,
                phone,
                timezone,
            } => {
                let tz = timezone
                    .clone()
                    .unwrap_or_else(|| cfg.default_timezone.clone());

                let client = Client::new(company, name, email, phone, &tz)?;
                let stored = list.add(&client)?;

                log::audit(
                    list.conn(),
                    "client_add",
                    &stored.id.to_string(),
                    &format!("Added client '{}' ({})", stored.name, stored.company),
                )?;
                success(format!(
                    "Client #{} '{}' added ({} clients total).",
                    stored.id,
                    stored.name,
                    list.snapshot().len()
                ));
            }

            ClientAction::List => {
                print_clients(list.snapshot());
            }

            ClientAction::Edit {
                id,
                company,
                name,
                email,
                phone,
                timezone,
            } => {
                let Some(mut client) = clients::get_by_id(list.conn(), *id)? else {
                    return Err(AppError::NotFound("client", *id));
                };

                if let Some(v) = company {
                    client.company = v.clone();
                }
                if let Some(v) = name {
                    client.name = v.clone();
                }
                if let Some(v) = email {
                    client.email = v.clone();
                }
                if let Some(v) = phone {
                    client.phone_number = v.clone();
                }
                if let Some(v) = timezone {
                    client.timezone = v.clone();
                }

                client.validate()?;
                list.edit(&client)?;

                log::audit(
                    list.conn(),
                    "client_edit",
                    &id.to_string(),
                    &format!("Updated client '{}'", client.name),
                )?;
                success(format!("Client #{} updated.", id));
            }

            ClientAction::Del { id, force } => {
                let Some(client) = clients::get_by_id(list.conn(), *id)? else {
                    // Deleting an absent id is a no-op.
                    info(format!("No client with id {}, nothing to delete.", id));
                    return Ok(());
                };

                if !*force
                    && !ask_confirmation(&format!(
                        "Delete client #{} '{}'? This action is irreversible.",
                        id, client.name
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                list.remove(&client)?;

                log::audit(
                    list.conn(),
                    "client_del",
                    &id.to_string(),
                    &format!("Deleted client '{}'", client.name),
                )?;
                success(format!("Client #{} '{}' deleted.", id, client.name));
            }
        }
    }

    Ok(())
}

fn print_clients(snapshot: &[Client]) {
    if snapshot.is_empty() {
        println!("No clients yet. Add one with `ttracker client add`.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: snapshot
                .iter()
                .map(|c| c.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2),
        },
        Column {
            header: "Company".to_string(),
            width: snapshot
                .iter()
                .map(|c| c.company.len())
                .max()
                .unwrap_or(7)
                .max(7),
        },
        Column {
            header: "Name".to_string(),
            width: snapshot.iter().map(|c| c.name.len()).max().unwrap_or(4).max(4),
        },
        Column {
            header: "Email".to_string(),
            width: snapshot.iter().map(|c| c.email.len()).max().unwrap_or(5).max(5),
        },
        Column {
            header: "Phone".to_string(),
            width: snapshot
                .iter()
                .map(|c| c.phone_number.len())
                .max()
                .unwrap_or(5)
                .max(5),
        },
        Column {
            header: "Timezone".to_string(),
            width: snapshot
                .iter()
                .map(|c| c.timezone.len())
                .max()
                .unwrap_or(8)
                .max(8),
        },
    ]);

    for c in snapshot {
        table.add_row(vec![
            c.id.to_string(),
            c.company.clone(),
            c.name.clone(),
            c.email.clone(),
            c.phone_number.clone(),
            c.timezone.clone(),
        ]);
    }

    print!("{}", table.render());
}
