use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{clients, projects};
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        match action {
            ProjectAction::Add {
                client,
                name,
                description,
                estimated_min,
                hourly_rate,
                fixed_price,
                deadline,
            } => {
                // The owning client must exist before the FK insert is
                // attempted, so the user gets a readable miss.
                if clients::get_by_id(conn, *client)?.is_none() {
                    return Err(AppError::NotFound("client", *client));
                }

                let deadline =
                    parse_date(deadline).ok_or_else(|| AppError::InvalidDate(deadline.clone()))?;

                if *estimated_min < 0 {
                    return Err(AppError::InvalidDuration(estimated_min.to_string()));
                }

                let project = Project::new(
                    *client,
                    name,
                    description,
                    *estimated_min,
                    *hourly_rate,
                    *fixed_price,
                    deadline,
                );
                let stored = projects::insert(conn, &project)?;

                log::audit(
                    conn,
                    "project_add",
                    &stored.id.to_string(),
                    &format!("Added project '{}' for client {}", stored.name, client),
                )?;
                success(format!("Project #{} '{}' added.", stored.id, stored.name));
            }

            ProjectAction::List { client } => {
                let rows = match client {
                    Some(id) => projects::get_by_client(conn, *id)?,
                    None => projects::get_all(conn)?,
                };
                print_projects(&rows);
            }

            ProjectAction::Edit {
                id,
                name,
                description,
                estimated_min,
                hourly_rate,
                fixed_price,
                deadline,
            } => {
                let Some(mut project) = projects::get_by_id(conn, *id)? else {
                    return Err(AppError::NotFound("project", *id));
                };

                if let Some(v) = name {
                    project.name = v.clone();
                }
                if let Some(v) = description {
                    project.description = v.clone();
                }
                if let Some(v) = estimated_min {
                    if *v < 0 {
                        return Err(AppError::InvalidDuration(v.to_string()));
                    }
                    project.estimated_min = *v;
                }
                if let Some(v) = hourly_rate {
                    project.hourly_rate = *v;
                }
                if let Some(v) = fixed_price {
                    project.fixed_price = *v;
                }
                if let Some(v) = deadline {
                    project.deadline =
                        parse_date(v).ok_or_else(|| AppError::InvalidDate(v.clone()))?;
                }

                projects::update(conn, &project)?;

                log::audit(
                    conn,
                    "project_edit",
                    &id.to_string(),
                    &format!("Updated project '{}'", project.name),
                )?;
                success(format!("Project #{} updated.", id));
            }

            ProjectAction::Del { id, force } => {
                let Some(project) = projects::get_by_id(conn, *id)? else {
                    info(format!("No project with id {}, nothing to delete.", id));
                    return Ok(());
                };

                if !*force
                    && !ask_confirmation(&format!(
                        "Delete project #{} '{}'? This action is irreversible.",
                        id, project.name
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                projects::delete(conn, *id)?;

                log::audit(
                    conn,
                    "project_del",
                    &id.to_string(),
                    &format!("Deleted project '{}'", project.name),
                )?;
                success(format!("Project #{} '{}' deleted.", id, project.name));
            }
        }
    }

    Ok(())
}

fn print_projects(rows: &[Project]) {
    if rows.is_empty() {
        println!("No projects found.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: rows
                .iter()
                .map(|p| p.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2),
        },
        Column {
            header: "Client".to_string(),
            width: rows
                .iter()
                .map(|p| p.client_id.to_string().len())
                .max()
                .unwrap_or(6)
                .max(6),
        },
        Column {
            header: "Name".to_string(),
            width: rows.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4),
        },
        Column {
            header: "Estimate".to_string(),
            width: 9,
        },
        Column {
            header: "Deadline".to_string(),
            width: 10,
        },
    ]);

    for p in rows {
        table.add_row(vec![
            p.id.to_string(),
            p.client_id.to_string(),
            p.name.clone(),
            mins2readable(p.estimated_min, false, false),
            p.deadline_str(),
        ]);
    }

    print!("{}", table.render());
}
