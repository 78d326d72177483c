use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{lookups, projects, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::ui::messages::{info, success, warning};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use rusqlite::Connection;

fn resolve_status(conn: &Connection, label: &str) -> AppResult<i32> {
    if let Some(status) = lookups::status_by_label(conn, label)? {
        return Ok(status.id);
    }

    let known: Vec<String> = lookups::all_statuses(conn)?
        .into_iter()
        .map(|s| s.label)
        .collect();
    warning(format!("Known statuses: {}", known.join(", ")));

    Err(AppError::UnknownStatus(label.to_string()))
}

fn resolve_type(conn: &Connection, label: &str) -> AppResult<i32> {
    if let Some(ty) = lookups::type_by_label(conn, label)? {
        return Ok(ty.id);
    }

    let known: Vec<String> = lookups::all_types(conn)?
        .into_iter()
        .map(|t| t.label)
        .collect();
    warning(format!("Known types: {}", known.join(", ")));

    Err(AppError::UnknownType(label.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        match action {
            TaskAction::Add {
                project,
                name,
                description,
                estimated_min,
                status,
                task_type,
            } => {
                if projects::get_by_id(conn, *project)?.is_none() {
                    return Err(AppError::NotFound("project", *project));
                }

                if *estimated_min < 0 {
                    return Err(AppError::InvalidDuration(estimated_min.to_string()));
                }

                let status_label = status.as_deref().unwrap_or(&cfg.default_task_status);
                let type_label = task_type.as_deref().unwrap_or(&cfg.default_task_type);

                let status_id = resolve_status(conn, status_label)?;
                let type_id = resolve_type(conn, type_label)?;

                let task = Task::new(
                    *project,
                    name,
                    description,
                    *estimated_min,
                    status_id,
                    type_id,
                );
                let stored = tasks::insert(conn, &task)?;

                log::audit(
                    conn,
                    "task_add",
                    &stored.id.to_string(),
                    &format!("Added task '{}' to project {}", stored.name, project),
                )?;
                success(format!("Task #{} '{}' added.", stored.id, stored.name));
            }

            TaskAction::List { project } => {
                let rows = match project {
                    Some(id) => tasks::get_by_project(conn, *id)?,
                    None => tasks::get_all(conn)?,
                };
                print_tasks(conn, &rows)?;
            }

            TaskAction::Status { id, label } => {
                let Some(mut task) = tasks::get_by_id(conn, *id)? else {
                    return Err(AppError::NotFound("task", *id));
                };

                task.status_id = resolve_status(conn, label)?;
                tasks::update(conn, &task)?;

                log::audit(
                    conn,
                    "task_status",
                    &id.to_string(),
                    &format!("Task '{}' moved to '{}'", task.name, label),
                )?;
                success(format!("Task #{} moved to '{}'.", id, label));
            }

            TaskAction::Del { id, force } => {
                let Some(task) = tasks::get_by_id(conn, *id)? else {
                    info(format!("No task with id {}, nothing to delete.", id));
                    return Ok(());
                };

                if !*force
                    && !ask_confirmation(&format!(
                        "Delete task #{} '{}'? This action is irreversible.",
                        id, task.name
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                tasks::delete(conn, *id)?;

                log::audit(
                    conn,
                    "task_del",
                    &id.to_string(),
                    &format!("Deleted task '{}'", task.name),
                )?;
                success(format!("Task #{} '{}' deleted.", id, task.name));
            }
        }
    }

    Ok(())
}

fn print_tasks(conn: &Connection, rows: &[Task]) -> AppResult<()> {
    if rows.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    // Resolve the lookup labels once per row for display.
    let mut resolved: Vec<(String, String)> = Vec::with_capacity(rows.len());
    for t in rows {
        resolved.push((
            lookups::status_label(conn, t.status_id)?,
            lookups::type_label(conn, t.type_id)?,
        ));
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: rows
                .iter()
                .map(|t| t.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2),
        },
        Column {
            header: "Project".to_string(),
            width: 7,
        },
        Column {
            header: "Name".to_string(),
            width: rows.iter().map(|t| t.name.len()).max().unwrap_or(4).max(4),
        },
        Column {
            header: "Status".to_string(),
            width: resolved.iter().map(|(s, _)| s.len()).max().unwrap_or(6).max(6),
        },
        Column {
            header: "Type".to_string(),
            width: resolved.iter().map(|(_, t)| t.len()).max().unwrap_or(4).max(4),
        },
        Column {
            header: "Estimate".to_string(),
            width: 9,
        },
    ]);

    for (t, (status, ty)) in rows.iter().zip(resolved) {
        table.add_row(vec![
            t.id.to_string(),
            t.project_id.to_string(),
            t.name.clone(),
            status,
            ty,
            mins2readable(t.estimated_min, false, false),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
