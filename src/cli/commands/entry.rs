use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{entries, projects, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::project_entry::ProjectEntry;
use crate::models::task_entry::TaskEntry;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        match action {
            EntryAction::Add {
                task,
                project,
                minutes,
                billable,
            } => {
                if *minutes <= 0 {
                    return Err(AppError::InvalidDuration(minutes.to_string()));
                }

                match (task, project) {
                    (Some(task_id), None) => {
                        if tasks::get_by_id(conn, *task_id)?.is_none() {
                            return Err(AppError::NotFound("task", *task_id));
                        }

                        let entry = TaskEntry::new(*task_id, *minutes);
                        let stored = entries::insert_task_entry(conn, &entry)?;

                        log::audit(
                            conn,
                            "entry_add",
                            &stored.id.to_string(),
                            &format!("Logged {} min on task {}", minutes, task_id),
                        )?;
                        success(format!(
                            "Logged {} on task #{} ({} total).",
                            mins2readable(*minutes, false, false),
                            task_id,
                            mins2readable(entries::task_total_min(conn, *task_id)?, false, false)
                        ));
                    }
                    (None, Some(project_id)) => {
                        if projects::get_by_id(conn, *project_id)?.is_none() {
                            return Err(AppError::NotFound("project", *project_id));
                        }

                        let entry = ProjectEntry::new(*project_id, *minutes, *billable);
                        let stored = entries::insert_project_entry(conn, &entry)?;

                        log::audit(
                            conn,
                            "entry_add",
                            &stored.id.to_string(),
                            &format!("Logged {} min on project {}", minutes, project_id),
                        )?;
                        success(format!(
                            "Logged {} on project #{}{}.",
                            mins2readable(*minutes, false, false),
                            project_id,
                            if *billable { " (billable)" } else { "" }
                        ));
                    }
                    _ => {
                        return Err(AppError::Other(
                            "specify exactly one of --task or --project".to_string(),
                        ));
                    }
                }
            }

            EntryAction::List { task, project } => {
                match (task, project) {
                    (Some(task_id), None) => {
                        print_task_entries(&entries::task_entries(conn, *task_id)?);
                    }
                    (None, Some(project_id)) => {
                        print_project_entries(&entries::project_entries(conn, *project_id)?);
                    }
                    _ => {
                        // No filter: show both kinds.
                        print_task_entries(&entries::all_task_entries(conn)?);
                        print_project_entries(&entries::all_project_entries(conn)?);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_task_entries(rows: &[TaskEntry]) {
    if rows.is_empty() {
        println!("No task entries.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: rows
                .iter()
                .map(|e| e.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2),
        },
        Column {
            header: "Task".to_string(),
            width: 4,
        },
        Column {
            header: "Duration".to_string(),
            width: 9,
        },
        Column {
            header: "Logged at".to_string(),
            width: rows
                .iter()
                .map(|e| e.created_at.len())
                .max()
                .unwrap_or(9)
                .max(9),
        },
    ]);

    for e in rows {
        table.add_row(vec![
            e.id.to_string(),
            e.task_id.to_string(),
            mins2readable(e.duration_min, false, false),
            e.created_at.clone(),
        ]);
    }

    println!("TASK ENTRIES:");
    print!("{}", table.render());
}

fn print_project_entries(rows: &[ProjectEntry]) {
    if rows.is_empty() {
        println!("No project entries.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: rows
                .iter()
                .map(|e| e.id.to_string().len())
                .max()
                .unwrap_or(2)
                .max(2),
        },
        Column {
            header: "Project".to_string(),
            width: 7,
        },
        Column {
            header: "Duration".to_string(),
            width: 9,
        },
        Column {
            header: "Billable".to_string(),
            width: 8,
        },
        Column {
            header: "Logged at".to_string(),
            width: rows
                .iter()
                .map(|e| e.created_at.len())
                .max()
                .unwrap_or(9)
                .max(9),
        },
    ]);

    for e in rows {
        table.add_row(vec![
            e.id.to_string(),
            e.project_id.to_string(),
            mins2readable(e.duration_min, false, false),
            if e.billable { "yes" } else { "no" }.to_string(),
            e.created_at.clone(),
        ]);
    }

    println!("PROJECT ENTRIES:");
    print!("{}", table.render());
}
