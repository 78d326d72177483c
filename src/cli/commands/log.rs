use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "Date".to_string(),
                width: rows.iter().map(|r| r.date.len()).max().unwrap_or(4).max(4),
            },
            Column {
                header: "Operation".to_string(),
                width: rows
                    .iter()
                    .map(|r| r.operation.len())
                    .max()
                    .unwrap_or(9)
                    .max(9),
            },
            Column {
                header: "Target".to_string(),
                width: rows.iter().map(|r| r.target.len()).max().unwrap_or(6).max(6),
            },
            Column {
                header: "Message".to_string(),
                width: rows
                    .iter()
                    .map(|r| r.message.len())
                    .max()
                    .unwrap_or(7)
                    .max(7),
            },
        ]);

        for r in rows {
            table.add_row(vec![r.date, r.operation, r.target, r.message]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
