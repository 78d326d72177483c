use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::{db_utils, stats};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        tables,
        reset,
        info: show_info,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) TABLES
        //
        if *tables {
            println!("{}Tables:{}", CYAN, RESET);
            for table in db_utils::list_tables(&pool.conn)? {
                println!("- {}", table);
            }
        }

        //
        // 2) RESET
        //
        if *reset {
            if !*force
                && !ask_confirmation(
                    "Reset the database? All data will be lost. This action is irreversible.",
                )
            {
                info("Operation cancelled.");
                return Ok(());
            }

            db_utils::reset_database(&pool.conn)?;
            log::audit(&pool.conn, "db_reset", "database", "Database reset")?;
            success("Database has been reset.");
        }

        //
        // 3) INFO
        //
        if *show_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
    }

    Ok(())
}
