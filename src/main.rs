//! ttracker main entrypoint.

use ttracker::run;
use ttracker::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
