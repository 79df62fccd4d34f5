//! rFleetLog main entrypoint.

use rfleetlog::run;
use rfleetlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
