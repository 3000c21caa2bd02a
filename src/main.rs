//! refectory main entrypoint.

use refectory::run;
use refectory::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("[{}] {}", e.status(), e));
        std::process::exit(1);
    }
}
