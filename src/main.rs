//! rStopwatch main entrypoint.

use rstopwatch::run;
use rstopwatch::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
