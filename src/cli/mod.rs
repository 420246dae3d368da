//! CLI commands
//!
//! Command implementations for the `prflow` binary.

mod progress;
mod run;
pub mod style;

pub use run::run;

use anstream::{eprintln, println};
use prflow::error::Error;
use style::Stylize;

/// Print a terminal error the way the user should see it
pub fn report_error(err: &Error) {
    if err.is_cancellation() {
        println!("{}", "Cancelled.".warn().for_stdout());
    } else {
        eprintln!("{}: {}", "error".error(), err);
    }
}
