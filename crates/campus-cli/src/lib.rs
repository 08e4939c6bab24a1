//! # campus-cli: Command-Line Tool for the Campus Directory
//!
//! Provides the `campus` binary.
//!
//! ## Subcommands
//!
//! - `campus groups`: split a list of names into fixed-size groups.
//! - `campus render`: print the markup for the sample directory.
//! - `campus serve`: run the HTTP API.
//!
//! ```bash
//! campus groups --size 2 Ada Grace Linus
//! campus render --campus 1
//! campus serve --port 3000 --seed
//! ```

pub mod groups;
pub mod render;
pub mod serve;

/// Filter directive for `-v` count. `None` defers to `RUST_LOG`.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}
