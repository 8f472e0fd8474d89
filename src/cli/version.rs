//! Version command for snaplens.

/// The current version of snaplens, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("snaplens {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}
