use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tracksheet", bin_name = "tracksheet", version = get_version())]
#[command(
    about = "Generate a printable trainee tracking sheet from a name|photo list",
    long_about = None
)]
pub struct Cli {
    /// Input file, one `Name|Photo URL` per line (default: images.txt next to the binary)
    pub input: Option<PathBuf>,

    /// Write the sheet without opening it in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
