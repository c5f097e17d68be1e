use std::path::PathBuf;

/// The shcov coverage runner.
///
/// Runs a shell script under line tracing and reports which lines of
/// which files were executed, subshells and background jobs included.
#[derive(clap::Parser)]
pub struct CliOpts {
    /// Suppress the traced script's own stdout/stderr.
    #[clap(short, long)]
    pub mute: bool,

    /// Print the coverage map as JSON instead of a text summary.
    #[clap(long)]
    pub json: bool,

    /// Bash executable used to run the script.
    #[clap(long, value_name = "PATH", default_value = "bash")]
    pub bash_path: PathBuf,

    /// Shell script to run under coverage.
    pub script: PathBuf,

    /// Script arguments.
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error.
    pub fn parse_from_cmdline() -> Self {
        <Self as clap::Parser>::parse()
    }
}
