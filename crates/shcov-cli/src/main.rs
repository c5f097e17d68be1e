#![allow(missing_docs)]
#![allow(clippy::print_stderr)]

use shcov_cli::CliOpts;

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("SHCOV_LOG")
                .from_env_lossy(),
        )
        .init();

    match shcov_cli::evaluate_run(cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
