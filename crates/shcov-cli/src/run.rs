use miette::IntoDiagnostic;
use shcov_runner::runner::Runner;
use shcov_runner::transport::AppendFileTransport;
use shcov_runner::{Command, Error};

use crate::CliOpts;
use crate::report;

/// Runs the script under coverage and renders the result to stdout.
///
/// On success, returns the exit code the CLI process should terminate
/// with: the traced script's own exit code.
pub fn evaluate_run(opts: CliOpts) -> miette::Result<i32> {
    let transport = AppendFileTransport::create().into_diagnostic()?;

    let runner = Runner::builder()
        .with_transport(transport)
        .mute(opts.mute)
        .build();

    let command = Command::new(opts.bash_path)
        .arg(opts.script.display().to_string())
        .args(opts.args);

    let (status, coverage) = match runner.run(&command) {
        Ok(outcome) => (outcome.status, outcome.coverage),
        // best-effort: a drain failure degrades to partial coverage
        Err(Error::Drain {
            source,
            status,
            coverage,
        }) => {
            tracing::warn!(error = %source, "trace log drain failed; coverage is partial");
            (status, coverage)
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    let stdout = std::io::stdout().lock();

    if opts.json {
        report::render_json(&coverage, stdout).into_diagnostic()?;
    } else {
        report::render_text(&coverage, stdout).into_diagnostic()?;
    }

    Ok(status.code().unwrap_or(1))
}
