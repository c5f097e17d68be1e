use std::fmt::Write as _;

use crate::delimiter::Delimiter;
use crate::record::{EventKind, FIELD_SEPARATOR};

/// Produces the shell-debug preamble that downstream parsing expects.
///
/// The preamble is an execution-environment script meant to be sourced by
/// every shell instance of the traced process tree (via `BASH_ENV`). It
/// enables line tracing, exports the xtrace format string (`PS4`) built
/// around the run's [Delimiter], and wraps the directory builtins so that
/// working-directory changes show up as explicit `push-dir`/`pop-dir`
/// records in the trace log.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    delimiter: Delimiter,
}

impl EmitterConfig {
    /// Creates an emitter configuration from a freshly generated delimiter.
    pub const fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Returns the delimiter this configuration was built around.
    pub const fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Returns the xtrace format string (`PS4` value).
    ///
    /// The leading `+` is a sacrificial character: the shell repeats the
    /// first character of the format string to indicate nesting depth, so
    /// it must stay outside the delimited record.
    pub fn format_string(&self) -> String {
        let d = self.delimiter.as_str();
        let fs = FIELD_SEPARATOR;
        let marker = EventKind::Hit.marker();

        format!("+{d}{marker}{fs}${{BASH_SOURCE}}{fs}${{LINENO}}{fs}${{PWD}}{d}")
    }

    /// Returns the content of the execution-environment file.
    ///
    /// The traced program's own shell options are left untouched: tracing
    /// is enabled here instead of exporting `SHELLOPTS`, which would leak
    /// unrelated options (`nounset`, `pipefail`, ...) into the traced
    /// program.
    pub fn environment_script(&self) -> String {
        let mut script = String::new();

        let _ = writeln!(script, "export PS4='{}'", self.format_string());

        for (builtin, kind) in [
            ("cd", EventKind::PushDir),
            ("pushd", EventKind::PushDir),
            ("popd", EventKind::PopDir),
        ] {
            let _ = writeln!(script, "{}", self.builtin_wrapper(builtin, kind));
        }

        // enabled last: none of the lines above may be traced, since their
        // expanded text contains delimiter and separator bytes
        let _ = writeln!(script, "set -x");

        script
    }

    /// Shell function shadowing a directory builtin.
    ///
    /// Tracing is suspended inside the wrapper body (`local -` keeps the
    /// option change scoped to the function) so that the emitting `printf`,
    /// whose echoed arguments would contain delimiter bytes, never reaches
    /// the trace descriptor through xtrace itself.
    fn builtin_wrapper(&self, builtin: &str, kind: EventKind) -> String {
        let d = self.delimiter.as_str();
        let fs = FIELD_SEPARATOR;
        let marker = kind.marker();

        format!(
            r#"{builtin}() {{
  local -
  set +x
  builtin {builtin} "$@" || return
  printf '{d}{marker}{fs}%s{fs}%s{fs}%s{d}' "${{BASH_SOURCE[1]:-}}" "${{BASH_LINENO[0]:-0}}" "$PWD" >&"$BASH_XTRACEFD"
}}"#
        )
    }
}
