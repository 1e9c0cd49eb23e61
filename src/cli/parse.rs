use std::env;

use clap::error::ErrorKind;
use clap::Parser;

use super::Cli;
use waypath_core::error::WaypathError;
use waypath_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse the process arguments.
///
/// Help and version requests, and failures without `--format json`, are
/// printed by clap, which then exits. A failure under `--format json` is
/// returned so the caller can emit the JSON error envelope instead.
pub fn parse_cli() -> std::result::Result<Cli, WaypathError> {
    Cli::try_parse().map_err(|err| {
        let informational = matches!(
            err.kind(),
            ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        if informational || !json_requested(env::args().skip(1)) {
            err.exit();
        }
        WaypathError::UsageError(err.render().to_string().trim_end().to_string())
    })
}

/// Whether raw arguments ask for `--format json`, checked before clap has
/// produced a `Cli` to read it from
fn json_requested<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(inline) => inline.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
