use std::io::IsTerminal;
use std::sync::OnceLock;

use todo_config::{OutputConfig, OutputFormat};

use crate::cli::ColorMode;
use crate::output::Target;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(color: ColorMode, quiet: bool, output: &OutputConfig) {
    let target = Target::parse(&output.output);
    let target_is_tty = match target {
        Target::Stdout => std::io::stdout().is_terminal(),
        Target::Stderr => std::io::stderr().is_terminal(),
        Target::File(_) => false,
    };

    let color = match color {
        ColorMode::Always => output.format == OutputFormat::Console,
        ColorMode::Never => false,
        ColorMode::Auto => {
            target_is_tty
                && output.format == OutputFormat::Console
                && std::env::var_os("NO_COLOR").is_none()
        }
    };

    // The report itself may go to stderr; never draw over it.
    let progress = !quiet && std::io::stderr().is_terminal() && target != Target::Stderr;

    let _ = UI_PREFS.set(UiPrefs { color, progress });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
    })
}
