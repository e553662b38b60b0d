use clap::ValueEnum;
use todo_config::OutputFormat;

/// Report renderer selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    #[value(alias = "error")]
    Console,
    Json,
    #[value(alias = "infrabox")]
    Dashboard,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Console => Self::Console,
            FormatArg::Json => Self::Json,
            FormatArg::Dashboard => Self::Dashboard,
        }
    }
}

/// When to emit ANSI colors in console output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
