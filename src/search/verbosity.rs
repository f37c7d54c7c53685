/// How much the binaries log to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[clap(help = "Only errors.")]
    Silent,
    #[default]
    #[clap(help = "Search start and end, with statistics.")]
    Normal,
    #[clap(help = "Also every instance and trial.")]
    Verbose,
    #[clap(help = "Everything.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
