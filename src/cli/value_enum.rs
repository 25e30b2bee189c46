use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// One confirmation line
    #[default]
    Text,
    /// A single JSON object describing the run
    Json,
}
