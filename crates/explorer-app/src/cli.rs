use clap::Parser;

/// GitHub Explorer — desktop shell for the GitHub Explorer web app.
#[derive(Parser, Debug)]
#[command(name = "explorer", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. debug, explorer=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Backend origin override, for pointing a development build at a
    /// local or staging backend.
    #[arg(long)]
    pub url: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
