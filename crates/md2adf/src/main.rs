use crate::prelude::*;
use clap::Parser;

mod convert;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert a Markdown file into Atlassian Document Format (ADF) JSON"
)]
pub struct App {
    #[clap(flatten)]
    options: convert::ConvertOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "MD2ADF_VERBOSE", default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = parse_args();

    convert::run(app.options, app.global).map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// Help and version output still exit with status 0.
fn parse_args() -> App {
    App::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}
