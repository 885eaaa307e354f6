use std::path::PathBuf;
use clap::Parser;

use crate::handlers::Handler;

/// Invokes one handler the way the API gateway does: a proxy event in, a response document out.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct InvokeOptions {
    /// The handler to invoke.
    #[clap(arg_enum)]
    pub handler: Handler,

    /// A file holding the proxy event. If omitted, the event is read from stdin.
    #[clap(short, long)]
    pub event: Option<PathBuf>,

    /// Pretty print the response
    #[clap(long)]
    pub pretty: bool
}

pub fn parse_options() -> InvokeOptions {
    Parser::parse()
}
