use clap::Parser;

/// Utility endpoints: favicon redirect, health check and RSA key pair generation.
#[derive(Clone, Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ServerOptions {
    /// A bind address. The default value is 0.0.0.0
    #[clap(short, long, default_value = "0.0.0.0")]
    pub bind_addr: String,
    /// The port number that the server will listen to. The default value is 8080
    #[clap(short, long, default_value = "8080")]
    pub port: u16,
    /// The number of HTTP workers. Defaults to the number of physical CPU cores
    #[clap(short, long)]
    pub workers: Option<usize>,
}


pub fn parse_options() -> ServerOptions {
    Parser::parse()
}
