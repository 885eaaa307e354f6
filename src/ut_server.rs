use actix_web::{App, HttpServer, middleware};

use readyperfectly_utility::{common, server};
use readyperfectly_utility::server::options;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let options: options::ServerOptions = options::parse_options();

    common::print_banner("Server");

    let mut http_server = HttpServer::new(|| {
        App::new()
            // enable logger
            .wrap(middleware::Logger::default())
            .configure(server::routes)
    });
    if let Some(workers) = options.workers {
        http_server = http_server.workers(workers);
    }

    log::info!("Listening on {}:{}", options.bind_addr, options.port);
    http_server
        .bind((options.bind_addr.as_str(), options.port))?
        .run()
        .await
}
