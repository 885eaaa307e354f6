use std::process;

use readyperfectly_utility::invoke;
use readyperfectly_utility::invoke::options;


fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let options: options::InvokeOptions = options::parse_options();

    let raw_event = invoke::read_event(&options).unwrap_or_else(|e| {
        log::error!("Failed to read the event due to {}", e);
        process::exit(1);
    });

    let response = invoke::invoke(options.handler, &raw_event);
    match invoke::render(&response, options.pretty) {
        Ok(document) => println!("{}", document),
        Err(e) => {
            log::error!("Failed to render the response due to {}", e);
            process::exit(1);
        }
    }
}
