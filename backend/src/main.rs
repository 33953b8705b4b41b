use std::env;

use actix_files::Files;
use actix_web::{App, HttpServer};

#[derive(Debug, PartialEq)]
struct ServerConfig {
    address: String,
    port: u16,
    root: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            address: lookup("SITE_ADDR").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port: lookup("SITE_PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            root: lookup("SITE_ROOT").unwrap_or_else(|| "../frontend/dist".to_owned()),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    let root = config.root.clone();

    HttpServer::new(move || App::new()
        .service(Files::new("/", root.as_str()).index_file("index.html"))
    ).bind((config.address.as_str(), config.port))?.run().await
}
