use actix_web::HttpServer;
use drivebook::TokenStore;
use drivebook_rest::{config::AppConfig, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = AppConfig::default();
    let oauth = config.oauth_client();
    let tokens = TokenStore::new();
    let port = config.port;

    HttpServer::new(move || create_app!(config, oauth, tokens))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
