use config::Config;
use dotenvy::dotenv;

use rentahouse::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = settings
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    rentahouse::run(server_config).await
}
