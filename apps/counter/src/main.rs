//! Officine counter binary.

use counter::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    counter::init_tracing();

    let config = AppConfig::load()?;
    counter::run(config).await
}
