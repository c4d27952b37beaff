use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tahubu_sf::cli::run().await
}
