//! Basic usage example for restcountries-rs
//!
//! This example demonstrates the common lookups and prints the rendered cards.
//! It talks to the public APIs, so it needs network access.
//!
//!   cargo run --example basic_usage

use countries_core::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== restcountries-rs Basic Usage Example ===\n");

    let client = CountriesClient::from_env();
    println!("Endpoints: {:?}\n", client.config());

    // Example 1: One country
    println!("--- Example 1: Country by name ---");
    let finland = client.country("finland").await?;
    println!("  Name: {}", finland.common_name());
    println!("  Region: {}", finland.region);
    println!("  Population: {}M", finland.population_millions());
    println!("  Language: {:?}", finland.first_language());
    println!("  Currency: {:?}", finland.first_currency().map(|c| &c.name));
    println!();

    // Example 2: Neighbour via the alpha endpoint
    println!("--- Example 2: First neighbour ---");
    let neighbour = client.neighbour(&finland).await?;
    println!("  {} borders {}", finland.common_name(), neighbour.common_name());
    println!();

    // Example 3: Several countries in parallel
    println!("--- Example 3: Capitals of three countries ---");
    let records = client.countries(&["tanzania", "russia", "finland"]).await?;
    for r in &records {
        println!("  {}: {:?}", r.common_name(), r.first_capital());
    }
    println!();

    // Example 4: Rendering onto a container
    println!("--- Example 4: Rendered cards ---");
    let mut board = CountryBoard::new(client, HtmlContainer::new());
    board.show_country_and_neighbour("portugal").await?;
    println!("{}", board.surface().to_html()?);

    Ok(())
}
