//! Error handling example for restcountries-rs
//!
//! This example demonstrates how each kind of failure surfaces and what the
//! user ends up seeing in the container.

use countries_core::prelude::*;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== restcountries-rs Error Handling Example ===\n");

    let mut board = CountryBoard::new(CountriesClient::from_env(), HtmlContainer::new());

    // Example 1: Unknown country -> HTTP 404
    println!("--- Example 1: Searching for a non-existent country ---");
    match board.show_country("doesnotexist123").await {
        Ok(record) => println!("  Found: {}", record.common_name()),
        Err(e) => println!("  ✗ {e} (status {:?})", e.status()),
    }
    println!();

    // Example 2: Island without land borders
    println!("--- Example 2: Country without neighbours ---");
    if let Err(e) = board.show_country_and_neighbour("iceland").await {
        println!("  ✗ {e}");
    }
    println!();

    // Example 3: Invalid coordinates never reach the network
    println!("--- Example 3: Invalid coordinates ---");
    for (lat, lng) in [(91.0, 0.0), (0.0, -200.0)] {
        if let Err(e) = Coordinates::new(lat, lng) {
            println!("  ✗ {e}");
        }
    }
    println!();

    // Example 4: Racing a request against a timer
    println!("--- Example 4: Timeout ---");
    let after = Duration::from_millis(1);
    let client = board.client();
    match within(client.country("tanzania"), tokio::time::sleep(after), after).await {
        Ok(r) => println!("  Faster than {after:?}: {}", r.common_name()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // What the user sees
    println!("--- Container contents ---");
    for text in board.surface().texts() {
        println!("  {text}");
    }

    Ok(())
}
