//! Command-line smoke check for the API client.
//!
//! Prints the menu, and the user's cart when `RESTAURANT_EMAIL` and
//! `RESTAURANT_PASSWORD` are set. Configuration comes from the environment
//! (see `restaurant_client::config`).

use lib_utils::envs::get_env;
use restaurant_client::config::init_config;
use restaurant_client::events::{event_channel, ClientEvent};
use restaurant_client::logging::{self, LogConfig};
use restaurant_client::services::api::{self, ApiClient};
use restaurant_client::Result;
use shared::{cart_total, format_price, DishQuery};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let _log_guard = logging::init(&LogConfig::from_env())?;
    let config = init_config()?;

    let (events_tx, events_rx) = event_channel();
    let client = ApiClient::builder(config.clone()).events(events_tx).build()?;

    tokio::spawn(async move {
        while let Ok(event) = events_rx.recv().await {
            if let ClientEvent::SessionExpired { reason } = &event {
                eprintln!("session expired: {}", reason);
            }
            tracing::debug!(?event, "Client event");
        }
    });

    for category in api::categories::get_categories(&client).await? {
        println!("{}", category.name);
        let query = DishQuery {
            category_id: Some(category.id),
            search: None,
        };
        for dish in api::dishes::get_dishes(&client, &query).await? {
            println!("  {:<32} {:>8}", dish.name, format_price(dish.price, "$"));
        }
    }

    if let (Ok(email), Ok(password)) = (get_env("RESTAURANT_EMAIL"), get_env("RESTAURANT_PASSWORD")) {
        let session = api::auth::login(&client, email, password).await?;
        let cart = api::cart::get_cart(&client, session.user.id).await?;
        println!();
        println!("Cart for {} ({} items)", session.user.name, cart.len());
        for item in &cart {
            println!("  {} x{:<3} {:>8}", item.name, item.quantity, format_price(item.line_total(), "$"));
        }
        println!("  total {:>8}", format_price(cart_total(&cart), "$"));
        api::auth::logout(&client).await?;
    }

    Ok(())
}
