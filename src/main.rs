//! Demo: register, log in, browse, fill the cart and check out.
//!
//! Runs against `QKART_ENDPOINT` when it is set, otherwise against a seeded in-memory backend.

use qkart::api::{HttpStorefront, StorefrontApi};
use qkart::cart::Adjustment;
use qkart::config::StorefrontConfig;
use qkart::lifecycle::{setup_tracing, MemoryStorefront};
use qkart::model::{Credentials, ProductDraft};
use qkart::storefront::{Storefront, StorefrontError};
use std::error::Error;
use tracing::{error, info, warn, Instrument};

fn demo_catalog() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("UNIFACTOR Mens Running Shoes", "Fashion", 50.0, 5),
        ProductDraft::new("YONEX Smash Badminton Racquet", "Sports", 100.0, 5),
        ProductDraft::new("Tan Leatherette Weekender Duffle", "Fashion", 150.0, 4),
        ProductDraft::new("The Minimalist Slim Leather Watch", "Electronics", 60.0, 5),
        ProductDraft::new("Atomberg 1200mm BLDC motor Ceiling Fan", "Home & Kitchen", 250.0, 4),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();
    let config = StorefrontConfig::from_env()?;

    match HttpStorefront::from_config(&config) {
        Some(api) => {
            let api = api?;
            info!(endpoint = api.endpoint(), "Starting storefront demo");
            walkthrough(&mut Storefront::new(api)).await?;
        }
        None => {
            info!("Starting storefront demo with in-memory backend");
            let backend = MemoryStorefront::new();
            backend.seed(demo_catalog()).await?;
            let mut storefront = Storefront::new(backend);
            walkthrough(&mut storefront).await?;
            storefront.into_api().shutdown().await?;
        }
    }

    info!("Demo completed successfully");
    Ok(())
}

async fn walkthrough<A: StorefrontApi>(
    storefront: &mut Storefront<A>,
) -> Result<(), StorefrontError> {
    let credentials = Credentials::new("crio.do", "learnbydoing");

    let span = tracing::info_span!("account");
    async {
        match storefront.register(&credentials, "learnbydoing").await {
            Ok(()) => {}
            // Expected when re-running against a persistent backend.
            Err(StorefrontError::Rejected(message)) => warn!(%message, "Registration skipped"),
            Err(e) => return Err(e),
        }
        let session = storefront.login(&credentials).await?;
        info!(username = %session.username, balance = session.balance, "Logged in");
        Ok::<(), StorefrontError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("browse");
    let picks = async {
        let catalog = storefront.load_catalog().await?;
        info!(products = catalog.len(), "Catalog loaded");
        let fashion = storefront.search("fashion").await?;
        info!(hits = fashion.len(), "Searched for fashion");
        Ok::<_, StorefrontError>(fashion.into_iter().map(|p| p.id).collect::<Vec<_>>())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("cart");
    async {
        storefront.load_cart().await?;
        for id in &picks {
            match storefront.add_to_cart(id, 1).await {
                Ok(change) => info!(product_id = %id, "{}", change),
                Err(e @ StorefrontError::AlreadyInCart(_)) => warn!("{}", e),
                Err(e) => return Err(e),
            }
        }
        if let Some(first) = picks.first() {
            let change = storefront.adjust_quantity(first, Adjustment::Increment).await?;
            info!(product_id = %first, "{}", change);
        }

        let view = storefront.cart_view();
        for item in &view.items {
            info!(name = %item.name, qty = item.quantity, value = item.value(), "Line item");
        }
        info!(
            products = view.summary.products,
            total = view.summary.total,
            "Cart priced"
        );
        Ok::<(), StorefrontError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    async {
        let book = storefront.load_addresses().await?;
        if book.all.is_empty() {
            storefront
                .add_address("221B Baker Street, London NW1 6XE")
                .await?;
        }
        if let Some(id) = storefront.addresses().all.first().map(|a| a.id.clone()) {
            storefront.select_address(&id)?;
        }

        match storefront.checkout().await {
            Ok(receipt) => info!(total = receipt.total, balance = receipt.balance, "Order placed"),
            Err(e) => error!(error = %e, "Checkout failed"),
        }
        Ok::<(), StorefrontError>(())
    }
    .instrument(span)
    .await?;

    storefront.logout();
    Ok(())
}
