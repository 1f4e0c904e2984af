//! # QKart Storefront
//!
//! > **The client side of an online shop: catalog, cart, addresses and checkout.**
//!
//! The heart of the crate is [`cart`]: it joins the sparse `(productId, qty)` entries a
//! backend keeps for a shopper's cart with the product catalog, producing priced line items
//! and the totals shown beside them. Everything else exists to feed it and act on it.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`cart`], [`model`])
//! - **Role**: Pure reconciliation and totals over the wire-shaped data model.
//! - **Key items**: [`reconcile`](cart::reconcile), [`total_value`](cart::total_value),
//!   [`QuantityUpdate`](cart::QuantityUpdate).
//!
//! ### 2. The Shopper's View ([`storefront`], [`session`], [`validation`])
//! - **Role**: Drives a backend on behalf of one shopper and keeps the last state it answered
//!   with. Form input is checked before anything is sent.
//! - **Key items**: [`Storefront`](storefront::Storefront),
//!   [`SessionContext`](session::SessionContext).
//!
//! ### 3. The Backend Seam ([`api`])
//! - **Role**: One async trait per REST surface, with an HTTP implementation.
//! - **Key items**: [`StorefrontApi`](api::StorefrontApi), [`HttpStorefront`](api::HttpStorefront).
//!
//! ### 4. The In-Memory Backend ([`framework`], [`clients`], [`lifecycle`], actors)
//! - **Role**: A complete backend built from resource actors, used by the demo and the tests.
//!   [`product_actor`] holds the catalog, [`account_actor`] the shoppers and their carts,
//!   [`grant_actor`] the bearer tokens.
//! - **Key items**: [`ResourceActor`](framework::ResourceActor),
//!   [`MemoryStorefront`](lifecycle::MemoryStorefront).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Async Context Injection
//! Actor dependencies are injected when the actor starts (`actor.run(context)`): the account
//! actor receives a [`ProductClient`](clients::ProductClient) to price carts at checkout.
//!
//! ### Concurrency Model
//! Each actor runs in its own Tokio task and processes messages sequentially, so entity
//! state needs no locks. Reconciliation itself is synchronous and allocation-only.
//!
//! ### Observability
//! `tracing` everywhere with structured fields; see [`lifecycle::tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Demo against the in-memory backend
//! RUST_LOG=info cargo run
//!
//! # Demo against a running backend
//! QKART_ENDPOINT=http://localhost:8082/api/v1 RUST_LOG=info cargo run
//! ```

pub mod account_actor;
pub mod api;
pub mod cart;
pub mod clients;
pub mod config;
pub mod framework;
pub mod grant_actor;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod session;
pub mod storefront;
pub mod validation;
