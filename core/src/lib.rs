//! Client core for a products CRUD API.
//!
//! # Overview
//! Three layers, leaves first:
//! - `ProductClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//!   `ProductApi` pairs it with a `Transport` to run one call per operation.
//! - `ProductCard` renders one product and turns user actions into
//!   `CardIntent` values.
//! - `ProductPage` owns the list, the form and the loading/error state, and
//!   re-fetches the whole list after every successful change.
//!
//! # Design
//! - Nothing here is async. Each page handler finishes its request before
//!   returning, which is all the coordination a single page needs.
//! - Confirmations and notifications go through the `Prompter` trait so the
//!   page runs the same under a terminal, a GUI, or a test.

pub mod api;
pub mod card;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod page;
pub mod prompt;
pub mod transport;
pub mod types;

pub use api::ProductApi;
pub use card::{CardIntent, ProductCard};
pub use client::ProductClient;
pub use error::ApiError;
pub use form::{FormField, ProductForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{PageError, ProductPage};
pub use prompt::Prompter;
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{Price, Product, ProductId, ProductInput};
