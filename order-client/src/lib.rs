//! Order backend client
//!
//! Talks to the managed REST backend that stores menu products and
//! orders, and drives the admin edit flow on top of `order-core`.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{OrderEditSession, OrderStore};
