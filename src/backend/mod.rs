/// External collaborators
///
/// This module is the only place that talks to the network:
/// - Hosted backend CRUD for portfolio entries and categories (client.rs)
/// - Image host uploads and card-image fetching (images.rs)
/// - The admin gate in front of the management surface (auth.rs)
///
/// Everything returns explicit errors (error.rs); the app converts them into
/// status-line notifications and never lets one break the rest of the page.
pub mod auth;
pub mod client;
pub mod error;
pub mod images;

pub use auth::AdminGate;
pub use client::PortfolioApi;
pub use images::ImageHost;
