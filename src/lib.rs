//! # Fleetview
//!
//! Fleet Dashboard - browse clients, their vehicles and weight readings from
//! a read-only REST API.
//!
//! ## Features
//!
//! - **Generic resource controller**: one loading/ready/error state machine for every entity table
//! - **Staleness discard**: late responses for a superseded parameter are dropped, never shown
//! - **Deterministic tables**: stable locale-aware sort applied once per fetch, bounded page sizes
//! - **Independent partial failure**: detail screens load their resources separately
//! - **Fixture API**: an Axum server with the demo fleet for local use and tests
//!
//! ## Modules
//!
//! - [`model`]: Entities returned by the API
//! - [`fetch`]: Remote fetch client
//! - [`view`]: Sort policy, pagination window and the resource view controller
//! - [`screen`]: Routes, screens and declarative effects
//! - [`runtime`]: Async driver tying screens to a fetch client
//! - [`api`]: Fixture REST API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fleetview::{Dashboard, HttpFetcher, Screen, ViewConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Arc::new(HttpFetcher::new("http://localhost:8080"));
//!     let mut dashboard = Dashboard::new(fetcher, ViewConfig::default());
//!
//!     dashboard.navigate("/clients");
//!     dashboard.settle().await;
//!
//!     if let Screen::Clients(screen) = dashboard.screen() {
//!         let page = screen.clients().current_slice();
//!         for client in page.items {
//!             println!("{} ({} vehicles)", client.name, client.number_of_vehicles);
//!         }
//!         println!("{}", page.range_label());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod fetch;
pub mod model;
pub mod runtime;
pub mod screen;
pub mod telemetry;
pub mod view;

// Re-export top-level types for convenience
pub use model::{
    ClientDetail, ClientSummary, ClientVehicles, VehicleDetail, VehicleInfo, VehicleSummary,
    Weight,
};

pub use fetch::{Endpoint, ErrorKind, Fetch, FetchError, FetchResult, HttpFetcher, MemoryFetcher};

pub use view::{
    paginate, FetchTicket, Page, PageSize, Pagination, Resolution, ResourceController,
    ResourceKind, SortPolicy, Status,
};

pub use screen::{Completion, Effect, FetchCommand, Route, Screen, Slot, Transition};

pub use runtime::Dashboard;

pub use api::{build_router, serve, ApiError, AppState, FleetStore};

pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig, ServerConfig, ViewConfig};
