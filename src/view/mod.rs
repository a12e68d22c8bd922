//! View Layer
//!
//! Screen-independent logic behind every entity table:
//!
//! - **sort**: deterministic, stable ordering applied once per fetch
//! - **pagination**: page index/size state and the visible window
//! - **controller**: the generic loading/ready/error state machine
//! - **resources**: the resource kinds the dashboard instantiates it with
//!
//! # Data Flow
//!
//! ```text
//! parameter change → controller issues FetchTicket → Fetch returns JSON
//!   → decode → sort once → rows → paginate(rows, page, size) → Page
//! ```

pub mod controller;
pub mod pagination;
pub mod resources;
pub mod sort;

pub use controller::{FetchTicket, Resolution, ResourceController, ResourceKind, Status};
pub use pagination::{paginate, InvalidPageSize, Page, PageSize, Pagination};
pub use resources::{ClientFleet, ClientList, ClientRecord, VehicleRecord};
pub use sort::{locale_cmp, SortPolicy};
