//! Fleet Data Model
//!
//! Read-only entities returned by the fleet API:
//!
//! - **client**: `ClientSummary`, `ClientDetail`
//! - **vehicle**: `VehicleSummary`, `ClientVehicles`, `VehicleDetail`, `VehicleInfo`
//!
//! A client owns many vehicles, but vehicles are fetched as a separate
//! collection scoped by client name rather than embedded in the client.
//! Weight readings are an ordered list owned by a vehicle.

mod client;
mod vehicle;

pub use client::{ClientDetail, ClientSummary};
pub use vehicle::{
    largest_weight, ClientVehicles, VehicleDetail, VehicleInfo, VehicleSummary, Weight,
};

use serde::{Deserialize, Deserializer};

/// Deserialize a collection that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
