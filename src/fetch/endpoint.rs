//! API endpoints consumed by the dashboard

use std::fmt;

/// A read-only endpoint of the fleet API
///
/// The identifying parameter (client name or VIN) is part of the value, so
/// two endpoints are equal exactly when they target the same resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /clients`
    Clients,
    /// `GET /clients/{name}`
    Client(String),
    /// `GET /clients/{name}/vehicles`
    ClientVehicles(String),
    /// `GET /vehicles/{vin}`
    Vehicle(String),
}

impl Endpoint {
    /// Request path relative to the API base URL, segments percent-encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::Clients => "/clients".to_string(),
            Endpoint::Client(name) => format!("/clients/{}", urlencoding::encode(name)),
            Endpoint::ClientVehicles(name) => {
                format!("/clients/{}/vehicles", urlencoding::encode(name))
            }
            Endpoint::Vehicle(vin) => format!("/vehicles/{}", urlencoding::encode(vin)),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.path())
    }
}
