//! In-memory fleet data
//!
//! Holds clients and vehicles the way a relational backend would: vehicles
//! reference their owner by name, and list/detail shapes are derived per
//! request. An optional delay is applied to every lookup to mimic a slow
//! database.

use std::time::Duration;

use crate::model::{
    largest_weight, ClientDetail, ClientSummary, ClientVehicles, VehicleDetail, VehicleSummary,
    Weight,
};

/// A stored client
#[derive(Debug, Clone)]
pub struct StoredClient {
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
}

/// A stored vehicle
#[derive(Debug, Clone)]
pub struct StoredVehicle {
    pub vin: String,
    pub client_name: String,
    pub mileage: u64,
    pub weights: Vec<Weight>,
}

/// Read-only store backing the fixture API
#[derive(Debug, Clone, Default)]
pub struct FleetStore {
    clients: Vec<StoredClient>,
    vehicles: Vec<StoredVehicle>,
    latency: Duration,
}

impl FleetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the demo dataset: three clients and nine vehicles
    pub fn seeded() -> Self {
        let store = Self::new()
            .with_client("Bobs Burgers", "Bob Belcher", "bob@bestburgers.com")
            .with_client("Dunder Mifflin", "Michael Scott", "bestboss@dunermifflin.com")
            .with_client("CIA", "Stan Smith", "stan@cia.com");

        let vehicles: [(&str, &str, u64, &[Weight]); 9] = [
            ("123456789G", "Bobs Burgers", 100783, &[32.1, 106.0, 5.36]),
            ("123E456789G", "Bobs Burgers", 107598, &[104.0, 2342.0]),
            ("23E456789G", "Bobs Burgers", 178783, &[9182.0, 2346.0, 56856.0]),
            ("23EFU456789G", "Dunder Mifflin", 124783, &[10.236, 10234.6, 5347890.0]),
            ("23EFU4FW56789G", "Dunder Mifflin", 10783, &[0.2, 23467.0, 10.6, 786.0]),
            ("23EFfwU4FW56789G", "Dunder Mifflin", 14783, &[14.0, 1564.0, 134.0, 1442.0]),
            ("23EFU4FW5fe6789G", "Dunder Mifflin", 1100783, &[10.36, 16.0]),
            ("23EFU4FW5678f39G", "CIA", 103, &[17.0]),
            ("23EFU4FW5678ff39G", "CIA", 0, &[10.6, 11000.0]),
        ];

        vehicles
            .into_iter()
            .fold(store, |store, (vin, client, mileage, weights)| {
                store.with_vehicle(vin, client, mileage, weights.to_vec())
            })
    }

    /// Add a client
    pub fn with_client(
        mut self,
        name: impl Into<String>,
        contact_name: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        self.clients.push(StoredClient {
            name: name.into(),
            contact_name: contact_name.into(),
            contact_email: contact_email.into(),
        });
        self
    }

    /// Add a vehicle owned by `client_name`
    pub fn with_vehicle(
        mut self,
        vin: impl Into<String>,
        client_name: impl Into<String>,
        mileage: u64,
        weights: Vec<Weight>,
    ) -> Self {
        self.vehicles.push(StoredVehicle {
            vin: vin.into(),
            client_name: client_name.into(),
            mileage,
            weights,
        });
        self
    }

    /// Delay applied to every lookup
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    async fn lookup_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn vehicles_of<'a>(&'a self, client_name: &'a str) -> impl Iterator<Item = &'a StoredVehicle> {
        self.vehicles
            .iter()
            .filter(move |v| v.client_name == client_name)
    }

    fn summarize(&self, client: &StoredClient) -> ClientSummary {
        ClientSummary::new(
            client.name.clone(),
            client.contact_name.clone(),
            client.contact_email.clone(),
            self.vehicles_of(&client.name).count() as u32,
        )
    }

    /// All clients with their vehicle counts, in insertion order
    pub async fn clients(&self) -> Vec<ClientSummary> {
        self.lookup_delay().await;
        self.clients.iter().map(|c| self.summarize(c)).collect()
    }

    /// One client by exact name
    pub async fn client(&self, name: &str) -> Option<ClientDetail> {
        self.lookup_delay().await;
        self.clients
            .iter()
            .find(|c| c.name == name)
            .map(|c| self.summarize(c).into())
    }

    /// Vehicles owned by `name`; empty for an unknown client
    pub async fn client_vehicles(&self, name: &str) -> ClientVehicles {
        self.lookup_delay().await;
        let vehicles = self
            .vehicles_of(name)
            .map(|v| VehicleSummary::new(v.vin.clone(), v.mileage, largest_weight(&v.weights)))
            .collect();

        ClientVehicles {
            name: name.to_string(),
            vehicles,
        }
    }

    /// One vehicle joined with its owner's contact details
    pub async fn vehicle(&self, vin: &str) -> Option<VehicleDetail> {
        self.lookup_delay().await;
        let vehicle = self.vehicles.iter().find(|v| v.vin == vin)?;
        let owner = self.clients.iter().find(|c| c.name == vehicle.client_name);

        Some(VehicleDetail {
            vin: vehicle.vin.clone(),
            client_name: vehicle.client_name.clone(),
            contact_name: owner.map(|c| c.contact_name.clone()).unwrap_or_default(),
            contact_email: owner.map(|c| c.contact_email.clone()).unwrap_or_default(),
            mileage: vehicle.mileage,
            weights: vehicle.weights.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_counts() {
        let store = FleetStore::seeded();
        assert_eq!(store.client_count(), 3);
        assert_eq!(store.vehicle_count(), 9);

        let clients = store.clients().await;
        let counts: Vec<(&str, u32)> = clients
            .iter()
            .map(|c| (c.name.as_str(), c.number_of_vehicles))
            .collect();
        assert_eq!(
            counts,
            vec![("Bobs Burgers", 3), ("Dunder Mifflin", 4), ("CIA", 2)]
        );
    }

    #[tokio::test]
    async fn test_client_vehicles_carry_largest_weight() {
        let store = FleetStore::seeded();
        let fleet = store.client_vehicles("CIA").await;

        assert_eq!(fleet.name, "CIA");
        assert_eq!(fleet.vehicles.len(), 2);
        assert_eq!(fleet.vehicles[0].largest_weight, 17.0);
        assert_eq!(fleet.vehicles[1].largest_weight, 11000.0);
    }

    #[tokio::test]
    async fn test_unknown_client_has_no_vehicles() {
        let store = FleetStore::seeded();
        assert!(store.client("Initech").await.is_none());
        assert!(store.client_vehicles("Initech").await.vehicles.is_empty());
    }

    #[tokio::test]
    async fn test_vehicle_joins_owner() {
        let store = FleetStore::seeded();
        let vehicle = store.vehicle("23EFU4FW56789G").await.unwrap();

        assert_eq!(vehicle.client_name, "Dunder Mifflin");
        assert_eq!(vehicle.contact_name, "Michael Scott");
        assert_eq!(vehicle.weights, vec![0.2, 23467.0, 10.6, 786.0]);
        assert!(store.vehicle("NOPE").await.is_none());
    }

    #[tokio::test]
    async fn test_vehicle_without_readings() {
        let store = FleetStore::new()
            .with_client("Acme", "Jo", "jo@acme.com")
            .with_vehicle("V1", "Acme", 5, Vec::new());

        let fleet = store.client_vehicles("Acme").await;
        assert_eq!(fleet.vehicles[0].largest_weight, 0.0);
    }
}
