//! Vehicle entities

use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A single weight reading, in the unit the backend records
pub type Weight = f64;

/// Largest of `weights`, 0 when there are none
pub fn largest_weight(weights: &[Weight]) -> Weight {
    weights.iter().copied().fold(0.0, Weight::max)
}

/// A vehicle row within a client's fleet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleSummary {
    /// Vehicle identification number
    pub vin: String,
    /// Odometer reading
    pub mileage: u64,
    /// Largest recorded weight, 0 when no readings exist
    pub largest_weight: Weight,
}

impl VehicleSummary {
    /// Create a vehicle summary
    pub fn new(vin: impl Into<String>, mileage: u64, largest_weight: Weight) -> Self {
        Self {
            vin: vin.into(),
            mileage,
            largest_weight,
        }
    }

    /// Route path of this vehicle's detail screen
    pub fn detail_path(&self) -> String {
        format!("/vehicles/{}", urlencoding::encode(&self.vin))
    }
}

/// Response of `GET /clients/{name}/vehicles`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientVehicles {
    /// Client name the collection is scoped to
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vehicles: Vec<VehicleSummary>,
}

/// Response of `GET /vehicles/{vin}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleDetail {
    pub vin: String,
    /// Name of the owning client
    pub client_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub mileage: u64,
    /// Readings in measurement order; never re-sorted
    #[serde(default, deserialize_with = "null_as_empty")]
    pub weights: Vec<Weight>,
}

/// Everything about a vehicle except its weight readings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleInfo {
    pub vin: String,
    pub client_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub mileage: u64,
}

impl VehicleDetail {
    /// Split into owner info and the ordered weight readings
    pub fn into_parts(self) -> (VehicleInfo, Vec<Weight>) {
        let info = VehicleInfo {
            vin: self.vin,
            client_name: self.client_name,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            mileage: self.mileage,
        };
        (info, self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_vehicles_decode_as_empty() {
        let json = r#"{"name": "Ghost", "vehicles": null}"#;
        let fleet: ClientVehicles = serde_json::from_str(json).unwrap();
        assert_eq!(fleet.name, "Ghost");
        assert!(fleet.vehicles.is_empty());
    }

    #[test]
    fn test_missing_weights_decode_as_empty() {
        let json = r#"{
            "vin": "V1",
            "client_name": "CIA",
            "contact_name": "Stan Smith",
            "contact_email": "stan@cia.com",
            "mileage": 103
        }"#;
        let detail: VehicleDetail = serde_json::from_str(json).unwrap();
        assert!(detail.weights.is_empty());
        assert_eq!(largest_weight(&detail.weights), 0.0);
    }

    #[test]
    fn test_into_parts_keeps_measurement_order() {
        let detail = VehicleDetail {
            vin: "123456789G".to_string(),
            client_name: "Bobs Burgers".to_string(),
            contact_name: "Bob Belcher".to_string(),
            contact_email: "bob@bestburgers.com".to_string(),
            mileage: 100783,
            weights: vec![32.1, 106.0, 5.36],
        };

        assert_eq!(largest_weight(&detail.weights), 106.0);

        let (info, weights) = detail.into_parts();
        assert_eq!(info.vin, "123456789G");
        assert_eq!(info.client_name, "Bobs Burgers");
        assert_eq!(weights, vec![32.1, 106.0, 5.36]);
    }

    #[test]
    fn test_largest_weight_ignores_order() {
        assert_eq!(largest_weight(&[]), 0.0);
        assert_eq!(largest_weight(&[0.2, 23467.0, 10.6, 786.0]), 23467.0);
        assert_eq!(largest_weight(&[786.0, 10.6, 23467.0, 0.2]), 23467.0);
    }

    #[test]
    fn test_vehicle_detail_path() {
        let vehicle = VehicleSummary::new("23EFU4FW5678f39G", 103, 17.0);
        assert_eq!(vehicle.detail_path(), "/vehicles/23EFU4FW5678f39G");
    }
}
