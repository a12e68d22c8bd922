//! Client entities

use serde::{Deserialize, Serialize};

/// A client row as listed by `GET /clients`
///
/// `name` is unique and doubles as the client's identifier in routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSummary {
    /// Unique client name
    pub name: String,
    /// Name of the client's point of contact
    pub contact_name: String,
    /// Email of the client's point of contact
    pub contact_email: String,
    /// Number of vehicles registered to the client
    pub number_of_vehicles: u32,
}

impl ClientSummary {
    /// Create a client summary
    pub fn new(
        name: impl Into<String>,
        contact_name: impl Into<String>,
        contact_email: impl Into<String>,
        number_of_vehicles: u32,
    ) -> Self {
        Self {
            name: name.into(),
            contact_name: contact_name.into(),
            contact_email: contact_email.into(),
            number_of_vehicles,
        }
    }

    /// Route path of this client's detail screen
    pub fn detail_path(&self) -> String {
        format!("/clients/{}", urlencoding::encode(&self.name))
    }
}

/// A single client as returned by `GET /clients/{name}`
///
/// Carries the same fields as [`ClientSummary`]; kept as its own type
/// because it belongs to the detail screen, not the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientDetail {
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub number_of_vehicles: u32,
}

impl From<ClientSummary> for ClientDetail {
    fn from(summary: ClientSummary) -> Self {
        Self {
            name: summary.name,
            contact_name: summary.contact_name,
            contact_email: summary.contact_email,
            number_of_vehicles: summary.number_of_vehicles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_summary_deserialize() {
        let json = r#"{
            "name": "Acme",
            "contact_name": "Jo",
            "contact_email": "jo@acme.com",
            "number_of_vehicles": 2
        }"#;

        let client: ClientSummary = serde_json::from_str(json).unwrap();
        assert_eq!(client, ClientSummary::new("Acme", "Jo", "jo@acme.com", 2));
    }

    #[test]
    fn test_negative_vehicle_count_rejected() {
        let json = r#"{"name": "A", "contact_name": "B", "contact_email": "c", "number_of_vehicles": -1}"#;
        assert!(serde_json::from_str::<ClientSummary>(json).is_err());
    }

    #[test]
    fn test_detail_path_encodes_spaces() {
        let client = ClientSummary::new("Bobs Burgers", "Bob Belcher", "bob@bestburgers.com", 3);
        assert_eq!(client.detail_path(), "/clients/Bobs%20Burgers");
    }

    #[test]
    fn test_detail_from_summary() {
        let detail = ClientDetail::from(ClientSummary::new("CIA", "Stan Smith", "stan@cia.com", 2));
        assert_eq!(detail.name, "CIA");
        assert_eq!(detail.number_of_vehicles, 2);
    }
}
