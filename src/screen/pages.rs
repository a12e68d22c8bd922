//! Per-route screens
//!
//! Each screen owns the controllers for the resources it shows and turns
//! parameter changes into fetch commands.

use super::{Completion, FetchCommand, Slot};
use crate::view::{
    ClientFleet, ClientList, ClientRecord, FetchTicket, PageSize, Resolution, ResourceController,
    Status, VehicleRecord,
};

fn command(slot: Slot, ticket: Option<FetchTicket>) -> Option<FetchCommand> {
    ticket.map(|ticket| FetchCommand { slot, ticket })
}

fn misrouted(slot: Slot, screen: &'static str) -> Resolution {
    tracing::debug!(?slot, screen, "completion for a slot this screen does not own");
    Resolution::Stale
}

/// The client list
#[derive(Debug)]
pub struct ClientsScreen {
    clients: ResourceController<ClientList>,
}

impl ClientsScreen {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            clients: ResourceController::new(page_size),
        }
    }

    /// Start loading the list unless it is already loading or loaded
    pub fn open(&mut self) -> Vec<FetchCommand> {
        command(Slot::Clients, self.clients.set_param(())).into_iter().collect()
    }

    pub fn reload(&mut self) -> Vec<FetchCommand> {
        command(Slot::Clients, self.clients.reload()).into_iter().collect()
    }

    pub fn apply(&mut self, completion: Completion) -> Resolution {
        match completion.slot {
            Slot::Clients => self.clients.resolve(&completion.ticket, completion.result),
            slot => misrouted(slot, "clients"),
        }
    }

    pub fn clients(&self) -> &ResourceController<ClientList> {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut ResourceController<ClientList> {
        &mut self.clients
    }

    pub fn is_settled(&self) -> bool {
        self.clients.is_settled()
    }
}

/// One client: contact details plus a table of their vehicles
///
/// The two resources load independently. A failure in one leaves whatever
/// the other received in place.
#[derive(Debug)]
pub struct ClientScreen {
    detail: ResourceController<ClientRecord>,
    vehicles: ResourceController<ClientFleet>,
}

impl ClientScreen {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            detail: ResourceController::new(page_size),
            vehicles: ResourceController::new(page_size),
        }
    }

    /// Show `name`; fetches both resources when the name changes
    pub fn set_name(&mut self, name: String) -> Vec<FetchCommand> {
        let detail = command(Slot::ClientDetail, self.detail.set_param(name.clone()));
        let vehicles = command(Slot::ClientVehicles, self.vehicles.set_param(name));
        detail.into_iter().chain(vehicles).collect()
    }

    pub fn reload(&mut self) -> Vec<FetchCommand> {
        let detail = command(Slot::ClientDetail, self.detail.reload());
        let vehicles = command(Slot::ClientVehicles, self.vehicles.reload());
        detail.into_iter().chain(vehicles).collect()
    }

    pub fn apply(&mut self, completion: Completion) -> Resolution {
        match completion.slot {
            Slot::ClientDetail => self.detail.resolve(&completion.ticket, completion.result),
            Slot::ClientVehicles => self.vehicles.resolve(&completion.ticket, completion.result),
            slot => misrouted(slot, "client"),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.detail.param().map(String::as_str)
    }

    pub fn detail(&self) -> &ResourceController<ClientRecord> {
        &self.detail
    }

    pub fn vehicles(&self) -> &ResourceController<ClientFleet> {
        &self.vehicles
    }

    pub fn vehicles_mut(&mut self) -> &mut ResourceController<ClientFleet> {
        &mut self.vehicles
    }

    /// Both resources loaded successfully
    pub fn is_ready(&self) -> bool {
        self.detail.status() == Status::Ready && self.vehicles.status() == Status::Ready
    }

    pub fn is_settled(&self) -> bool {
        self.detail.is_settled() && self.vehicles.is_settled()
    }
}

/// One vehicle with its owner and weight readings
#[derive(Debug)]
pub struct VehicleScreen {
    vehicle: ResourceController<VehicleRecord>,
}

impl VehicleScreen {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            vehicle: ResourceController::new(page_size),
        }
    }

    pub fn set_vin(&mut self, vin: String) -> Vec<FetchCommand> {
        command(Slot::Vehicle, self.vehicle.set_param(vin)).into_iter().collect()
    }

    pub fn reload(&mut self) -> Vec<FetchCommand> {
        command(Slot::Vehicle, self.vehicle.reload()).into_iter().collect()
    }

    pub fn apply(&mut self, completion: Completion) -> Resolution {
        match completion.slot {
            Slot::Vehicle => self.vehicle.resolve(&completion.ticket, completion.result),
            slot => misrouted(slot, "vehicle"),
        }
    }

    pub fn vin(&self) -> Option<&str> {
        self.vehicle.param().map(String::as_str)
    }

    pub fn vehicle(&self) -> &ResourceController<VehicleRecord> {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut ResourceController<VehicleRecord> {
        &mut self.vehicle
    }

    pub fn is_settled(&self) -> bool {
        self.vehicle.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use serde_json::json;

    fn complete(command: &FetchCommand, result: crate::fetch::FetchResult<serde_json::Value>) -> Completion {
        Completion {
            slot: command.slot,
            ticket: command.ticket.clone(),
            result,
        }
    }

    fn detail_body() -> serde_json::Value {
        json!({
            "name": "CIA",
            "contact_name": "Stan Smith",
            "contact_email": "stan@cia.com",
            "number_of_vehicles": 2
        })
    }

    #[test]
    fn test_client_screen_issues_two_fetches() {
        let mut screen = ClientScreen::new(PageSize::default());
        let commands = screen.set_name("CIA".to_string());

        let paths: Vec<String> = commands.iter().map(FetchCommand::path).collect();
        assert_eq!(paths, vec!["/clients/CIA", "/clients/CIA/vehicles"]);
        assert_eq!(screen.name(), Some("CIA"));
        assert!(!screen.is_settled());
    }

    #[test]
    fn test_vehicles_failure_keeps_detail() {
        let mut screen = ClientScreen::new(PageSize::default());
        let commands = screen.set_name("CIA".to_string());

        screen.apply(complete(&commands[0], Ok(detail_body())));
        screen.apply(complete(&commands[1], Err(FetchError::server(500, None))));

        assert!(screen.is_settled());
        assert!(!screen.is_ready());
        assert_eq!(screen.detail().status(), Status::Ready);
        assert_eq!(
            screen.detail().header().map(|d| d.contact_email.as_str()),
            Some("stan@cia.com")
        );
        assert_eq!(screen.vehicles().status(), Status::Error);
        assert_eq!(
            screen.vehicles().error_message().as_deref(),
            Some("request failed with status 500")
        );
    }

    #[test]
    fn test_detail_failure_keeps_vehicles() {
        let mut screen = ClientScreen::new(PageSize::default());
        let commands = screen.set_name("CIA".to_string());

        // Vehicles land first, then the detail fails
        screen.apply(complete(
            &commands[1],
            Ok(json!({"name": "CIA", "vehicles": [{"vin": "V1", "mileage": 3, "largest_weight": 17}]})),
        ));
        screen.apply(complete(
            &commands[0],
            Err(FetchError::not_found("client does not exist")),
        ));

        assert_eq!(screen.vehicles().rows().len(), 1);
        assert_eq!(
            screen.detail().error_message().as_deref(),
            Some("client does not exist")
        );
    }

    #[test]
    fn test_same_name_does_not_refetch() {
        let mut screen = ClientScreen::new(PageSize::default());
        assert_eq!(screen.set_name("CIA".to_string()).len(), 2);
        assert!(screen.set_name("CIA".to_string()).is_empty());
        assert_eq!(screen.reload().len(), 2);
    }

    #[test]
    fn test_completion_for_wrong_slot_is_stale() {
        let mut screen = VehicleScreen::new(PageSize::default());
        let commands = screen.set_vin("V1".to_string());

        let wrong = Completion {
            slot: Slot::Clients,
            ticket: commands[0].ticket.clone(),
            result: Ok(json!([])),
        };
        assert_eq!(screen.apply(wrong), Resolution::Stale);
        assert!(screen.vehicle().is_loading());
    }

    #[test]
    fn test_clients_screen_opens_once() {
        let mut screen = ClientsScreen::new(PageSize::Three);
        let commands = screen.open();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].slot, Slot::Clients);
        assert!(screen.open().is_empty());
        assert_eq!(screen.clients().pagination().page_size(), PageSize::Three);
    }
}
