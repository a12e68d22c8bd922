//! Resource kinds of the dashboard
//!
//! Each type here plugs one API endpoint into [`ResourceController`](super::ResourceController).

use std::convert::Infallible;

use super::controller::ResourceKind;
use super::sort::SortPolicy;
use crate::fetch::{decode, Endpoint, FetchResult};
use crate::model::{
    ClientDetail, ClientSummary, ClientVehicles, VehicleDetail, VehicleInfo, VehicleSummary,
    Weight,
};

fn client_name(client: &ClientSummary) -> &str {
    &client.name
}

fn vehicle_vin(vehicle: &VehicleSummary) -> &str {
    &vehicle.vin
}

/// All clients, ascending by name
#[derive(Debug)]
pub struct ClientList;

impl ResourceKind for ClientList {
    type Param = ();
    type Header = ();
    type Row = ClientSummary;

    const NAME: &'static str = "clients";

    fn endpoint(_: &()) -> Endpoint {
        Endpoint::Clients
    }

    fn decode(body: serde_json::Value) -> FetchResult<((), Vec<ClientSummary>)> {
        let clients: Option<Vec<ClientSummary>> = decode(body)?;
        Ok(((), clients.unwrap_or_default()))
    }

    fn sort_policy() -> SortPolicy<ClientSummary> {
        SortPolicy::by_key(client_name)
    }
}

/// One client's contact details; has no rows
#[derive(Debug)]
pub struct ClientRecord;

impl ResourceKind for ClientRecord {
    type Param = String;
    type Header = ClientDetail;
    type Row = Infallible;

    const NAME: &'static str = "client";

    fn endpoint(name: &String) -> Endpoint {
        Endpoint::Client(name.clone())
    }

    fn decode(body: serde_json::Value) -> FetchResult<(ClientDetail, Vec<Infallible>)> {
        Ok((decode(body)?, Vec::new()))
    }

    fn sort_policy() -> SortPolicy<Infallible> {
        SortPolicy::preserve()
    }
}

/// A client's vehicles, ascending by VIN; header is the echoed client name
#[derive(Debug)]
pub struct ClientFleet;

impl ResourceKind for ClientFleet {
    type Param = String;
    type Header = String;
    type Row = VehicleSummary;

    const NAME: &'static str = "client_vehicles";

    fn endpoint(name: &String) -> Endpoint {
        Endpoint::ClientVehicles(name.clone())
    }

    fn decode(body: serde_json::Value) -> FetchResult<(String, Vec<VehicleSummary>)> {
        let fleet: ClientVehicles = decode(body)?;
        Ok((fleet.name, fleet.vehicles))
    }

    fn sort_policy() -> SortPolicy<VehicleSummary> {
        SortPolicy::by_key(vehicle_vin)
    }
}

/// A vehicle with its owner; rows are the weight readings in measurement order
#[derive(Debug)]
pub struct VehicleRecord;

impl ResourceKind for VehicleRecord {
    type Param = String;
    type Header = VehicleInfo;
    type Row = Weight;

    const NAME: &'static str = "vehicle";

    fn endpoint(vin: &String) -> Endpoint {
        Endpoint::Vehicle(vin.clone())
    }

    fn decode(body: serde_json::Value) -> FetchResult<(VehicleInfo, Vec<Weight>)> {
        let detail: VehicleDetail = decode(body)?;
        Ok(detail.into_parts())
    }

    fn sort_policy() -> SortPolicy<Weight> {
        SortPolicy::preserve()
    }
}
