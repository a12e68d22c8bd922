//! End-to-end: the dashboard driven over HTTP against the fixture API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use fleetview::{
    build_router, AppState, Dashboard, ErrorKind, FleetStore, HttpFetcher, Screen, Slot, Status,
    ViewConfig,
};

async fn spawn_api(store: FleetStore) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = build_router(AppState::new(store));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn dashboard_for(store: FleetStore) -> Dashboard<HttpFetcher> {
    let addr = spawn_api(store).await;
    let fetcher = Arc::new(HttpFetcher::new(format!("http://{}/", addr)));
    Dashboard::new(fetcher, ViewConfig::default())
}

#[tokio::test]
async fn test_clients_are_listed_alphabetically() {
    let mut dashboard = dashboard_for(FleetStore::seeded()).await;

    dashboard.navigate("/clients");
    dashboard.settle().await;

    let Screen::Clients(screen) = dashboard.screen() else {
        panic!("expected the clients screen");
    };
    let names: Vec<&str> = screen
        .clients()
        .rows()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bobs Burgers", "CIA", "Dunder Mifflin"]);
    assert_eq!(screen.clients().current_slice().range_label(), "1–3 of 3");
}

#[tokio::test]
async fn test_client_screen_over_http() {
    let mut dashboard = dashboard_for(FleetStore::seeded()).await;

    dashboard.navigate("/clients/Dunder%20Mifflin");
    dashboard.settle().await;
    assert_eq!(dashboard.title(), "Dunder Mifflin | Fleet Dashboard");

    let Screen::Client(screen) = dashboard.screen() else {
        panic!("expected the client screen");
    };
    assert!(screen.is_ready());
    assert_eq!(
        screen.detail().header().map(|c| c.contact_name.as_str()),
        Some("Michael Scott")
    );

    let vins: Vec<&str> = screen
        .vehicles()
        .rows()
        .iter()
        .map(|v| v.vin.as_str())
        .collect();
    assert_eq!(
        vins,
        vec![
            "23EFfwU4FW56789G",
            "23EFU456789G",
            "23EFU4FW56789G",
            "23EFU4FW5fe6789G"
        ]
    );
    assert_eq!(screen.vehicles().rows()[1].largest_weight, 5347890.0);

    assert_eq!(dashboard.page_size_change(Slot::ClientVehicles, 3).map(|s| s.get()), Some(3));
    assert!(dashboard.page_change(Slot::ClientVehicles, 1));
}

#[tokio::test]
async fn test_unknown_client_keeps_vehicle_area_independent() {
    let mut dashboard = dashboard_for(FleetStore::seeded()).await;

    dashboard.navigate("/clients/Initech");
    dashboard.settle().await;

    let Screen::Client(screen) = dashboard.screen() else {
        panic!("expected the client screen");
    };
    assert_eq!(screen.detail().status(), Status::Error);
    assert_eq!(
        screen.detail().error_message().as_deref(),
        Some("client does not exist")
    );
    assert_eq!(screen.vehicles().status(), Status::Ready);
    assert!(screen.vehicles().rows().is_empty());
}

#[tokio::test]
async fn test_vehicle_weights_keep_measurement_order() {
    let mut dashboard = dashboard_for(FleetStore::seeded()).await;

    dashboard.navigate("/vehicles/23EFU4FW56789G");
    dashboard.settle().await;

    let Screen::Vehicle(screen) = dashboard.screen() else {
        panic!("expected the vehicle screen");
    };
    assert_eq!(screen.vehicle().rows(), &[0.2, 23467.0, 10.6, 786.0]);
    assert_eq!(
        screen.vehicle().header().map(|v| v.client_name.as_str()),
        Some("Dunder Mifflin")
    );
}

#[tokio::test]
async fn test_missing_vehicle_surfaces_server_message() {
    let mut dashboard = dashboard_for(FleetStore::seeded()).await;

    dashboard.navigate("/vehicles/BADVIN");
    dashboard.settle().await;

    let Screen::Vehicle(screen) = dashboard.screen() else {
        panic!("expected the vehicle screen");
    };
    assert_eq!(screen.vehicle().status(), Status::Error);
    assert_eq!(screen.vehicle().error_kind(), Some(ErrorKind::NotFound));
    assert_eq!(
        screen.vehicle().error_message().as_deref(),
        Some("vehicle does not exist")
    );
}

#[tokio::test]
async fn test_last_navigation_wins_under_latency() {
    let store = FleetStore::seeded().with_latency(Duration::from_millis(50));
    let mut dashboard = dashboard_for(store).await;

    dashboard.navigate("/vehicles/123456789G");
    dashboard.navigate("/vehicles/23EFU4FW5678f39G");
    dashboard.settle().await;

    // Drain the superseded response too, whenever it lands
    while dashboard.next_completion().await.is_some() {}

    let Screen::Vehicle(screen) = dashboard.screen() else {
        panic!("expected the vehicle screen");
    };
    assert_eq!(screen.vin(), Some("23EFU4FW5678f39G"));
    assert_eq!(
        screen.vehicle().header().map(|v| v.client_name.as_str()),
        Some("CIA")
    );
    assert_eq!(screen.vehicle().rows(), &[17.0]);
}

#[tokio::test]
async fn test_unreachable_api_is_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = Arc::new(HttpFetcher::new(format!("http://{}", addr)));
    let mut dashboard = Dashboard::new(fetcher, ViewConfig::default());

    dashboard.navigate("/clients");
    dashboard.settle().await;

    let Screen::Clients(screen) = dashboard.screen() else {
        panic!("expected the clients screen");
    };
    assert_eq!(screen.clients().error_kind(), Some(ErrorKind::NetworkFailure));
    assert_eq!(
        screen.clients().error_message().as_deref(),
        Some("could not reach the server")
    );
}
