//! Fleetview CLI
//!
//! Terminal front end for the fleet dashboard:
//! - List clients
//! - Show a client with their vehicles
//! - Show a vehicle with its weight readings
//! - Open any dashboard path

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

use fleetview::config::{generate_default_config, Config, LoadedConfig};
use fleetview::model::largest_weight;
use fleetview::screen::{ClientScreen, ClientsScreen, VehicleScreen};
use fleetview::{
    telemetry, Dashboard, Effect, HttpFetcher, Page, ResourceController, ResourceKind, Route,
    Screen, Slot, Status,
};

#[derive(Parser)]
#[command(name = "fleetview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse clients, their vehicles and weight readings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all clients
    Clients {
        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Rows per page (3, 5, 10 or 25)
        #[arg(short = 's', long)]
        page_size: Option<usize>,
    },

    /// Show a client and their vehicles
    Client {
        /// Client name
        name: String,
        /// Page of the vehicle table, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Rows per page (3, 5, 10 or 25)
        #[arg(short = 's', long)]
        page_size: Option<usize>,
    },

    /// Show a vehicle by VIN
    Vehicle {
        /// Vehicle identification number
        vin: String,
    },

    /// Open a dashboard path such as /clients/CIA
    Open {
        /// Path to open
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    telemetry::init(&loaded.config.logging);
    loaded.report();

    let mut config = loaded.config;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let fetcher = Arc::new(HttpFetcher::new(config.api.base_url.clone()));
    let mut dashboard = Dashboard::new(fetcher, config.view.clone());

    let (route, table) = match cli.command {
        Commands::Config { output } => {
            let template = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &template)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", template),
            }
            return Ok(());
        }
        Commands::Clients { page, page_size } => {
            (Route::Clients, Some((Slot::Clients, page, page_size)))
        }
        Commands::Client {
            name,
            page,
            page_size,
        } => (
            Route::Client(name),
            Some((Slot::ClientVehicles, page, page_size)),
        ),
        Commands::Vehicle { vin } => match Route::vehicle(&vin) {
            Some(route) => (route, None),
            None => bail!("VIN must not be blank"),
        },
        Commands::Open { path } => (Route::parse(&path), None),
    };

    let effects = dashboard.open(route);
    dashboard.settle().await;

    if let Some((slot, page, page_size)) = table {
        if let Some(requested) = page_size {
            if let Some(applied) = dashboard.page_size_change(slot, requested) {
                if applied.get() != requested {
                    eprintln!("Page size {} is not available, using {}", requested, applied);
                }
            }
        }
        if page > 1 && !dashboard.page_change(slot, page - 1) {
            eprintln!("Page {} is out of range, showing the first page", page);
        }
    }

    match cli.format {
        Format::Table => {
            for effect in &effects {
                match effect {
                    Effect::SetTitle(title) => {
                        println!("{}", title);
                        println!("{}", "=".repeat(title.chars().count()));
                        println!();
                    }
                }
            }
            print_screen(dashboard.screen());
        }
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&screen_json(dashboard.screen(), &dashboard.title()))?
            );
        }
    }

    if has_errors(dashboard.screen()) {
        std::process::exit(1);
    }

    Ok(())
}

fn has_errors(screen: &Screen) -> bool {
    match screen {
        Screen::Clients(s) => s.clients().status() == Status::Error,
        Screen::Client(s) => {
            s.detail().status() == Status::Error || s.vehicles().status() == Status::Error
        }
        Screen::Vehicle(s) => s.vehicle().status() == Status::Error,
        Screen::NotFound(_) => true,
        Screen::Home => false,
    }
}

// ============================================
// TABLE OUTPUT
// ============================================

fn print_screen(screen: &Screen) {
    match screen {
        Screen::Home => {
            println!("Browse clients:        fleetview clients");
            println!("Look up a vehicle:     fleetview vehicle <VIN>");
        }
        Screen::Clients(screen) => print_clients(screen),
        Screen::Client(screen) => print_client(screen),
        Screen::Vehicle(screen) => print_vehicle(screen),
        Screen::NotFound(path) => {
            println!("Nothing here: {}", path);
        }
    }
}

/// Print the controller's content, or its loading/error state in its place
fn section<K: ResourceKind>(
    controller: &ResourceController<K>,
    ready: impl FnOnce(&ResourceController<K>),
) {
    match controller.status() {
        Status::Ready => ready(controller),
        Status::Error => println!(
            "Error: {}",
            controller.error_message().unwrap_or_default()
        ),
        Status::Idle | Status::Loading => println!("Loading..."),
    }
}

fn print_footer<T>(page: &Page<'_, T>) {
    println!(
        "{}  (page {} of {}, {} per page)",
        page.range_label(),
        page.page + 1,
        page.page_count().max(1),
        page.page_size
    );
}

fn print_clients(screen: &ClientsScreen) {
    section(screen.clients(), |clients| {
        let page = clients.current_slice();
        if page.total == 0 {
            println!("No clients");
            return;
        }

        println!(
            "{:<20} {:<20} {:<30} {:<10} {}",
            "Name", "Contact", "Email", "Vehicles", "Open"
        );
        println!("{}", "-".repeat(110));
        for client in page.items {
            println!(
                "{:<20} {:<20} {:<30} {:<10} {}",
                client.name,
                client.contact_name,
                client.contact_email,
                client.number_of_vehicles,
                client.detail_path()
            );
        }
        println!();
        print_footer(&page);
    });
}

fn print_client(screen: &ClientScreen) {
    section(screen.detail(), |detail| {
        if let Some(client) = detail.header() {
            println!("Client:   {}", client.name);
            println!("Contact:  {}", client.contact_name);
            println!("Email:    {}", client.contact_email);
            println!("Vehicles: {}", client.number_of_vehicles);
        }
    });
    println!();

    section(screen.vehicles(), |vehicles| {
        let page = vehicles.current_slice();
        if page.total == 0 {
            println!("No vehicles");
            return;
        }

        println!(
            "{:<20} {:<12} {:<16} {}",
            "VIN", "Mileage", "Largest Weight", "Open"
        );
        println!("{}", "-".repeat(80));
        for vehicle in page.items {
            println!(
                "{:<20} {:<12} {:<16} {}",
                vehicle.vin,
                vehicle.mileage,
                vehicle.largest_weight,
                vehicle.detail_path()
            );
        }
        println!();
        print_footer(&page);
    });
}

fn print_vehicle(screen: &VehicleScreen) {
    section(screen.vehicle(), |vehicle| {
        if let Some(info) = vehicle.header() {
            println!("VIN:      {}", info.vin);
            println!("Mileage:  {}", info.mileage);
            println!("Client:   {}", info.client_name);
            println!("Contact:  {}", info.contact_name);
            println!("Email:    {}", info.contact_email);
        }
        println!("Largest:  {}", largest_weight(vehicle.rows()));
        println!();

        let page = vehicle.current_slice();
        if page.total == 0 {
            println!("No weight readings");
            return;
        }

        println!("{:<6} {}", "#", "Weight");
        println!("{}", "-".repeat(20));
        let offset = page.page * page.page_size.get();
        for (i, weight) in page.items.iter().enumerate() {
            println!("{:<6} {}", offset + i + 1, weight);
        }
        println!();
        print_footer(&page);
    });
}

// ============================================
// JSON OUTPUT
// ============================================

fn page_json<T: Serialize>(page: &Page<'_, T>) -> Value {
    json!({
        "items": page.items,
        "page": page.page,
        "page_size": page.page_size.get(),
        "total": page.total,
        "range": page.range_label(),
    })
}

fn resource_json<K: ResourceKind>(controller: &ResourceController<K>, data: Value) -> Value {
    let status = format!("{:?}", controller.status()).to_lowercase();
    json!({
        "status": status,
        "error": controller.error_message(),
        "data": data,
    })
}

fn screen_json(screen: &Screen, title: &str) -> Value {
    let body = match screen {
        Screen::Home => json!({"screen": "home"}),
        Screen::NotFound(path) => json!({"screen": "not_found", "path": path}),
        Screen::Clients(s) => {
            let clients = s.clients();
            json!({
                "screen": "clients",
                "clients": resource_json(clients, page_json(&clients.current_slice())),
            })
        }
        Screen::Client(s) => json!({
            "screen": "client",
            "client": resource_json(s.detail(), json!(s.detail().header())),
            "vehicles": resource_json(s.vehicles(), page_json(&s.vehicles().current_slice())),
        }),
        Screen::Vehicle(s) => {
            let vehicle = s.vehicle();
            json!({
                "screen": "vehicle",
                "vehicle": resource_json(vehicle, json!(vehicle.header())),
                "weights": resource_json(vehicle, page_json(&vehicle.current_slice())),
            })
        }
    };

    json!({"title": title, "view": body})
}
