//! Screens
//!
//! Maps routes onto resource controllers and describes side effects instead
//! of performing them.
//!
//! - **route**: path parsing for `/`, `/clients`, `/clients/:name`, `/vehicles/:vin`
//! - **pages**: the per-route screens and the controllers they own
//!
//! Navigation yields a [`Transition`]: the fetches to issue and the effects
//! (page title) for the presentation layer to apply. Fetch results come back
//! as [`Completion`]s tagged with the [`Slot`] they belong to.

mod pages;
mod route;

pub use pages::{ClientScreen, ClientsScreen, VehicleScreen};
pub use route::Route;

use crate::config::ViewConfig;
use crate::fetch::FetchResult;
use crate::view::{FetchTicket, PageSize, Resolution};

/// Side effect requested by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the document title
    SetTitle(String),
}

/// A resource position on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Clients,
    ClientDetail,
    ClientVehicles,
    Vehicle,
}

/// A fetch the runtime should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    pub slot: Slot,
    pub ticket: FetchTicket,
}

impl FetchCommand {
    /// Request path to GET
    pub fn path(&self) -> String {
        self.ticket.endpoint().path()
    }
}

/// Result of a performed fetch, addressed to the slot that asked for it
#[derive(Debug)]
pub struct Completion {
    pub slot: Slot,
    pub ticket: FetchTicket,
    pub result: FetchResult<serde_json::Value>,
}

/// Output of a navigation
#[derive(Debug, Default)]
pub struct Transition {
    pub commands: Vec<FetchCommand>,
    pub effects: Vec<Effect>,
}

/// The screen currently shown
#[derive(Debug, Default)]
pub enum Screen {
    #[default]
    Home,
    Clients(ClientsScreen),
    Client(ClientScreen),
    Vehicle(VehicleScreen),
    NotFound(String),
}

impl Screen {
    /// Move to `route`
    ///
    /// Staying on the same kind of screen keeps its controllers, so a new
    /// parameter supersedes any fetch still in flight for the old one.
    pub fn navigate(&mut self, route: Route, view: &ViewConfig) -> Transition {
        let page_size = view.page_size();

        let commands = match route {
            Route::Home => {
                *self = Screen::Home;
                Vec::new()
            }
            Route::Clients => match self {
                Screen::Clients(screen) => screen.open(),
                _ => {
                    let mut screen = ClientsScreen::new(page_size);
                    let commands = screen.open();
                    *self = Screen::Clients(screen);
                    commands
                }
            },
            Route::Client(name) => match self {
                Screen::Client(screen) => screen.set_name(name),
                _ => {
                    let mut screen = ClientScreen::new(page_size);
                    let commands = screen.set_name(name);
                    *self = Screen::Client(screen);
                    commands
                }
            },
            Route::Vehicle(vin) => match self {
                Screen::Vehicle(screen) => screen.set_vin(vin),
                _ => {
                    let mut screen = VehicleScreen::new(page_size);
                    let commands = screen.set_vin(vin);
                    *self = Screen::Vehicle(screen);
                    commands
                }
            },
            Route::NotFound(path) => {
                tracing::debug!(%path, "no route matches");
                *self = Screen::NotFound(path);
                Vec::new()
            }
        };

        Transition {
            commands,
            effects: vec![Effect::SetTitle(self.title(view))],
        }
    }

    /// Fetch every resource of the current screen again
    pub fn reload(&mut self) -> Vec<FetchCommand> {
        match self {
            Screen::Clients(screen) => screen.reload(),
            Screen::Client(screen) => screen.reload(),
            Screen::Vehicle(screen) => screen.reload(),
            Screen::Home | Screen::NotFound(_) => Vec::new(),
        }
    }

    /// Route a fetch result to its controller
    pub fn apply(&mut self, completion: Completion) -> Resolution {
        match self {
            Screen::Clients(screen) => screen.apply(completion),
            Screen::Client(screen) => screen.apply(completion),
            Screen::Vehicle(screen) => screen.apply(completion),
            Screen::Home | Screen::NotFound(_) => {
                tracing::debug!(
                    request_id = %completion.ticket.id(),
                    endpoint = %completion.ticket.endpoint(),
                    "discarding result for a screen that was left"
                );
                Resolution::Stale
            }
        }
    }

    /// No resource of the screen is loading
    pub fn is_settled(&self) -> bool {
        match self {
            Screen::Clients(screen) => screen.is_settled(),
            Screen::Client(screen) => screen.is_settled(),
            Screen::Vehicle(screen) => screen.is_settled(),
            Screen::Home | Screen::NotFound(_) => true,
        }
    }

    /// Document title for the screen
    pub fn title(&self, view: &ViewConfig) -> String {
        match self {
            Screen::Home => view.title("Home"),
            Screen::Clients(_) => view.title("Clients"),
            Screen::Client(screen) => view.title(screen.name().unwrap_or_default()),
            Screen::Vehicle(screen) => {
                view.title(&format!("{} | Vehicles", screen.vin().unwrap_or_default()))
            }
            Screen::NotFound(_) => view.title("404"),
        }
    }

    /// Move the table in `slot` to `page`; false when nothing changed
    pub fn page_change(&mut self, slot: Slot, page: usize) -> bool {
        match (self, slot) {
            (Screen::Clients(screen), Slot::Clients) => screen.clients_mut().on_page_change(page),
            (Screen::Client(screen), Slot::ClientVehicles) => {
                screen.vehicles_mut().on_page_change(page)
            }
            (Screen::Vehicle(screen), Slot::Vehicle) => screen.vehicle_mut().on_page_change(page),
            _ => false,
        }
    }

    /// Change rows per page of the table in `slot`
    ///
    /// Returns the size actually applied, or `None` when the screen has no
    /// such table.
    pub fn page_size_change(&mut self, slot: Slot, requested: usize) -> Option<PageSize> {
        match (self, slot) {
            (Screen::Clients(screen), Slot::Clients) => {
                Some(screen.clients_mut().on_page_size_change(requested))
            }
            (Screen::Client(screen), Slot::ClientVehicles) => {
                Some(screen.vehicles_mut().on_page_size_change(requested))
            }
            (Screen::Vehicle(screen), Slot::Vehicle) => {
                Some(screen.vehicle_mut().on_page_size_change(requested))
            }
            _ => None,
        }
    }
}
