//! Route surface of the dashboard

use std::fmt;

/// A navigable location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/clients`
    Clients,
    /// `/clients/:name`
    Client(String),
    /// `/vehicles/:vin`
    Vehicle(String),
    /// Anything else; carries the requested path
    NotFound(String),
}

impl Route {
    /// Match a path against the route table
    ///
    /// Query strings and fragments are ignored, a single trailing slash is
    /// tolerated and parameters are percent-decoded.
    pub fn parse(path: &str) -> Route {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = bare.strip_suffix('/').unwrap_or(bare);
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [] => Some(Route::Home),
            ["clients"] => Some(Route::Clients),
            ["clients", name] => decode_segment(name).map(Route::Client),
            ["vehicles", vin] => decode_segment(vin).map(Route::Vehicle),
            _ => None,
        };

        match route {
            Some(route) if bare.starts_with('/') || bare.is_empty() => route,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Route for the "open vehicle by VIN" action; `None` for blank input
    pub fn vehicle(vin: &str) -> Option<Route> {
        let vin = vin.trim();
        if vin.is_empty() {
            None
        } else {
            Some(Route::Vehicle(vin.to_string()))
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Clients => "/clients".to_string(),
            Route::Client(name) => format!("/clients/{}", urlencoding::encode(name)),
            Route::Vehicle(vin) => format!("/vehicles/{}", urlencoding::encode(vin)),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode_segment(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }
    urlencoding::decode(segment)
        .ok()
        .map(|s| s.into_owned())
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/clients"), Route::Clients);
        assert_eq!(Route::parse("/clients/"), Route::Clients);
        assert_eq!(Route::parse("/clients/CIA"), Route::Client("CIA".into()));
        assert_eq!(
            Route::parse("/vehicles/123456789G"),
            Route::Vehicle("123456789G".into())
        );
    }

    #[test]
    fn test_parse_decodes_parameters() {
        assert_eq!(
            Route::parse("/clients/Bobs%20Burgers"),
            Route::Client("Bobs Burgers".into())
        );
        assert_eq!(
            Route::parse("/clients/Dunder%20Mifflin?tab=vehicles"),
            Route::Client("Dunder Mifflin".into())
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in [
            "/trucks",
            "/clients//",
            "/clients/CIA/vehicles",
            "/vehicles",
            "/vehicles/%20",
            "clients",
        ] {
            assert_eq!(Route::parse(path), Route::NotFound(path.to_string()), "{}", path);
        }
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        let route = Route::Client("Bobs Burgers".into());
        assert_eq!(route.path(), "/clients/Bobs%20Burgers");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_vehicle_action() {
        assert_eq!(
            Route::vehicle("  23EFU4FW5678f39G "),
            Some(Route::Vehicle("23EFU4FW5678f39G".into()))
        );
        assert_eq!(Route::vehicle("   "), None);
    }
}
