use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Element id of the feature grid on the welcome page.
pub const FEATURES_ID: &str = "features";
pub const FEATURES_ANCHOR: &str = "#features";

/// Symbolic names of the routes the welcome page links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Dashboard,
    Login,
    Register,
}

impl RouteName {
    pub const ALL: [RouteName; 3] = [RouteName::Dashboard, RouteName::Login, RouteName::Register];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Dashboard => "dashboard",
            RouteName::Login => "login",
            RouteName::Register => "register",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for RouteName {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Maps route names to the URLs of the hosting application.
///
/// The server provides one per request as context and ships it to the page
/// inside [`PageProps`](super::props::PageProps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub dashboard: String,
    pub login: String,
    pub register: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            dashboard: "/dashboard".to_string(),
            login: "/login".to_string(),
            register: "/register".to_string(),
        }
    }
}

impl RouteTable {
    /// Default paths, prefixed with `base` (e.g. `https://pos.example.com`).
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let defaults = Self::default();
        Self {
            dashboard: format!("{base}{}", defaults.dashboard),
            login: format!("{base}{}", defaults.login),
            register: format!("{base}{}", defaults.register),
        }
    }

    pub fn route(&self, name: RouteName) -> String {
        match name {
            RouteName::Dashboard => self.dashboard.clone(),
            RouteName::Login => self.login.clone(),
            RouteName::Register => self.register.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn route_names_parse_from_symbolic_names() {
        for name in RouteName::ALL {
            assert_eq!(name.as_str().parse::<RouteName>(), Ok(name));
        }
        assert_eq!(
            "profile".parse::<RouteName>(),
            Err(UnknownRoute("profile".to_string()))
        );
    }

    #[test]
    fn features_anchor_points_at_features_id() {
        assert_eq!(FEATURES_ANCHOR.strip_prefix('#'), Some(FEATURES_ID));
    }

    #[test]
    fn default_table_resolves_local_paths() {
        let routes = RouteTable::default();
        assert_eq!(routes.route(RouteName::Dashboard), "/dashboard");
        assert_eq!(routes.route(RouteName::Login), "/login");
        assert_eq!(routes.route(RouteName::Register), "/register");
    }

    #[test]
    fn base_is_joined_without_double_slash() {
        let routes = RouteTable::with_base("https://pos.example.com/");
        assert_eq!(
            routes.route(RouteName::Register),
            "https://pos.example.com/register"
        );
        let routes = RouteTable::with_base("https://pos.example.com");
        assert_eq!(routes.route(RouteName::Login), "https://pos.example.com/login");
    }
}
