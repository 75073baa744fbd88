//! Routes
//!
//! Path-based navigation between the four logging views.

/// One of the four logging views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Feeds,
    Sleep,
    Growth,
    SusuPoty,
}

impl Route {
    /// Navigation order
    pub const NAV: [Route; 4] = [Route::Feeds, Route::Sleep, Route::Growth, Route::SusuPoty];

    /// Where the root path lands
    pub const DEFAULT: Route = Route::Feeds;

    pub fn path(self) -> &'static str {
        match self {
            Route::Feeds => "/feeds",
            Route::Sleep => "/sleep",
            Route::Growth => "/growth",
            Route::SusuPoty => "/susupoty",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            Route::Feeds => "Feeds",
            Route::Sleep => "Sleep",
            Route::Growth => "Growth",
            Route::SusuPoty => "Susu-Poty",
        }
    }

    fn from_path(path: &str) -> Option<Route> {
        Route::NAV.into_iter().find(|r| r.path() == path)
    }
}

/// Result of resolving a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the location with this route's path
    Redirect(Route),
    Show(Route),
    NotFound,
}

/// Resolve a location path. Query strings, fragments and a trailing slash are
/// ignored.
pub fn resolve(location: &str) -> Navigation {
    let path = location
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        return Navigation::Redirect(Route::DEFAULT);
    }

    match Route::from_path(path) {
        Some(route) => Navigation::Show(route),
        None => Navigation::NotFound,
    }
}
