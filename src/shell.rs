//! Navigation shell
//!
//! Resolves a location to one of the four views and opens a fresh workflow
//! for it. Nothing survives navigation: every [`Shell::open`] starts over.

use crate::records::{DiaperChange, Feed, GrowthMeasurement, RecordKind, SleepSession};
use crate::routes::{self, Navigation, Route};
use crate::transport::Transport;
use crate::workflow::Workflow;

/// The view currently on screen
#[derive(Debug, Clone)]
pub enum Screen {
    Feeds(Workflow<Feed>),
    Sleep(Workflow<SleepSession>),
    Growth(Workflow<GrowthMeasurement>),
    Diapers(Workflow<DiaperChange>),
    NotFound,
}

impl Screen {
    /// Route shown, `None` for the not-found view
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Feeds(_) => Some(Route::Feeds),
            Screen::Sleep(_) => Some(Route::Sleep),
            Screen::Growth(_) => Some(Route::Growth),
            Screen::Diapers(_) => Some(Route::SusuPoty),
            Screen::NotFound => None,
        }
    }
}

/// Owns the transport and hands out views
pub struct Shell<T: Transport> {
    transport: T,
}

impl<T: Transport> Shell<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Open the view for `location`, loading its recents.
    ///
    /// The root path lands on the default route. Unknown paths give
    /// [`Screen::NotFound`] without any request.
    pub async fn open(&self, location: &str) -> Screen {
        let route = match routes::resolve(location) {
            Navigation::Redirect(route) => {
                tracing::debug!(from = location, to = route.path(), "Redirecting");
                route
            }
            Navigation::Show(route) => route,
            Navigation::NotFound => {
                tracing::debug!(path = location, "No route");
                return Screen::NotFound;
            }
        };

        match route {
            Route::Feeds => Screen::Feeds(self.fresh().await),
            Route::Sleep => Screen::Sleep(self.fresh().await),
            Route::Growth => Screen::Growth(self.fresh().await),
            Route::SusuPoty => Screen::Diapers(self.fresh().await),
        }
    }

    /// A new workflow with its recents loaded
    pub async fn fresh<K: RecordKind>(&self) -> Workflow<K> {
        let mut workflow = Workflow::new();
        workflow.load_recents(&self.transport).await;
        workflow
    }
}
