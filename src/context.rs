//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::EnvironmentConfig;
use crate::routes::{self, Route};
use crate::session::{self, Theme};

/// Orders board loads so only the newest one may write the store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load and get its generation
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Outdate every load already in flight
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being shown - read
    pub route: ReadSignal<Route>,
    /// Page being shown - write
    set_route: WriteSignal<Route>,
    /// Trigger to reload board data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload board data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    /// Settings fetched from the backend at start-up
    pub environment: ReadSignal<EnvironmentConfig>,
    /// How often team pages poll, in ms
    pub poll_interval_ms: u32,
    loads: StoredValue<LoadSequence>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
        environment: ReadSignal<EnvironmentConfig>,
        poll_interval_ms: u32,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            theme: theme.0,
            set_theme: theme.1,
            environment,
            poll_interval_ms,
            loads: StoredValue::new(LoadSequence::default()),
        }
    }

    /// Go to a page, adding a history entry
    pub fn navigate(&self, route: Route) {
        log::debug!(target: "router", "navigate to {}", route.path());
        routes::push(&route);
        self.set_route.set(route);
    }

    /// Go to a page in place of the current history entry
    pub fn redirect(&self, route: Route) {
        routes::replace(&route);
        self.set_route.set(route);
    }

    /// Route changed outside our control (back/forward)
    pub fn sync_route(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Trigger a reload of board data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn begin_load(&self) -> u64 {
        self.loads.try_update_value(|l| l.begin()).unwrap_or_default()
    }

    pub fn is_latest_load(&self, generation: u64) -> bool {
        self.loads.try_with_value(|l| l.is_current(generation)).unwrap_or(false)
    }

    /// Our own change landed; loads that started before it are stale
    pub fn invalidate_loads(&self) {
        self.loads.update_value(|l| l.invalidate());
    }

    pub fn set_theme(&self, theme: Theme) {
        session::save_theme(theme);
        self.set_theme.set(theme);
    }

    pub fn logout(&self) {
        session::clear_token();
        self.redirect(Route::Login { team_id: None });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_load_is_current() {
        let mut loads = LoadSequence::default();
        let first = loads.begin();
        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }

    #[test]
    fn mutation_outdates_loads_in_flight() {
        let mut loads = LoadSequence::default();
        let poll = loads.begin();
        loads.invalidate();
        assert!(!loads.is_current(poll));
        let reload = loads.begin();
        assert!(loads.is_current(reload));
    }
}
