//! Integrations page state.
//!
//! Several integrations can sync at once; each running sync is tracked by the
//! integration's index.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::async_task::{spawn_delayed, take_ready, PendingTask};
use crate::data::Integration;
use crate::state::list::ListCursor;
use crate::status::IntegrationStatus;

#[derive(Debug)]
pub struct IntegrationsState {
    pub integrations: Vec<Integration>,
    pub cursor: ListCursor,
    syncs: Vec<(usize, Option<PendingTask<NaiveDateTime>>)>,
    delay: Duration,
}

impl IntegrationsState {
    pub fn new(integrations: Vec<Integration>, delay: Duration) -> Self {
        Self {
            integrations,
            cursor: ListCursor::new(),
            syncs: Vec::new(),
            delay,
        }
    }

    pub fn selected(&self) -> Option<&Integration> {
        self.integrations.get(self.cursor.selected)
    }

    pub fn navigate_down(&mut self) -> bool {
        self.cursor.navigate_down(self.integrations.len())
    }

    pub fn syncing_count(&self) -> usize {
        self.syncs.len()
    }

    /// Connects a disconnected integration or disconnects a connected one.
    ///
    /// Returns the new status, or `None` while the integration is syncing.
    pub fn toggle_connection(&mut self, index: usize) -> Option<IntegrationStatus> {
        let integration = self.integrations.get_mut(index)?;
        let next = match integration.status {
            IntegrationStatus::Syncing => return None,
            IntegrationStatus::Connected => IntegrationStatus::Disconnected,
            IntegrationStatus::Disconnected | IntegrationStatus::Error => {
                IntegrationStatus::Connected
            }
        };
        integration.status = next;
        if next == IntegrationStatus::Disconnected {
            integration.last_synced = None;
        }
        tracing::info!(
            integration = %integration.name,
            status = ?next,
            "integration connection changed"
        );
        Some(next)
    }

    /// Starts a simulated sync. Only connected integrations can sync.
    pub fn start_sync(&mut self, index: usize) -> bool {
        let Some(integration) = self.integrations.get_mut(index) else {
            return false;
        };
        if integration.status != IntegrationStatus::Connected {
            return false;
        }
        integration.status = IntegrationStatus::Syncing;
        tracing::info!(integration = %integration.name, "sync started");
        let task = spawn_delayed("integration sync", self.delay, || Local::now().naive_local());
        self.syncs.push((index, Some(task)));
        true
    }

    /// Applies finished syncs and returns the names of those that completed.
    pub fn tick(&mut self) -> Vec<String> {
        let mut finished = Vec::new();
        for (index, slot) in &mut self.syncs {
            if let Some(at) = take_ready(slot) {
                if let Some(integration) = self.integrations.get_mut(*index) {
                    integration.status = IntegrationStatus::Connected;
                    integration.last_synced = Some(at);
                    finished.push(integration.name.clone());
                }
            }
        }
        self.syncs.retain(|(_, slot)| slot.is_some());
        finished
    }
}
