//! Notification manager.
//!
//! Keeps at most one live notification. A new one pushes the previous one
//! into its exit transition and cancels the timers that would otherwise have
//! shown or expired it, so a superseded notification can only be removed.
//!
//! Every notification owns up to three timers on the shared scheduler:
//! slide-in after `enter_delay_ms`, expiry after `lifetime_ms` and, once it
//! starts leaving, removal after `exit_ms`.

use super::actions::Task;
use crate::domain::{Notification, NotificationId, NotificationKind, NotificationPhase};
use crate::timing::{Scheduler, TimerHandle};
use crate::NotificationConfig;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct NotificationManager {
    config: NotificationConfig,
    next_id: u64,
    current: Option<NotificationId>,
    entries: Vec<Notification>,
    timers: BTreeMap<NotificationId, Vec<TimerHandle>>,
}

impl NotificationManager {
    #[must_use]
    pub const fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            next_id: 1,
            current: None,
            entries: Vec::new(),
            timers: BTreeMap::new(),
        }
    }

    /// Notifications still in the document, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// The most recent notification, if it has not started leaving.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        let id = self.current?;
        self.get(id).filter(|n| n.is_live())
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    /// Shows `message`, evicting whatever is currently on screen.
    pub fn notify(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        let live: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|n| n.is_live())
            .map(|n| n.id)
            .collect();
        for id in live {
            self.dismiss(scheduler, id);
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, message, kind);
        tracing::debug!(id = %id, kind = %kind, message = %notification.message, "notification created");
        self.entries.push(notification);
        self.current = Some(id);

        let show = scheduler.schedule(self.config.enter_delay_ms, Task::ShowNotification(id));
        let expire = scheduler.schedule(self.config.lifetime_ms, Task::ExpireNotification(id));
        self.timers.insert(id, vec![show, expire]);

        id
    }

    /// Slides an entering notification into view. Returns `true` if it moved.
    pub fn show(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase == NotificationPhase::Entering => {
                n.phase = NotificationPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Starts the exit transition of a notification.
    ///
    /// Dismissing a notification that is already leaving or gone does nothing
    /// and returns `false`.
    pub fn dismiss(&mut self, scheduler: &mut Scheduler<Task>, id: NotificationId) -> bool {
        let Some(notification) = self.entries.iter_mut().find(|n| n.id == id) else {
            tracing::trace!(id = %id, "dismiss ignored, notification gone");
            return false;
        };
        if !notification.is_live() {
            return false;
        }
        notification.phase = NotificationPhase::Leaving;

        for handle in self.timers.remove(&id).unwrap_or_default() {
            scheduler.cancel(handle);
        }
        let remove = scheduler.schedule(self.config.exit_ms, Task::RemoveNotification(id));
        self.timers.insert(id, vec![remove]);

        tracing::debug!(id = %id, "notification dismissed");
        true
    }

    /// Dismisses the current notification, if any.
    pub fn dismiss_current(&mut self, scheduler: &mut Scheduler<Task>) -> bool {
        match self.current().map(|n| n.id) {
            Some(id) => self.dismiss(scheduler, id),
            None => false,
        }
    }

    /// Drops a notification whose exit finished. Returns `false` if it was already gone.
    pub fn remove(&mut self, scheduler: &mut Scheduler<Task>, id: NotificationId) -> bool {
        let Some(pos) = self.entries.iter().position(|n| n.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        for handle in self.timers.remove(&id).unwrap_or_default() {
            scheduler.cancel(handle);
        }
        if self.current == Some(id) {
            self.current = None;
        }
        tracing::debug!(id = %id, "notification removed");
        true
    }
}
