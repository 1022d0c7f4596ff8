//! `NotificationScheduler`: bounded FIFO of active notifications.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::{HudEntry, Notification, Trigger};

/// Active notifications kept on screen at once.
pub const DEFAULT_CAPACITY: usize = 5;

/// Outcome of one [`NotificationScheduler::update`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateReport {
    /// Notifications whose lifetime ran out this update.
    pub expired: usize,
    /// Copies of the templates of triggers that fired, in registration order.
    pub fired:   Vec<Notification>,
    /// Triggers that returned an error.
    pub failed:  usize,
}

struct Registered<C> {
    trigger:  Box<dyn Trigger<C>>,
    template: Notification,
}

pub struct NotificationScheduler<C> {
    capacity: usize,
    active:   VecDeque<Notification>,
    triggers: Vec<Registered<C>>,
}

impl<C> Default for NotificationScheduler<C> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<C> NotificationScheduler<C> {
    /// `capacity` is clamped to at least 1.  Storage grows on demand, so a
    /// large capacity costs nothing up front.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            active: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            triggers: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, evicting the oldest notifications that no
    /// longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.active.len() > self.capacity {
            self.active.pop_front();
        }
    }

    /// Show `notification`, evicting and returning the oldest active one if
    /// the queue is full.
    pub fn show(&mut self, mut notification: Notification) -> Option<Notification> {
        let evicted = if self.active.len() >= self.capacity { self.active.pop_front() } else { None };
        if let Some(old) = &evicted {
            debug!(kind = ?old.kind, "notification evicted");
        }
        notification.elapsed = 0.0;
        info!(kind = ?notification.kind, message = %notification.message, "notification shown");
        self.active.push_back(notification);
        evicted
    }

    /// Register `trigger`; each time it evaluates to `true` a copy of
    /// `template` is shown.
    pub fn register_trigger<T>(&mut self, trigger: T, template: Notification)
    where
        T: Trigger<C> + 'static,
    {
        self.triggers.push(Registered { trigger: Box::new(trigger), template });
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// Age active notifications by `dt`, drop expired ones, then evaluate
    /// every trigger once against `ctx`.
    ///
    /// A trigger error is logged and counted; the remaining triggers still
    /// run.
    pub fn update(&mut self, dt: f32, ctx: &C) -> UpdateReport {
        let mut report = UpdateReport::default();

        let before = self.active.len();
        for n in &mut self.active {
            n.elapsed += dt;
        }
        self.active.retain(|n| !n.is_expired());
        report.expired = before - self.active.len();

        for (i, reg) in self.triggers.iter_mut().enumerate() {
            match reg.trigger.evaluate(ctx) {
                Ok(true) => report.fired.push(reg.template.clone()),
                Ok(false) => {}
                Err(e) => {
                    warn!(trigger = i, error = %e, "notification trigger failed");
                    report.failed += 1;
                }
            }
        }
        for n in &report.fired {
            self.show(n.clone());
        }
        report
    }

    /// Active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Render data for every active notification, oldest first.
    pub fn hud_entries(&self) -> Vec<HudEntry> {
        self.active
            .iter()
            .map(|n| HudEntry { message: n.message.clone(), alpha: n.alpha(), color: n.color })
            .collect()
    }

    /// Drop every active notification.  Registered triggers are kept.
    pub fn clear_all(&mut self) {
        self.active.clear();
    }
}
