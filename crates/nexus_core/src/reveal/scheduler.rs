//! One-shot reveal state machine for a list container.
//!
//! # Invariants
//! - `Revealed` is terminal; leaving and re-entering the viewport changes
//!   nothing.
//! - The viewport subscription is disconnected exactly once, on reveal or on
//!   teardown, whichever comes first.
//! - A new mount needs a new scheduler; nothing resets an existing one.

use super::style::{class_name, style_for_index, ItemStyle, RevealConfigError, RevealOptions};
use log::debug;

/// Handle returned by a [`ViewportObserver`] for one observed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);

/// One intersection report delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn entering(intersection_ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

/// Host facility that reports when a container intersects the viewport.
///
/// Callbacks are delivered back through [`RevealScheduler::on_intersection`]
/// on the same event loop.
pub trait ViewportObserver {
    type Container;

    fn observe(&mut self, container: &Self::Container, options: &RevealOptions) -> Subscription;
    fn disconnect(&mut self, subscription: Subscription);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    NotObserved,
    Observing,
    Revealed,
    /// Unmounted before becoming visible.
    TornDown,
}

/// Per-container reveal scheduler.
#[derive(Debug, Clone)]
pub struct RevealScheduler {
    options: RevealOptions,
    state: RevealState,
    subscription: Option<Subscription>,
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self {
            options: RevealOptions::default(),
            state: RevealState::NotObserved,
            subscription: None,
        }
    }
}

impl RevealScheduler {
    pub fn new(options: RevealOptions) -> Result<Self, RevealConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn has_become_visible(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Starts watching `container`. Returns `false` unless currently
    /// `NotObserved`.
    pub fn observe<O: ViewportObserver>(&mut self, port: &mut O, container: &O::Container) -> bool {
        if self.state != RevealState::NotObserved {
            return false;
        }
        self.subscription = Some(port.observe(container, &self.options));
        self.state = RevealState::Observing;
        debug!(
            "event=reveal_observe module=reveal status=ok threshold={} root_margin={}",
            self.options.threshold,
            self.options.root_margin_css()
        );
        true
    }

    /// Handles one intersection callback. Returns `true` if this call
    /// revealed the container.
    pub fn on_intersection<O: ViewportObserver>(
        &mut self,
        port: &mut O,
        entries: &[IntersectionEntry],
    ) -> bool {
        if self.state != RevealState::Observing {
            return false;
        }
        if !entries.iter().any(|entry| entry.is_intersecting) {
            return false;
        }

        self.state = RevealState::Revealed;
        self.disconnect(port);
        debug!("event=reveal module=reveal status=ok");
        true
    }

    /// Releases the viewport subscription when the container unmounts.
    ///
    /// Idempotent. A revealed scheduler stays revealed.
    pub fn teardown<O: ViewportObserver>(&mut self, port: &mut O) {
        self.disconnect(port);
        if matches!(self.state, RevealState::NotObserved | RevealState::Observing) {
            self.state = RevealState::TornDown;
        }
    }

    pub fn style_for_index(&self, index: usize) -> ItemStyle {
        style_for_index(&self.options, index)
    }

    pub fn class_name_for(&self, base: &str) -> String {
        class_name(base, self.has_become_visible())
    }

    fn disconnect<O: ViewportObserver>(&mut self, port: &mut O) {
        if let Some(subscription) = self.subscription.take() {
            port.disconnect(subscription);
        }
    }
}
