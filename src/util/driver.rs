//! Binds the transition state machine to timers and the window.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PageTransition` decides; `TransitionDriver` carries out its decisions.
//! Timers go through a [`Scheduler`] and scrolling through a [`Viewport`], so
//! the browser implementations (behind `hydrate`) can be swapped for manual
//! fakes in tests.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use crate::config::TransitionConfig;
use crate::error::Result;
use crate::state::page::Page;
use crate::state::transition::{Advance, PageTransition, Request, Timer};

/// Delivers timers back to [`TransitionDriver::fire`] after their delay.
pub trait Scheduler {
    /// Arm `timer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer could not be armed. The driver then
    /// fires it immediately, skipping the animation.
    fn schedule(&mut self, timer: Timer) -> Result<()>;

    /// Disarm every pending timer.
    fn cancel_all(&mut self);
}

/// Window side effects performed at the page swap.
pub trait Viewport {
    fn scroll_to_top(&mut self);
}

#[derive(Debug)]
pub struct TransitionDriver<S, V> {
    machine: PageTransition,
    scheduler: S,
    viewport: V,
    scroll_on_swap: bool,
}

impl<S: Scheduler, V: Viewport> TransitionDriver<S, V> {
    pub fn new(initial: Page, config: &TransitionConfig, scheduler: S, viewport: V) -> Self {
        Self {
            machine: PageTransition::new(initial, config),
            scheduler,
            viewport,
            scroll_on_swap: config.scroll_to_top,
        }
    }

    pub fn machine(&self) -> &PageTransition {
        &self.machine
    }

    pub fn current(&self) -> Page {
        self.machine.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Handle a navigation signal for `target`.
    pub fn navigate(&mut self, target: Page) -> Request {
        let request = self.machine.request(target);
        log::debug!("navigate {} -> {target}: {request:?}", self.machine.current());
        if request.invalidates_pending() {
            self.scheduler.cancel_all();
        }
        if let Some(timer) = request.timer() {
            self.arm(timer);
        }
        request
    }

    /// Handle an elapsed timer.
    pub fn fire(&mut self, timer: Timer) -> Advance {
        let advance = self.machine.advance(timer);
        match advance {
            Advance::Stale => log::debug!("dropping stale {:?} timer (epoch {})", timer.step, timer.epoch),
            Advance::Swapped { page, next } => {
                if self.scroll_on_swap {
                    self.viewport.scroll_to_top();
                }
                log::debug!("swapped to {page}");
                self.arm(next);
            }
            Advance::Settled(page) => log::debug!("settled on {page}"),
        }
        advance
    }

    /// Adopt `page` without a transition, e.g. the initial URL hash.
    pub fn jump(&mut self, page: Page) {
        self.scheduler.cancel_all();
        self.machine.jump(page);
        log::debug!("jumped to {page}");
    }

    /// Stop all transition activity; used when the owning component unmounts.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        if self.machine.cancel() {
            log::debug!("transition interrupted by teardown on {}", self.machine.current());
        }
    }

    fn arm(&mut self, timer: Timer) {
        if let Err(err) = self.scheduler.schedule(timer) {
            log::warn!("{err}; completing {:?} immediately", timer.step);
            self.fire(timer);
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserScheduler, BrowserViewport};

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::*;

    use super::{Scheduler, Viewport};
    use crate::error::{Error, Result};
    use crate::state::transition::Timer;

    /// `setTimeout`-backed scheduler. At most one timer is armed at a time.
    #[derive(Default)]
    pub struct BrowserScheduler {
        on_fire: Option<Callback<Timer>>,
        pending: Option<TimeoutHandle>,
    }

    impl BrowserScheduler {
        /// Route elapsed timers to `on_fire`.
        pub fn bind(&mut self, on_fire: Callback<Timer>) {
            self.on_fire = Some(on_fire);
        }
    }

    impl Scheduler for BrowserScheduler {
        fn schedule(&mut self, timer: Timer) -> Result<()> {
            let on_fire = self
                .on_fire
                .ok_or_else(|| Error::Browser("scheduler not bound".to_owned()))?;
            self.cancel_all();
            let handle = set_timeout_with_handle(move || on_fire.run(timer), timer.delay)
                .map_err(|err| Error::Browser(format!("setTimeout failed: {err:?}")))?;
            self.pending = Some(handle);
            Ok(())
        }

        fn cancel_all(&mut self) {
            if let Some(handle) = self.pending.take() {
                handle.clear();
            }
        }
    }

    /// The real window.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserViewport;

    impl Viewport for BrowserViewport {
        fn scroll_to_top(&mut self) {
            crate::util::scroll::scroll_to_top();
        }
    }
}
