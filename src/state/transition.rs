//! Two-phase faded page transition.
//!
//! DESIGN
//! ======
//! `PageTransition` is a pure state machine. It never touches timers itself:
//! `request` hands back the [`Timer`] the caller must schedule, and the caller
//! feeds it back through `advance` once the delay has elapsed.
//!
//! ```text
//! Idle(p) --request(t)--> FadingOut(p, t) --fade-out--> FadingIn(t) --fade-in--> Idle(t)
//! ```
//!
//! Rapid requests cancel and restart: each restart bumps `epoch`, and a timer
//! from an older epoch is rejected as stale, so overlapping timer chains
//! cannot swap the page twice.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::time::Duration;

use crate::config::TransitionConfig;
use crate::state::page::Page;

/// Where the machine is within a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// `from` is still rendered and fading out; `to` is the pending page.
    FadingOut { from: Page, to: Page },
    /// `to` is rendered and fading in.
    FadingIn { to: Page },
}

/// Which delay a timer measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    FadeOut,
    FadeIn,
}

/// A delay the caller must schedule and then pass back to `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub epoch: u64,
    pub step: Step,
    pub delay: Duration,
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Target already shown or already pending.
    Ignored,
    /// A fade-out began from an idle or fading-in state.
    Started(Timer),
    /// A fade-out in flight was redirected to a new target.
    Restarted(Timer),
    /// The target was the page still on screen; the fade was abandoned.
    Reverted,
}

impl Request {
    /// The timer to schedule, if any.
    pub fn timer(self) -> Option<Timer> {
        match self {
            Request::Started(timer) | Request::Restarted(timer) => Some(timer),
            Request::Ignored | Request::Reverted => None,
        }
    }

    /// Whether previously scheduled timers are now stale.
    pub fn invalidates_pending(self) -> bool {
        !matches!(self, Request::Ignored)
    }
}

/// Outcome of a timer elapsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The timer belongs to an abandoned transition.
    Stale,
    /// Fade-out finished and `page` is now current. Schedule `next`.
    Swapped { page: Page, next: Timer },
    /// Fade-in finished; the machine is idle on `page`.
    Settled(Page),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTransition {
    current: Page,
    phase: Phase,
    epoch: u64,
    fade_out: Duration,
    fade_in: Duration,
}

impl PageTransition {
    /// Start idle on `initial`, with no transition.
    pub fn new(initial: Page, config: &TransitionConfig) -> Self {
        Self {
            current: initial,
            phase: Phase::Idle,
            epoch: 0,
            fade_out: config.fade_out(),
            fade_in: config.fade_in(),
        }
    }

    /// The page whose content is rendered right now.
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The transition flag: true from a request until fade-in completes.
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Page waiting for the fade-out to finish.
    pub fn pending(&self) -> Option<Page> {
        match self.phase {
            Phase::FadingOut { to, .. } => Some(to),
            Phase::Idle | Phase::FadingIn { .. } => None,
        }
    }

    /// Ask to show `target`.
    pub fn request(&mut self, target: Page) -> Request {
        match self.phase {
            Phase::Idle | Phase::FadingIn { .. } if target == self.current => Request::Ignored,
            Phase::Idle | Phase::FadingIn { .. } => Request::Started(self.fade_out_to(target)),
            Phase::FadingOut { to, .. } if target == to => Request::Ignored,
            Phase::FadingOut { from, .. } if target == from => {
                self.epoch += 1;
                self.phase = Phase::Idle;
                Request::Reverted
            }
            Phase::FadingOut { .. } => Request::Restarted(self.fade_out_to(target)),
        }
    }

    /// Feed back a timer whose delay has elapsed.
    pub fn advance(&mut self, timer: Timer) -> Advance {
        if timer.epoch != self.epoch {
            return Advance::Stale;
        }
        match (timer.step, self.phase) {
            (Step::FadeOut, Phase::FadingOut { to, .. }) => {
                self.current = to;
                self.phase = Phase::FadingIn { to };
                Advance::Swapped {
                    page: to,
                    next: Timer { epoch: self.epoch, step: Step::FadeIn, delay: self.fade_in },
                }
            }
            (Step::FadeIn, Phase::FadingIn { to }) => {
                self.phase = Phase::Idle;
                Advance::Settled(to)
            }
            _ => Advance::Stale,
        }
    }

    /// Abandon any transition in flight, keeping the current page.
    ///
    /// Returns whether a transition was interrupted.
    pub fn cancel(&mut self) -> bool {
        self.epoch += 1;
        let interrupted = self.is_transitioning();
        self.phase = Phase::Idle;
        interrupted
    }

    /// Show `page` at once, abandoning any transition in flight.
    pub fn jump(&mut self, page: Page) {
        self.cancel();
        self.current = page;
    }

    fn fade_out_to(&mut self, target: Page) -> Timer {
        self.epoch += 1;
        self.phase = Phase::FadingOut { from: self.current, to: target };
        Timer { epoch: self.epoch, step: Step::FadeOut, delay: self.fade_out }
    }
}
