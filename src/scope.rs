//! Animation bindings for one mounted page.
//!
//! Everything the effects touch lives in an `AnimationScope`. Releasing the
//! scope reverts the styles it wrote and turns every later call into a no-op,
//! so listeners that fire late cannot reach removed elements.

use std::cell::RefCell;
use std::rc::Rc;

use crate::anim::{Geometry, Smoother, Timeline, Transform};
use crate::config::ScrollEffectConfig;
use crate::effects;

/// Something an effect can style.
pub trait StyleTarget {
    fn apply(&self, state: &Transform);
    /// Drops whatever `apply` set.
    fn revert(&self);
}

/// Time-driven timeline, played once from its first tick.
pub struct EntryBinding<T> {
    timeline: Timeline,
    tracks: Vec<Vec<T>>,
    started: Option<f64>,
    done: bool,
}

impl<T: StyleTarget> EntryBinding<T> {
    /// `tracks[i]` holds the targets of timeline track `i`.
    pub fn new(timeline: Timeline, tracks: Vec<Vec<T>>) -> Self {
        Self {
            timeline,
            tracks,
            started: None,
            done: false,
        }
    }

    /// Renders the timeline at `now`; returns whether it still needs frames.
    fn tick(&mut self, now: f64) -> bool {
        if self.done {
            return false;
        }
        let t = now - *self.started.get_or_insert(now);
        self.done = t >= self.timeline.duration();
        // the last frame lands exactly on the end state
        let t = if self.done { f64::INFINITY } else { t };
        for (track, targets) in self.tracks.iter().enumerate() {
            for (index, target) in targets.iter().enumerate() {
                if let Some(state) = self.timeline.sample(track, index, t) {
                    target.apply(&state);
                }
            }
        }
        !self.done
    }

    fn targets(&self) -> impl Iterator<Item = &T> {
        self.tracks.iter().flatten()
    }
}

/// Scroll-driven effect: raw trigger progress goes through the scrub
/// smoother, then through the effect mapping.
pub struct ScrollBinding<T> {
    config: ScrollEffectConfig,
    smoother: Smoother,
    targets: Vec<T>,
    shown: Option<f64>,
}

impl<T: StyleTarget> ScrollBinding<T> {
    pub fn new(config: ScrollEffectConfig, targets: Vec<T>) -> Self {
        Self {
            smoother: Smoother::new(config.scrub),
            config,
            targets,
            shown: None,
        }
    }

    fn scroll(&mut self, scroll_y: f64, geometry: &Geometry, now: f64) {
        let raw = self.config.trigger.progress(scroll_y, geometry);
        self.smoother.retarget(raw, now);
        self.render(now);
    }

    fn tick(&mut self, now: f64) -> bool {
        self.render(now);
        !self.smoother.settled(now)
    }

    fn render(&mut self, now: f64) {
        let Some(progress) = self.smoother.value(now) else {
            return;
        };
        if self.shown == Some(progress) {
            return;
        }
        let state = effects::scroll_effect_at(&self.config, progress);
        for target in &self.targets {
            target.apply(&state);
        }
        self.shown = Some(progress);
    }
}

struct Bindings<T> {
    entry: Option<EntryBinding<T>>,
    scroll: Vec<ScrollBinding<T>>,
    /// Layout of the trigger element every scroll binding measures against.
    geometry: Geometry,
}

pub struct AnimationScope<T> {
    inner: Rc<RefCell<Option<Bindings<T>>>>,
}

impl<T> Clone for AnimationScope<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: StyleTarget> AnimationScope<T> {
    pub fn new(
        entry: Option<EntryBinding<T>>,
        scroll: Vec<ScrollBinding<T>>,
        geometry: Geometry,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(Bindings {
                entry,
                scroll,
                geometry,
            }))),
        }
    }

    pub fn is_live(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub fn set_geometry(&self, geometry: Geometry) {
        if let Some(bindings) = self.inner.borrow_mut().as_mut() {
            bindings.geometry = geometry;
        }
    }

    /// Feeds a scroll position (document pixels) to every scroll binding.
    pub fn on_scroll(&self, scroll_y: f64, now: f64) {
        if let Some(bindings) = self.inner.borrow_mut().as_mut() {
            let geometry = bindings.geometry;
            for binding in &mut bindings.scroll {
                binding.scroll(scroll_y, &geometry, now);
            }
        }
    }

    /// Advances the entry timeline and any scrub catch-up. Returns whether
    /// another frame is wanted.
    pub fn tick(&self, now: f64) -> bool {
        let mut guard = self.inner.borrow_mut();
        let Some(bindings) = guard.as_mut() else {
            return false;
        };
        let mut busy = bindings
            .entry
            .as_mut()
            .map_or(false, |entry| entry.tick(now));
        for binding in &mut bindings.scroll {
            busy |= binding.tick(now);
        }
        busy
    }

    /// Reverts every target and drops the bindings. Safe to call twice.
    pub fn release(&self) {
        let Some(bindings) = self.inner.borrow_mut().take() else {
            return;
        };
        if let Some(entry) = &bindings.entry {
            entry.targets().for_each(StyleTarget::revert);
        }
        for binding in &bindings.scroll {
            binding.targets.iter().for_each(StyleTarget::revert);
        }
    }
}
