use std::rc::Rc;

use log::{debug, info};
use web_sys::{Document, Element, HtmlElement, Performance, Window};

use crate::anim::Geometry;
use crate::config::PageConfig;
use crate::dom::{self, Listener, Ticker};
use crate::effects::{self, CHAR_SELECTOR, HERO_SELECTOR, STAT_CARD_SELECTOR};
use crate::error::{PageError, PageResult};
use crate::scope::{AnimationScope, EntryBinding, ScrollBinding};

/// Browser handles the animations run against. Created once in `main` and
/// handed to the page, which mounts its effects through it.
#[derive(Clone)]
pub struct Engine {
    inner: Rc<EngineInner>,
}

struct EngineInner {
    window: Window,
    document: Document,
    performance: Performance,
}

impl PartialEq for Engine {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Engine {
    pub fn init() -> PageResult<Self> {
        let window = web_sys::window().ok_or(PageError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(PageError::MissingGlobal("document"))?;
        let performance = window
            .performance()
            .ok_or(PageError::MissingGlobal("performance"))?;
        Ok(Self {
            inner: Rc::new(EngineInner {
                window,
                document,
                performance,
            }),
        })
    }

    pub fn window(&self) -> &Window {
        &self.inner.window
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    /// Seconds, on the same clock as animation frame timestamps.
    pub fn now(&self) -> f64 {
        self.inner.performance.now() / 1000.0
    }

    pub fn scroll_y(&self) -> f64 {
        self.inner.window.scroll_y().unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.inner
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    pub fn measure(&self, element: &Element) -> Geometry {
        let rect = element.get_bounding_client_rect();
        Geometry {
            element_top: rect.top() + self.scroll_y(),
            element_height: rect.height(),
            viewport_height: self.viewport_height(),
        }
    }

    /// Binds the page effects to the rendered markup under `root`. Without a
    /// `wrapper` only the entry sequence runs; a missing `car` leaves the
    /// transit with nothing to move.
    pub fn mount(
        &self,
        config: &PageConfig,
        root: &Element,
        wrapper: Option<Element>,
        car: Option<HtmlElement>,
    ) -> PageResult<Mounted> {
        let chars = dom::query_all(root, CHAR_SELECTOR)?;
        let cards = dom::query_all(root, STAT_CARD_SELECTOR)?;
        debug!("Entry targets: {} chars, {} cards", chars.len(), cards.len());
        let timeline = effects::entry_timeline(&config.entry, chars.len(), cards.len());
        debug!(
            "Entry tracks start at {:?}, run {:.2}s",
            timeline.tracks().iter().map(|t| t.start).collect::<Vec<_>>(),
            timeline.duration()
        );
        let entry = EntryBinding::new(timeline, vec![chars, cards]);

        let mut scroll = Vec::new();
        let mut geometry = Geometry::default();
        if let Some(wrapper) = &wrapper {
            geometry = self.measure(wrapper);
            scroll.push(ScrollBinding::new(
                config.transit.clone(),
                car.into_iter().collect(),
            ));
            scroll.push(ScrollBinding::new(
                config.fade.clone(),
                dom::query_all(root, HERO_SELECTOR)?,
            ));
        }

        let scope = AnimationScope::new(Some(entry), scroll, geometry);
        let ticker = {
            let scope = scope.clone();
            Rc::new(Ticker::new(self.window(), move |now| scope.tick(now)))
        };
        // Anything that fails from here on drops `mounted`, which releases the scope.
        let mut mounted = Mounted {
            scope: scope.clone(),
            listeners: Vec::new(),
            _ticker: Rc::clone(&ticker),
        };

        // From-states and the current scroll position show before the first frame.
        scope.on_scroll(self.scroll_y(), self.now());
        scope.tick(self.now());
        ticker.wake();

        {
            let engine = self.clone();
            let scope = scope.clone();
            let ticker = Rc::clone(&ticker);
            mounted.listeners.push(Listener::new(self.window(), "scroll", move || {
                scope.on_scroll(engine.scroll_y(), engine.now());
                ticker.wake();
            })?);
        }
        if let Some(wrapper) = wrapper {
            let engine = self.clone();
            mounted.listeners.push(Listener::new(self.window(), "resize", move || {
                let geometry = engine.measure(&wrapper);
                debug!("Scroll region remeasured: {:?}", geometry);
                scope.set_geometry(geometry);
                scope.on_scroll(engine.scroll_y(), engine.now());
                ticker.wake();
            })?);
        }

        info!("Landing animations mounted");
        Ok(mounted)
    }
}

/// Live page animations. Dropping this reverts every animated style, removes
/// the listeners and cancels the pending frame.
pub struct Mounted {
    scope: AnimationScope<HtmlElement>,
    listeners: Vec<Listener>,
    _ticker: Rc<Ticker>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if self.scope.is_live() {
            self.scope.release();
            info!("Landing animations released");
        }
    }
}
