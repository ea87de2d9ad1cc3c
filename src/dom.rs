use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, Window};

use crate::anim::Transform;
use crate::error::PageResult;
use crate::scope::StyleTarget;

impl StyleTarget for HtmlElement {
    fn apply(&self, state: &Transform) {
        let style = self.style();
        let _ = style.set_property("transform", &state.css_transform());
        let _ = style.set_property("opacity", &state.css_opacity());
    }

    fn revert(&self) {
        let style = self.style();
        let _ = style.remove_property("transform");
        let _ = style.remove_property("opacity");
    }
}

/// Every element under `root` matching `selector`, in document order. An
/// unmatched selector gives an empty list.
pub fn query_all(root: &Element, selector: &str) -> PageResult<Vec<HtmlElement>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut() + 'static,
    ) -> PageResult<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// requestAnimationFrame loop. The callback gets the frame time in seconds
/// and returns whether it wants another frame; once it says no the loop idles
/// until `wake`. Dropping the ticker cancels any pending frame.
pub struct Ticker {
    inner: Rc<TickerInner>,
}

struct TickerInner {
    window: Window,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Ticker {
    pub fn new(window: &Window, mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(TickerInner {
            window: window.clone(),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<TickerInner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |now_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if on_frame(now_ms / 1000.0) {
                inner.schedule();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);
        Self { inner }
    }

    pub fn wake(&self) {
        self.inner.schedule();
    }
}

impl TickerInner {
    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Ok(id) = self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                self.pending.set(Some(id));
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(id) = self.inner.pending.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.callback.borrow_mut().take();
    }
}
