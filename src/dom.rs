// Browser bindings for the drag controller: web-sys implementations of the
// controller seams plus listener wiring on the grid element.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollToOptions, TouchEvent, Window,
};

use yew::NodeRef;

use crate::config::CarouselConfig;
use crate::controller::{
    Affordance, Cursor, DragController, FrameScheduler, InputSource, ScrollSurface,
};
use crate::error::SiteError;
use crate::state::{Direction, FrameHandle, ScrollEdges};

/// Grid element seen through the controller's seams.
#[derive(Clone)]
pub struct ElementSurface {
    el: HtmlElement,
}

impl ElementSurface {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }

    fn scroll_with(&self, left: f64, by: bool) {
        let opts = ScrollToOptions::new();
        opts.set_left(left);
        opts.set_behavior(ScrollBehavior::Smooth);
        if by {
            self.el.scroll_by_with_scroll_to_options(&opts);
        } else {
            self.el.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

impl ScrollSurface for ElementSurface {
    fn scroll_offset(&self) -> f64 {
        self.el.scroll_left() as f64
    }

    fn set_scroll_offset(&self, offset: f64) {
        self.el.set_scroll_left(offset.round() as i32);
    }

    fn scroll_width(&self) -> f64 {
        self.el.scroll_width() as f64
    }

    fn client_width(&self) -> f64 {
        self.el.client_width() as f64
    }

    fn left_offset(&self) -> f64 {
        self.el.offset_left() as f64
    }

    fn first_item_width(&self) -> Option<f64> {
        self.el
            .first_element_child()
            .and_then(|c| c.dyn_into::<HtmlElement>().ok())
            .map(|c| c.offset_width() as f64)
    }

    fn smooth_scroll_to(&self, offset: f64) {
        self.scroll_with(offset, false);
    }

    fn smooth_scroll_by(&self, delta: f64) {
        self.scroll_with(delta, true);
    }
}

impl Affordance for ElementSurface {
    fn set_cursor(&self, cursor: Cursor) {
        let _ = self.el.style().set_property("cursor", cursor.css());
    }
}

/// requestAnimationFrame with one persistent callback per carousel.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl RafScheduler {
    pub fn new(window: Window, on_frame: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut()>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&self) -> Option<FrameHandle> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<E>(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<Self, SiteError>
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                handler(e);
            }
        }) as Box<dyn FnMut(Event)>);
        let opts = AddEventListenerOptions::new();
        opts.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &opts,
        )?;
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

/// A controller attached to a live grid element. Dropping it detaches every
/// listener it registered.
pub struct BoundCarousel {
    controller: Rc<RefCell<DragController>>,
    _listeners: Vec<Listener>,
}

impl BoundCarousel {
    pub fn step(&self, dir: Direction) {
        if let Ok(c) = self.controller.try_borrow() {
            c.step(dir);
        }
    }

    pub fn edges(&self) -> ScrollEdges {
        self.controller
            .try_borrow()
            .map(|c| c.edges())
            .unwrap_or_default()
    }
}

impl Drop for BoundCarousel {
    fn drop(&mut self) {
        log::debug!("carousel unbound");
    }
}

/// Resolves a mounted node ref to the grid element.
pub fn grid_element(node: &NodeRef, name: &str) -> Result<HtmlElement, SiteError> {
    node.get()
        .ok_or_else(|| SiteError::MissingElement(name.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::NotHtmlElement(name.to_string()))
}

/// Attaches a drag controller to `container`. A missing container, or a
/// browser refusing a listener, leaves the grid with plain native scrolling.
pub fn bind(container: Option<HtmlElement>, config: CarouselConfig) -> Option<BoundCarousel> {
    let Some(el) = container else {
        log::debug!("carousel bind skipped: no container");
        return None;
    };
    match try_bind(el, config) {
        Ok(bound) => Some(bound),
        Err(e) => {
            log::warn!("carousel bind failed: {e}");
            None
        }
    }
}

fn try_bind(el: HtmlElement, config: CarouselConfig) -> Result<BoundCarousel, SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::MissingElement("window".into()))?;

    let controller = Rc::new_cyclic(|weak: &Weak<RefCell<DragController>>| {
        let weak = weak.clone();
        let frames = RafScheduler::new(window, move || {
            if let Some(c) = weak.upgrade() {
                if let Ok(mut c) = c.try_borrow_mut() {
                    c.run_frame();
                }
            }
        });
        let surface = ElementSurface::new(el.clone());
        RefCell::new(DragController::new(
            Box::new(surface.clone()),
            Box::new(frames),
            Box::new(surface),
            config,
        ))
    });

    let target: &EventTarget = &el;
    let listeners = vec![
        gesture(target, "mousedown", false, &controller, |c, e: MouseEvent| {
            c.on_gesture_start(e.page_x() as f64);
        })?,
        gesture(target, "mousemove", false, &controller, |c, e: MouseEvent| {
            if c.on_gesture_move(e.page_x() as f64, InputSource::Mouse) {
                e.prevent_default();
            }
        })?,
        gesture(target, "mouseup", false, &controller, |c, _: MouseEvent| {
            c.on_gesture_end();
        })?,
        gesture(target, "mouseleave", false, &controller, |c, _: MouseEvent| {
            c.on_gesture_cancel();
        })?,
        gesture(target, "touchstart", true, &controller, |c, e: TouchEvent| {
            if let Some(t) = e.touches().item(0) {
                c.on_gesture_start(t.page_x() as f64);
            }
        })?,
        gesture(target, "touchmove", true, &controller, |c, e: TouchEvent| {
            if let Some(t) = e.touches().item(0) {
                c.on_gesture_move(t.page_x() as f64, InputSource::Touch);
            }
        })?,
        gesture(target, "touchend", false, &controller, |c, _: TouchEvent| {
            c.on_gesture_end();
        })?,
        gesture(target, "touchcancel", false, &controller, |c, _: TouchEvent| {
            c.on_gesture_cancel();
        })?,
        // images inside cards would otherwise start a native drag
        Listener::new(target, "dragstart", false, |e: Event| e.prevent_default())?,
    ];

    log::debug!(
        "carousel bound to .{} (snap: {})",
        el.class_name(),
        config.snap
    );
    Ok(BoundCarousel {
        controller,
        _listeners: listeners,
    })
}

fn gesture<E>(
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    controller: &Rc<RefCell<DragController>>,
    f: impl Fn(&mut DragController, E) + 'static,
) -> Result<Listener, SiteError>
where
    E: JsCast + 'static,
{
    let controller = controller.clone();
    Listener::new(target, event, passive, move |e: E| {
        if let Ok(mut c) = controller.try_borrow_mut() {
            f(&mut *c, e);
        }
    })
}
