use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::effects::pointer::PointerPosition;

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("no browser window in this render context")]
    Unavailable,
    #[error("failed to read scroll offset: {0}")]
    ScrollRead(String),
}

/// The browser window, treated as an optional capability.
#[derive(Clone, Debug)]
pub struct Viewport {
    window: Window,
}

impl Viewport {
    pub fn current() -> Result<Self, ViewportError> {
        web_sys::window()
            .map(|window| Viewport { window })
            .ok_or(ViewportError::Unavailable)
    }

    pub fn scroll_offset(&self) -> Result<f64, ViewportError> {
        self.window
            .scroll_y()
            .map_err(|e| ViewportError::ScrollRead(format!("{:?}", e)))
    }
}

/// Forwards values to a sink until closed. Clones share the same switch, so
/// closing any handle silences every listener holding one.
pub struct EventGate<T> {
    sink: Rc<dyn Fn(T)>,
    open: Rc<Cell<bool>>,
}

impl<T> Clone for EventGate<T> {
    fn clone(&self) -> Self {
        EventGate {
            sink: Rc::clone(&self.sink),
            open: Rc::clone(&self.open),
        }
    }
}

impl<T> EventGate<T> {
    pub fn new(sink: impl Fn(T) + 'static) -> Self {
        EventGate {
            sink: Rc::new(sink),
            open: Rc::new(Cell::new(true)),
        }
    }

    pub fn forward(&self, value: T) {
        if self.open.get() {
            (self.sink)(value);
        }
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

/// Scroll and mousemove listeners on the window. The listeners live exactly
/// as long as this value.
pub struct ViewportSubscription {
    scroll: EventGate<f64>,
    pointer: EventGate<PointerPosition>,
    _listeners: [EventListener; 2],
}

impl ViewportSubscription {
    pub fn subscribe(
        viewport: &Viewport,
        on_scroll: impl Fn(f64) + 'static,
        on_pointer: impl Fn(PointerPosition) + 'static,
    ) -> Self {
        let scroll = EventGate::new(on_scroll);
        let pointer = EventGate::new(on_pointer);

        let scroll_listener = {
            let scroll = scroll.clone();
            let target = viewport.window.clone();
            let viewport = viewport.clone();
            EventListener::new(&target, "scroll", move |_| {
                match viewport.scroll_offset() {
                    Ok(y) => scroll.forward(y),
                    Err(e) => warn!("{}", e),
                }
            })
        };

        let pointer_listener = {
            let pointer = pointer.clone();
            EventListener::new(&viewport.window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    pointer.forward(PointerPosition::new(
                        event.client_x() as f64,
                        event.client_y() as f64,
                    ));
                }
            })
        };

        // A reload can restore a mid-page scroll position before any event fires.
        match viewport.scroll_offset() {
            Ok(y) => scroll.forward(y),
            Err(e) => warn!("{}", e),
        }

        info!("Viewport listeners attached");
        ViewportSubscription {
            scroll,
            pointer,
            _listeners: [scroll_listener, pointer_listener],
        }
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.scroll.close();
        self.pointer.close();
        info!("Viewport listeners released");
    }
}
