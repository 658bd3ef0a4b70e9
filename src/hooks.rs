use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use yew::prelude::*;

use crate::config;
use crate::effects::coalesce::FrameCoalescer;
use crate::effects::pointer::PointerPosition;
use crate::state::{PageState, ViewportAction};
use crate::viewport::{Viewport, ViewportSubscription};

/// Holds back values until the next animation frame, then delivers the latest.
struct FramePump<T> {
    pending: RefCell<FrameCoalescer<T>>,
    frame: RefCell<Option<AnimationFrame>>,
    deliver: Box<dyn Fn(T)>,
}

impl<T: 'static> FramePump<T> {
    fn new(deliver: impl Fn(T) + 'static) -> Rc<Self> {
        Rc::new(FramePump {
            pending: RefCell::new(FrameCoalescer::new()),
            frame: RefCell::new(None),
            deliver: Box::new(deliver),
        })
    }

    fn push(self: &Rc<Self>, value: T) {
        if !self.pending.borrow_mut().offer(value) {
            return;
        }
        let pump = Rc::clone(self);
        let handle = request_animation_frame(move |_| pump.flush());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn flush(&self) {
        let latest = self.pending.borrow_mut().take();
        if let Some(value) = latest {
            (self.deliver)(value);
        }
    }

    // Drops the frame handle, which also breaks the pump <-> closure cycle.
    fn cancel(&self) {
        self.frame.borrow_mut().take();
        self.pending.borrow_mut().take();
    }
}

struct Tracking {
    subscription: ViewportSubscription,
    pumps: Option<(Rc<FramePump<f64>>, Rc<FramePump<PointerPosition>>)>,
}

impl Tracking {
    fn start(viewport: &Viewport, dispatcher: UseReducerDispatcher<PageState>) -> Self {
        let scroll_dispatch = {
            let dispatcher = dispatcher.clone();
            move |y: f64| dispatcher.dispatch(ViewportAction::Scrolled(y))
        };
        let pointer_dispatch =
            move |p: PointerPosition| dispatcher.dispatch(ViewportAction::PointerMoved(p));

        if !config::coalesce_to_animation_frame() {
            return Tracking {
                subscription: ViewportSubscription::subscribe(
                    viewport,
                    scroll_dispatch,
                    pointer_dispatch,
                ),
                pumps: None,
            };
        }

        let scroll_pump = FramePump::new(scroll_dispatch);
        let pointer_pump = FramePump::new(pointer_dispatch);
        let subscription = ViewportSubscription::subscribe(
            viewport,
            {
                let pump = Rc::clone(&scroll_pump);
                move |y: f64| pump.push(y)
            },
            {
                let pump = Rc::clone(&pointer_pump);
                move |p: PointerPosition| pump.push(p)
            },
        );
        Tracking {
            subscription,
            pumps: Some((scroll_pump, pointer_pump)),
        }
    }

    fn stop(self) {
        self.subscription.release();
        if let Some((scroll_pump, pointer_pump)) = self.pumps {
            scroll_pump.cancel();
            pointer_pump.cancel();
        }
    }
}

/// Feeds window scroll and cursor movement into the page reducer for as long
/// as the calling component is mounted. Without a window the page keeps its
/// initial, static look.
#[hook]
pub fn use_viewport_tracking(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with_deps(
        move |_| {
            let tracking = match Viewport::current() {
                Ok(viewport) => Some(Tracking::start(&viewport, dispatcher)),
                Err(e) => {
                    warn!("{}, parallax and glow stay static", e);
                    None
                }
            };
            move || {
                if let Some(tracking) = tracking {
                    tracking.stop();
                }
            }
        },
        (),
    );
}
