//! Per-instance debounce and throttle built on `gloo_timers`.
//!
//! Each handler owns its own instance, so two debounced listeners on the
//! same page never cancel each other's pending work.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys;

/// Trailing-edge debounce: every `call` supersedes the pending one, and the
/// wrapped function runs once with the latest argument after `wait_ms` of
/// quiet. Dropping the instance cancels anything still pending.
pub struct Debounce<T: 'static = ()> {
    wait_ms: u32,
    callback: Rc<dyn Fn(T)>,
    pending: Option<Timeout>,
}

impl<T: 'static> Debounce<T> {
    pub fn new(wait_ms: u32, callback: impl Fn(T) + 'static) -> Self {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            pending: None,
        }
    }

    pub fn call(&mut self, arg: T) {
        let callback = Rc::clone(&self.callback);
        // Replacing the Timeout drops the old one, which cancels it.
        self.pending = Some(Timeout::new(self.wait_ms, move || callback(arg)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

struct ThrottleState {
    last_ran: Option<f64>,
    trailing: Option<Timeout>,
}

/// Leading-edge throttle with a single trailing run: the first `call` fires
/// immediately, further calls inside the window collapse into one run at
/// the window's end.
pub struct Throttle {
    limit_ms: u32,
    callback: Rc<dyn Fn()>,
    state: Rc<RefCell<ThrottleState>>,
}

impl Throttle {
    pub fn new(limit_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            limit_ms,
            callback: Rc::new(callback),
            state: Rc::new(RefCell::new(ThrottleState {
                last_ran: None,
                trailing: None,
            })),
        }
    }

    pub fn call(&self) {
        let now = js_sys::Date::now();
        let mut state = self.state.borrow_mut();
        match state.last_ran {
            None => {
                state.last_ran = Some(now);
                drop(state);
                (self.callback)();
            }
            Some(last) => {
                let remaining = (self.limit_ms as f64 - (now - last)).max(0.0) as u32;
                let callback = Rc::clone(&self.callback);
                let shared = Rc::clone(&self.state);
                let limit = self.limit_ms as f64;
                state.trailing = Some(Timeout::new(remaining, move || {
                    let now = js_sys::Date::now();
                    let fire = {
                        let mut s = shared.borrow_mut();
                        let due = s.last_ran.map_or(true, |last| now - last >= limit);
                        if due {
                            s.last_ran = Some(now);
                        }
                        due
                    };
                    // Run outside the borrow so the callback may call()
                    // again without panicking.
                    if fire {
                        callback();
                    }
                }));
            }
        }
    }
}
