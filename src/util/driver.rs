//! Browser clock for the page timeline.
//!
//! DESIGN
//! ======
//! Page state never owns a timer. Event mutations go through [`apply`], which
//! first catches the page clock up to `performance.now()` so delays start at
//! the event, then runs [`pump`]. `pump` arms at most one `setTimeout` for
//! the earliest due timer task and at most one animation frame while frame
//! work is queued. Timers are forgotten rather than cancelled: a timer that
//! fires with nothing due simply re-pumps.
//!
//! ```text
//! event -> apply -> tick + PageState::* -> pump -> Timeout(due) -> run_timers -> pump
//!                                               -> rAF          -> run_frame  -> pump
//! ```

#[cfg(feature = "csr")]
use std::cell::Cell;

use leptos::prelude::*;

use crate::app::{AppPage, PageSignal};
use crate::state::nav::Section;
use crate::util::viewport;

#[cfg(feature = "csr")]
thread_local! {
    static ARMED_DUE: Cell<Option<f64>> = const { Cell::new(None) };
    static FRAME_PENDING: Cell<bool> = const { Cell::new(false) };
}

/// Milliseconds on the `performance.now()` timeline.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Catch the page clock up to now, mutate page state, then [`pump`].
/// `None` if the page is gone.
pub fn apply<R>(page: PageSignal, f: impl FnOnce(&mut AppPage) -> R) -> Option<R> {
    let now = now_ms();
    let out = page.try_update(|p| {
        p.tick(now);
        f(p)
    });
    pump(page);
    out
}

/// Start a smooth scroll to a rendered section.
pub fn scroll_to_section(page: PageSignal, section: Section) {
    let Some(top) = viewport::section_top(section) else {
        log::debug!("section #{} is not rendered", section.id());
        return;
    };
    let from = viewport::scroll_y();
    apply(page, |p| p.scroll_to(from, top));
}

/// Apply pending scroll requests and make sure queued work will run.
pub fn pump(page: PageSignal) {
    #[cfg(feature = "csr")]
    {
        if let Some(y) = page.try_update_untracked(|p| p.take_scroll_request()).flatten() {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, y);
            }
        }
        let Some((due, frame_work)) = page.try_with_untracked(|p| (p.next_due_ms(), p.has_frame_work())) else {
            return;
        };
        if frame_work && !FRAME_PENDING.get() {
            request_frame(page);
        }
        if let Some(due) = due {
            arm_timer(page, due);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = page;
    }
}

#[cfg(feature = "csr")]
fn arm_timer(page: PageSignal, due: f64) {
    if ARMED_DUE.get().is_some_and(|armed| armed <= due) {
        return;
    }
    ARMED_DUE.set(Some(due));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let delay = (due - now_ms()).max(0.0).ceil() as u32;
    gloo_timers::callback::Timeout::new(delay, move || {
        if ARMED_DUE.get() == Some(due) {
            ARMED_DUE.set(None);
        }
        page.try_update(|p| p.run_timers(now_ms()));
        pump(page);
    })
    .forget();
}

#[cfg(feature = "csr")]
fn request_frame(page: PageSignal) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    FRAME_PENDING.set(true);
    let callback = Closure::once_into_js(move |timestamp: f64| {
        FRAME_PENDING.set(false);
        page.try_update(|p| p.run_frame(timestamp));
        pump(page);
    });
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("animation frame not scheduled: {err:?}");
        FRAME_PENDING.set(false);
    }
}
