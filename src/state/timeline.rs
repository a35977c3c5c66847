//! Deferred work queue: timers and per-frame callbacks on one clock.
//!
//! DESIGN
//! ======
//! Every animation on the page (toast lifecycle, staggered reveals, counters,
//! typewriter, smooth scroll) is a chain of deferred tasks. The timeline owns
//! those tasks but not the clock: callers pass the current time in, so tests
//! can drive it with a fake clock and the browser driver with
//! `performance.now()` and `requestAnimationFrame` timestamps.
//!
//! Ordering: frame tasks run in request order; timer tasks run no earlier
//! than their due time, ties broken by scheduling order.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

#[derive(Clone, Debug)]
struct Timer<T> {
    due_ms: f64,
    seq: u64,
    task: T,
}

/// Queue of pending timer and frame tasks.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    now_ms: f64,
    seq: u64,
    timers: Vec<Timer<T>>,
    frame: Vec<T>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::starting_at(0.0)
    }
}

impl<T> Timeline<T> {
    /// Empty timeline whose clock reads `now_ms`.
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms, seq: 0, timers: Vec::new(), frame: Vec::new() }
    }

    /// Time of the last fired timer, frame or [`sync_to`](Self::sync_to).
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Run `task` once `delay_ms` has elapsed from the current clock.
    pub fn after(&mut self, delay_ms: f64, task: T) {
        let seq = self.seq;
        self.seq += 1;
        self.timers.push(Timer { due_ms: self.now_ms + delay_ms.max(0.0), seq, task });
    }

    /// Run `task` on the next display frame.
    pub fn next_frame(&mut self, task: T) {
        self.frame.push(task);
    }

    /// Remove the earliest timer due by `now_ms`, moving the clock to its due
    /// time so work it schedules is measured from when it was due.
    ///
    /// Ties are broken by scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<T> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(index, _)| index)?;
        let timer = self.timers.swap_remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.task)
    }

    /// Move the clock forward to `now_ms` without running anything.
    ///
    /// The clock never moves backwards; an earlier `now_ms` is ignored.
    pub fn sync_to(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Drain the frame queue for a frame starting at `now_ms`.
    ///
    /// Tasks queued while the returned batch runs belong to the next frame.
    pub fn take_frame(&mut self, now_ms: f64) -> Vec<T> {
        self.sync_to(now_ms);
        std::mem::take(&mut self.frame)
    }

    /// Due time of the earliest pending timer.
    pub fn next_due_ms(&self) -> Option<f64> {
        self.timers.iter().map(|t| t.due_ms).min_by(f64::total_cmp)
    }

    pub fn has_frame_work(&self) -> bool {
        !self.frame.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.frame.is_empty()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
