//! Browser glue shared by the app shell and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page state so the
//! state machines stay testable natively. Every browser call sits behind the
//! `csr` feature; native builds compile the same functions as no-ops.

pub mod clipboard;
pub mod color_scheme;
pub mod driver;
pub mod host;
pub mod observer;
pub mod viewport;
