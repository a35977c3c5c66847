//! Page state machines.
//!
//! DESIGN
//! ======
//! Every module here is plain data plus methods, free of browser calls, so the
//! whole page can be driven natively with a fake clock. The app shell holds a
//! single [`page::PageState`] in a Leptos signal; time only moves when the
//! browser driver (or a test) advances the [`timeline::Timeline`].

pub mod contact;
pub mod counter;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod theme;
pub mod timeline;
pub mod toast;
pub mod typewriter;
