//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections and page chrome while reading and
//! writing the shared [`PageSignal`](crate::app::PageSignal) context. Anything
//! that schedules work goes through [`driver::apply`](crate::util::driver::apply)
//! so the timeline keeps running.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod page_chrome;
pub mod projects;
pub mod reveal;
pub mod section_header;
pub mod skills;
pub mod toast_stack;
