//! Fixed top navigation: section links, theme toggle and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads nav state updated by the window scroll listener (scrolled flag,
//! active section) and routes clicks through the smooth-scroll driver.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::app::{AppPage, PageSignal};
use crate::state::nav::Section;
use crate::state::theme::Theme;
use crate::util::driver;

pub fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar scrolled" } else { "navbar" }
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

/// Toggle icon for `theme`, spinning right after a click.
pub fn theme_icon_class(theme: Theme, spinning: bool) -> String {
    if spinning {
        format!("{} rotating", theme.icon_class())
    } else {
        theme.icon_class().to_owned()
    }
}

/// Click handler for an in-page section link.
pub fn on_section_link(page: PageSignal, section: Section) -> impl Fn(leptos::ev::MouseEvent) + Copy {
    move |ev| {
        ev.prevent_default();
        driver::apply(page, |p| p.nav.close_menu());
        driver::scroll_to_section(page, section);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let owner = page.with_untracked(|p| p.config.owner.clone());

    let menu_class = move || if page.with(|p| p.nav.menu_open) { "nav-menu active" } else { "nav-menu" };
    let hamburger_class = move || if page.with(|p| p.nav.menu_open) { "hamburger active" } else { "hamburger" };
    let icon_class = move || page.with(|p| theme_icon_class(p.theme(), p.theme_effects().icon_spin));

    view! {
        <nav id="navbar" class=move || navbar_class(page.with(|p| p.nav.scrolled))>
            <div class="nav-container">
                <a href=Section::Home.href() class="nav-logo" on:click=on_section_link(page, Section::Home)>
                    {owner}
                </a>
                <ul id="nav-menu" class=menu_class>
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let active = move || page.with(|p| p.nav.active_section == Some(section));
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=section.href()
                                        class=move || nav_link_class(active())
                                        on:click=on_section_link(page, section)
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        title="Toggle theme (Ctrl+Shift+T)"
                        on:click=move |_| {
                            driver::apply(page, AppPage::toggle_theme);
                        }
                    >
                        <i id="theme-icon" class=icon_class></i>
                    </button>
                    <button
                        id="hamburger"
                        class=hamburger_class
                        aria-label="Toggle navigation"
                        on:click=move |_| {
                            driver::apply(page, |p| p.nav.toggle_menu());
                        }
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
