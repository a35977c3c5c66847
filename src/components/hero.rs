//! Hero section with the typed tagline and parallax drift.

use leptos::prelude::*;

use crate::app::{AppPage, PageSignal};
use crate::components::navbar::on_section_link;
use crate::components::reveal::{class_for, reveal_attr, style_for, use_reveal};
use crate::state::nav::Section;
use crate::state::reveal::ElementKind;

pub fn parallax_style(offset: f64) -> String {
    format!("transform: translateY({offset}px)")
}

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let title = page.with_untracked(|p| p.config.title.clone());
    let content = use_reveal(ElementKind::HeroContent, None);

    view! {
        <section id=Section::Home.id() class="hero" style=move || parallax_style(page.with(|p| p.nav.parallax_offset))>
            <div
                class=class_for(page, content, "hero-content")
                style=style_for(page, content)
                data-reveal-id=reveal_attr(content)
            >
                <h1 class="hero-title typing-animation">{title}</h1>
                <p class="hero-subtitle">{move || page.with(AppPage::typed_tagline)}</p>
                <div class="hero-buttons">
                    <a href=Section::Projects.href() class="btn btn-primary" on:click=on_section_link(page, Section::Projects)>
                        "View My Work"
                    </a>
                    <a href=Section::Contact.href() class="btn btn-secondary" on:click=on_section_link(page, Section::Contact)>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
