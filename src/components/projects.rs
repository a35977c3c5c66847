//! Projects section: revealed cards that scale in.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::components::reveal::{class_for, reveal_attr, style_for, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::config::Project;
use crate::state::nav::Section;
use crate::state::reveal::ElementKind;

/// Tech badges float with a 0.3 s phase offset each.
pub fn tech_item_style(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay_s = index as f64 * 0.3;
    format!("animation-delay: {delay_s:.1}s")
}

#[component]
pub fn Projects() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let projects = page.with_untracked(|p| p.config.projects.clone());
    let empty = projects.is_empty();

    view! {
        <section id=Section::Projects.id() class="projects">
            <div class="container">
                <SectionHeader title="Projects" subtitle="Some things I have built"/>
                <Show when=move || empty>
                    <p class="projects-empty">"Projects are on their way."</p>
                </Show>
                <div class="projects-grid">
                    {projects.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = use_reveal(ElementKind::ProjectCard, None);
    let link = project.url.map(|url| {
        view! {
            <a href=url class="project-link" target="_blank" rel="noopener noreferrer">
                <i class="fas fa-external-link-alt"></i>
                " View"
            </a>
        }
    });

    view! {
        <div class=class_for(page, id, "project-card") style=style_for(page, id) data-reveal-id=reveal_attr(id)>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>
            <div class="project-tech">
                {project
                    .tech
                    .into_iter()
                    .enumerate()
                    .map(|(index, tech)| view! { <span class="tech-item" style=tech_item_style(index)>{tech}</span> })
                    .collect_view()}
            </div>
            {link}
        </div>
    }
}
