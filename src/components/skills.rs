//! Skills section: one revealed card per category.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::components::reveal::{class_for, reveal_attr, style_for, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::config::SkillCategory;
use crate::state::nav::Section;
use crate::state::reveal::ElementKind;

/// Skill chips cycle through six stagger classes.
pub fn skill_item_class(index: usize) -> String {
    format!("skill-item stagger-{}", index % 6 + 1)
}

#[component]
pub fn Skills() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let categories = page.with_untracked(|p| p.config.skills.clone());

    view! {
        <section id=Section::Skills.id() class="skills">
            <div class="container">
                <SectionHeader title="Skills" subtitle="Technologies and tools I work with"/>
                <div class="skills-grid">
                    {categories.into_iter().map(|category| view! { <Category category=category/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Category(category: SkillCategory) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = use_reveal(ElementKind::SkillCategory, None);

    view! {
        <div class=class_for(page, id, "skill-category") style=style_for(page, id) data-reveal-id=reveal_attr(id)>
            <h3>{category.name}</h3>
            <div class="skill-items">
                {category
                    .skills
                    .into_iter()
                    .enumerate()
                    .map(|(index, skill)| view! { <span class=skill_item_class(index)>{skill}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
