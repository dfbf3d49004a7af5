//! Section Page
//!
//! Shared page for the finance sections. Entity data is not wired yet, so the
//! body is the section's loading placeholder.

use leptos::*;

use crate::components::{ClientOnly, ImageUpload, Loading, PageSkeleton};
use crate::sections::Section;

#[component]
pub fn SectionPage(section: Section) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <PageSkeleton
                title=section.title()
                show_summary=section.show_summary()
                layout=section.layout()
            />

            {section.image_folder().map(|folder| view! {
                <ClientOnly fallback=|| view! { <Loading /> }>
                    <ImageUpload folder=folder />
                </ClientOnly>
            })}
        </div>
    }
}
