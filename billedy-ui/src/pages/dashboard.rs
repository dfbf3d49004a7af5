//! Dashboard Page
//!
//! Landing view linking to every section, plus asset store status.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::skeleton::InlineLoading;
use crate::sections::Section;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let health = create_local_resource(|| (), |_| api::check_health());

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your finances at a glance"</p>
                </div>

                <div class="text-sm">
                    <Suspense fallback=|| view! { <InlineLoading /> }>
                        {move || health.get().map(|result| match result {
                            Ok(h) => view! {
                                <span class=if h.status == "healthy" { "text-green-400" } else { "text-yellow-400" }>
                                    {format!("Images: {} ({})", h.asset_store, h.asset_store_status)}
                                </span>
                            }.into_view(),
                            Err(e) => view! {
                                <span class="text-red-400" title=e>"API offline"</span>
                            }.into_view(),
                        })}
                    </Suspense>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {Section::ALL.into_iter().map(|section| view! {
                    <SectionCard section=section />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SectionCard(section: Section) -> impl IntoView {
    view! {
        <A
            href=section.path()
            class="block bg-gray-800 hover:bg-gray-700 rounded-lg p-5 transition-colors"
        >
            <div class="text-2xl mb-2">{section.icon()}</div>
            <h2 class="text-lg font-semibold">{section.title()}</h2>
            <p class="text-sm text-gray-400">{section.description()}</p>
        </A>
    }
}
