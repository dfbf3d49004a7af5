//! Navigation Component
//!
//! Header with section links, the theme toggle and the signed-in user.

use leptos::*;
use leptos_router::*;

use super::ShimmerText;
use crate::sections::Section;
use crate::state::{use_session, use_theme};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💳"</span>
                        <span class="text-xl font-bold">
                            <ShimmerText>"Billedy"</ShimmerText>
                        </span>
                    </A>

                    <div class="hidden lg:flex items-center space-x-1">
                        {Section::ALL.into_iter().map(|section| view! {
                            <NavLink href=section.path() label=section.title() />
                        }).collect_view()}
                    </div>

                    <div class="flex items-center space-x-3">
                        <ThemeToggle />
                        <UserBadge />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="p-2 rounded-lg text-gray-300 hover:bg-gray-700"
            title=move || format!("Theme: {}", theme.theme.get().as_str())
            on:click=move |_| theme.cycle()
        >
            {move || theme.theme.get().icon()}
        </button>
    }
}

#[component]
fn UserBadge() -> impl IntoView {
    let session = use_session();

    move || {
        session.user.get().map(|user| {
            let initials = user.initials();
            view! {
                <div class="flex items-center space-x-2" title=user.email.unwrap_or_default()>
                    {match user.image {
                        Some(src) => view! {
                            <img src=src alt="" class="h-8 w-8 rounded-full" />
                        }.into_view(),
                        None => view! {
                            <span class="h-8 w-8 rounded-full bg-gray-600 flex items-center justify-center text-xs">
                                {initials}
                            </span>
                        }.into_view(),
                    }}
                    <span class="hidden md:inline text-sm text-gray-300">{user.name}</span>
                </div>
            }
        })
    }
}
