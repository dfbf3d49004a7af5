//! App Root Component
//!
//! Root layout: global providers, fonts, navigation, routing and toasts.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, ToastStack};
use crate::pages::{Dashboard, NotFound, SectionPage};
use crate::sections::Section;
use crate::state::{provide_session, provide_theme, provide_toasts};

const FONT_VARS: &str = "--font-sans: 'Inter', ui-sans-serif, system-ui, sans-serif; \
                         --font-mono: 'JetBrains Mono', ui-monospace, monospace;";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_theme();
    provide_session();
    provide_toasts();

    view! {
        <Router>
            <div
                class="min-h-screen bg-gray-900 text-white flex flex-col font-sans antialiased"
                style=FONT_VARS
            >
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/accounts" view=|| view! { <SectionPage section=Section::Accounts /> } />
                        <Route path="/budgets" view=|| view! { <SectionPage section=Section::Budgets /> } />
                        <Route path="/categories" view=|| view! { <SectionPage section=Section::Categories /> } />
                        <Route path="/cycles" view=|| view! { <SectionPage section=Section::Cycles /> } />
                        <Route path="/savings" view=|| view! { <SectionPage section=Section::Savings /> } />
                        <Route path="/templates" view=|| view! { <SectionPage section=Section::Templates /> } />
                        <Route path="/transactions" view=|| view! { <SectionPage section=Section::Transactions /> } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <ToastStack />
            </div>
        </Router>
    }
}
