use leptos::*;

/// Gradient text with a sweeping highlight
#[component]
pub fn ShimmerText(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!(
            "bg-gradient-to-r from-gray-400 via-white to-gray-400 bg-clip-text \
             text-transparent bg-[length:200%_100%] animate-shimmer {}",
            class
        )>
            {children()}
        </span>
    }
}
