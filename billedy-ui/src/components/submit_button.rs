//! Submit Button
//!
//! Form submit button with a pending state.

use leptos::*;

use super::skeleton::InlineLoading;

pub const PENDING_LABEL: &str = "Saving...";

/// Resolved button state; pending always disables the button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub pending: bool,
    pub disabled: bool,
}

impl ButtonState {
    pub fn new(is_pending: bool, disabled: bool) -> Self {
        Self {
            pending: is_pending,
            disabled: disabled || is_pending,
        }
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)]
    is_pending: Signal<bool>,
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    #[prop(optional)]
    icon: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = Signal::derive(move || ButtonState::new(is_pending.get(), disabled.get()));

    view! {
        <button
            type="submit"
            class="inline-flex items-center justify-center space-x-2 px-4 py-2 bg-blue-600 \
                   hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed \
                   text-white font-medium rounded-lg transition-colors"
            disabled=move || state.get().disabled
        >
            {move || {
                if state.get().pending {
                    view! {
                        <InlineLoading />
                        <span>{PENDING_LABEL}</span>
                    }.into_view()
                } else {
                    view! {
                        <span>{children()}</span>
                        {icon.map(|i| view! { <span aria-hidden="true">{i}</span> })}
                    }.into_view()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_implies_disabled() {
        let state = ButtonState::new(true, false);
        assert!(state.pending);
        assert!(state.disabled);
    }

    #[test]
    fn test_idle_states() {
        assert_eq!(
            ButtonState::new(false, false),
            ButtonState { pending: false, disabled: false }
        );
        assert_eq!(
            ButtonState::new(false, true),
            ButtonState { pending: false, disabled: true }
        );
    }
}
