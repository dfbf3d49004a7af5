//! Step progress dots.

use leptos::*;

/// Highlight flags for each dot; `current` is not clamped
pub fn dot_states(current: usize, total: usize) -> Vec<bool> {
    (0..total).map(|i| i < current).collect()
}

#[component]
pub fn ProgressIndicator(
    #[prop(into)]
    current: Signal<usize>,
    total: usize,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-2" role="progressbar">
            {move || {
                dot_states(current.get(), total)
                    .into_iter()
                    .map(|active| {
                        let class = if active {
                            "h-2 w-2 rounded-full bg-blue-500"
                        } else {
                            "h-2 w-2 rounded-full bg-gray-600"
                        };
                        view! { <span class=class /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_progress() {
        assert_eq!(dot_states(2, 4), vec![true, true, false, false]);
    }

    #[test]
    fn test_two_of_three() {
        assert_eq!(dot_states(2, 3), vec![true, true, false]);
    }

    #[test]
    fn test_overflow_highlights_all() {
        assert_eq!(dot_states(9, 3), vec![true, true, true]);
    }

    #[test]
    fn test_empty() {
        assert!(dot_states(0, 0).is_empty());
        assert!(dot_states(5, 0).is_empty());
        assert_eq!(dot_states(0, 2), vec![false, false]);
    }
}
