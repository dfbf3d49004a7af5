//! Client-Only Guard
//!
//! Defers rendering of browser-dependent children until after the first
//! render pass has been committed.

use leptos::*;

/// Mount state; moves forward once and never back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountGuard {
    #[default]
    NotMounted,
    Mounted,
}

impl MountGuard {
    pub fn mount(&mut self) {
        *self = MountGuard::Mounted;
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, MountGuard::Mounted)
    }
}

#[component]
pub fn ClientOnly(
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let guard = create_rw_signal(MountGuard::default());

    create_effect(move |_| {
        request_animation_frame(move || guard.update(MountGuard::mount));
    });

    view! {
        <Show when=move || guard.get().is_mounted() fallback=fallback>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unmounted() {
        assert!(!MountGuard::default().is_mounted());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut guard = MountGuard::default();
        guard.mount();
        guard.mount();
        assert_eq!(guard, MountGuard::Mounted);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_fallback_renders_until_mounted() {
        let host = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&host).unwrap();

        mount_to(host.clone().unchecked_into(), || {
            view! {
                <ClientOnly fallback=|| view! { <p>"waiting"</p> }>
                    <p>"ready"</p>
                </ClientOnly>
            }
        });

        let before = host.text_content().unwrap_or_default();
        assert!(before.contains("waiting"));
        assert!(!before.contains("ready"));

        gloo_timers::future::TimeoutFuture::new(100).await;

        let after = host.text_content().unwrap_or_default();
        assert!(after.contains("ready"));
        assert!(!after.contains("waiting"));
    }

    #[wasm_bindgen_test]
    async fn test_default_fallback_is_empty() {
        let host = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&host).unwrap();

        mount_to(host.clone().unchecked_into(), || {
            view! {
                <ClientOnly>
                    <p>"ready"</p>
                </ClientOnly>
            }
        });

        assert_eq!(host.text_content().unwrap_or_default().trim(), "");

        gloo_timers::future::TimeoutFuture::new(100).await;
        assert!(host.text_content().unwrap_or_default().contains("ready"));
    }
}
