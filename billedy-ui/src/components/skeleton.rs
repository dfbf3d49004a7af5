//! Loading Skeletons
//!
//! Spinners and per-section placeholder pages shown while data loads.

use leptos::*;

/// Body shape of a section placeholder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkeletonLayout {
    List,
    Table,
}

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for summary cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-700 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-700 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="flex items-center space-x-4 bg-gray-800 rounded-lg p-4">
                    <div class="h-10 w-10 bg-gray-700 rounded-full" />
                    <div class="flex-1 space-y-2">
                        <div class="h-4 bg-gray-700 rounded w-1/3" />
                        <div class="h-3 bg-gray-700 rounded w-1/4" />
                    </div>
                    <div class="h-4 bg-gray-700 rounded w-16" />
                </div>
            }).collect_view()}
        </div>
    }
}

/// Skeleton loader for tabular data
#[component]
pub fn TableSkeleton(
    #[prop(default = 8)]
    rows: usize,
    #[prop(default = 4)]
    columns: usize,
) -> impl IntoView {
    let row = move || {
        (0..columns)
            .map(|_| view! { <div class="h-4 bg-gray-700 rounded flex-1" /> })
            .collect_view()
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="flex space-x-4 pb-3 mb-3 border-b border-gray-700">
                {row()}
            </div>
            <div class="space-y-3">
                {(0..rows).map(|_| view! {
                    <div class="flex space-x-4">{row()}</div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Placeholder for a whole section page
#[component]
pub fn PageSkeleton(
    title: &'static str,
    #[prop(default = false)]
    show_summary: bool,
    #[prop(default = SkeletonLayout::List)]
    layout: SkeletonLayout,
) -> impl IntoView {
    view! {
        <div class="space-y-6" aria-busy="true">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{title}</h1>
                <div class="h-9 w-28 bg-gray-700 rounded-lg animate-pulse" />
            </div>

            {show_summary.then(|| view! {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <CardSkeleton />
                    <CardSkeleton />
                    <CardSkeleton />
                </div>
            })}

            {match layout {
                SkeletonLayout::List => view! { <ListSkeleton /> }.into_view(),
                SkeletonLayout::Table => view! { <TableSkeleton /> }.into_view(),
            }}
        </div>
    }
}
