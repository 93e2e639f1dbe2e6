use leptos::*;

/// Static top bar: logo plus the screen title. No state.
#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="header-container flex items-center gap-2 px-4 py-3 bg-white shadow-sm">
            <img src="/assets/hm_logo.png" alt="healthify-me-header" class="h-8"/>
            <span class="text-sm font-semibold text-gray-600">{format!(" | {}", title)}</span>
        </section>
    }
}
