use leptos::*;

/// Destination after a successful login. Placeholder screen.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold text-fg">"Home"</h1>
                <p class="mt-3 text-base text-fg-muted">"You are signed in."</p>
            </div>
        </div>
    }
}
