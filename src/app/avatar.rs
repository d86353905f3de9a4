use leptos::prelude::*;

/// Round profile picture. The initials sit underneath and show through while the
/// image loads or when it fails.
#[component]
pub fn Avatar(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] initials: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(src.is_empty());

    view! {
        <span class="relative flex size-28 md:size-32 shrink-0 overflow-hidden rounded-full ring-2 ring-white/10 shadow-2xl">
            <span class="absolute inset-0 flex items-center justify-center bg-zinc-800 text-2xl font-semibold">
                {initials}
            </span>
            <Show when=move || !failed.get()>
                <img
                    class="relative aspect-square size-full object-cover"
                    src=src.clone()
                    alt=alt.clone()
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </span>
    }
}
