use leptos::{ev::PointerEvent, prelude::*};

use super::{
    motion::{Badge, BlurFade, SectionHeader},
    use_portfolio,
};
use crate::{
    effects::{
        cylinder::{Cylinder, CylinderState},
        reveal::BLUR_FADE_DELAY,
    },
    markdown,
    pages::Section,
    portfolio::Project,
};

const CYLINDER_RADIUS: f64 = 460.0;
/// Pointer travel, in px, below which a press counts as a click.
const CLICK_SLOP: f64 = 5.0;
const PLACEHOLDER: &str = "/placeholder.svg";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let portfolio = use_portfolio();
    let count = portfolio.projects.len();
    let cylinder = RwSignal::new(Cylinder::new(count, CYLINDER_RADIUS));
    let selected = RwSignal::new(None::<usize>);
    // (timestamp of the last pointer event in ms, total px travelled this press)
    let last_move = StoredValue::new((0.0_f64, 0.0_f64));

    let on_down = move |ev: PointerEvent| {
        last_move.set_value((ev.time_stamp(), 0.0));
        cylinder.update(Cylinder::drag_start);
    };
    let on_move = move |ev: PointerEvent| {
        if cylinder.with_untracked(Cylinder::state) == CylinderState::Idle {
            return;
        }
        let (previous, travelled) = last_move.get_value();
        let now = ev.time_stamp();
        let delta_x = f64::from(ev.movement_x());
        last_move.set_value((now, travelled + delta_x.abs()));
        cylinder.update(|c| c.drag(delta_x, (now - previous) / 1000.0));
    };
    let on_up = move |ev: PointerEvent| {
        let idle = (ev.time_stamp() - last_move.get_value().0) / 1000.0;
        cylinder.update(|c| c.release(idle));
    };
    let open = move |index: usize| {
        if last_move.get_value().1 < CLICK_SLOP {
            selected.set(Some(index));
        }
    };

    let cards = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let (tags, hidden) = project.tag_preview(3);
            let tags = tags.to_vec();
            let cover = project.image.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
            view! {
                <div
                    class="absolute inset-0 rounded-2xl overflow-hidden border border-white/10 bg-zinc-900/90 [backface-visibility:hidden] select-none"
                    style=move || cylinder.with(|c| c.item_style(index))
                    on:click=move |_| open(index)
                >
                    <img class="h-1/2 w-full object-cover" src=cover alt=project.title.clone() draggable="false" />
                    <div class="flex flex-col gap-2 p-4">
                        <h3 class="font-semibold">{project.title.clone()}</h3>
                        <time class="text-xs text-muted">{project.dates.clone()}</time>
                        <div class="flex flex-wrap gap-1">
                            {tags
                                .into_iter()
                                .map(|tag| view! { <Badge text=tag class="border-white/10 text-[10px]" /> })
                                .collect_view()}
                            {(hidden > 0)
                                .then(|| {
                                    view! {
                                        <Badge text=format!("+{hidden}") class="border-white/10 text-[10px]" />
                                    }
                                })}
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Projects.id() class="space-y-8">
            <SectionHeader
                title="Featured Projects"
                subtitle="Explore my work. Drag to navigate."
                delay=BLUR_FADE_DELAY * 11.0
            />
            <BlurFade delay=BLUR_FADE_DELAY * 12.0>
                <div class="relative h-[560px] w-full flex items-center justify-center overflow-hidden [perspective:2000px] touch-pan-y">
                    <div
                        class="relative w-[300px] h-[420px] cursor-grab active:cursor-grabbing"
                        style=move || cylinder.get().style()
                        on:pointerdown=on_down
                        on:pointermove=on_move
                        on:pointerup=on_up
                        on:pointerleave=on_up
                    >
                        {cards}
                    </div>
                    <div class="absolute inset-y-0 left-0 w-24 bg-gradient-to-r from-background to-transparent pointer-events-none" />
                    <div class="absolute inset-y-0 right-0 w-24 bg-gradient-to-l from-background to-transparent pointer-events-none" />
                </div>
                <div class="flex items-center justify-center gap-4">
                    <button
                        class="rounded-full border border-white/10 px-4 py-2 text-sm hover:bg-white/5"
                        aria-label="Previous project"
                        on:click=move |_| cylinder.update(|c| c.step_by(-1))
                    >
                        "←"
                    </button>
                    <span class="text-xs tabular-nums text-muted">
                        {move || {
                            cylinder
                                .with(Cylinder::front_index)
                                .map(|i| format!("{} / {count}", i + 1))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        class="rounded-full border border-white/10 px-4 py-2 text-sm hover:bg-white/5"
                        aria-label="Next project"
                        on:click=move |_| cylinder.update(|c| c.step_by(1))
                    >
                        "→"
                    </button>
                </div>
            </BlurFade>
            {move || {
                selected
                    .get()
                    .and_then(|index| portfolio.projects.get(index).cloned())
                    .map(|project| {
                        view! { <ProjectDialog project on_close=move |_| selected.set(None) /> }
                    })
            }}
        </section>
    }
}

/// Full view of one project over a dimmed backdrop.
#[component]
fn ProjectDialog(project: Project, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let media = match (&project.video, &project.image) {
        (Some(video), _) => {
            view! {
                <video
                    class="w-full max-h-72 object-cover"
                    src=video.clone()
                    controls=true
                    autoplay=true
                    muted=true
                    playsinline=true
                />
            }
                .into_any()
        }
        (None, image) => {
            let src = image.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
            view! { <img class="w-full max-h-72 object-cover" src=src alt=project.title.clone() /> }
                .into_any()
        }
    };
    let live = project.live_link().map(str::to_string);

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-2xl border border-white/10 bg-zinc-950"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute right-3 top-3 z-10 rounded-full bg-black/60 px-2 text-lg"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
                {media}
                <div class="flex flex-col gap-4 p-6">
                    <div class="flex items-baseline justify-between gap-2">
                        <h3 class="text-xl font-bold">{project.title.clone()}</h3>
                        <time class="text-xs text-muted shrink-0">{project.dates.clone()}</time>
                    </div>
                    <div
                        class="prose prose-invert prose-sm max-w-full text-zinc-400"
                        inner_html=markdown::to_html(&project.description)
                    />
                    <div class="flex flex-wrap gap-1">
                        {project
                            .technologies
                            .iter()
                            .map(|tag| view! { <Badge text=tag.clone() class="border-white/10" /> })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 rounded-md bg-white px-3 py-1 text-xs font-medium text-black"
                                    >
                                        <i class=link.icon.class() />
                                        {link.kind.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        {live
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 rounded-md border border-white/20 px-3 py-1 text-xs font-medium"
                                    >
                                        <i class="extra-link" />
                                        "Visit Live"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
