use leptos::prelude::*;

use super::motion::{Badge, BlurFade, SectionHeader};
use crate::{effects::reveal::{stagger, BLUR_FADE_DELAY}, pages::Section};

/// One timeline row. Rows with a description expand in place on click.
#[component]
pub fn ResumeCard(
    logo_url: String,
    alt_text: String,
    title: String,
    subtitle: Option<String>,
    href: Option<String>,
    badges: Vec<String>,
    period: String,
    description: Option<String>,
) -> impl IntoView {
    let expandable = description.is_some();
    let (expanded, set_expanded) = signal(false);
    let toggle = move |_| {
        if expandable {
            set_expanded.update(|open| *open = !*open);
        }
    };
    let initial = title.chars().next().map(String::from).unwrap_or_default();

    view! {
        <div class="relative pl-8 group" class:cursor-pointer=expandable on:click=toggle>
            <span class="absolute left-0 top-3 size-2.5 rounded-full bg-amber ring-4 ring-background" />
            <div class="flex items-start gap-4 rounded-xl p-3 transition-colors group-hover:bg-white/[0.03]">
                <span class="relative flex size-12 shrink-0 overflow-hidden rounded-full border border-white/10 bg-zinc-900">
                    <span class="absolute inset-0 flex items-center justify-center text-sm">
                        {initial}
                    </span>
                    <img class="relative size-full object-contain" src=logo_url alt=alt_text />
                </span>
                <div class="flex-grow flex flex-col gap-1">
                    <div class="flex items-center justify-between gap-x-2 text-base">
                        <h3 class="inline-flex items-center flex-wrap gap-1 font-semibold leading-none text-xs sm:text-sm">
                            {match href {
                                Some(href) => {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            on:click=|ev| ev.stop_propagation()
                                            class="hover:underline"
                                        >
                                            {title}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => view! { <span>{title}</span> }.into_any(),
                            }}
                            {badges
                                .into_iter()
                                .map(|badge| {
                                    view! {
                                        <Badge
                                            text=badge
                                            class="align-middle text-[10px] border-white/10 text-zinc-400"
                                        />
                                    }
                                })
                                .collect_view()}
                            <Show when=move || expandable>
                                <i
                                    class="extra-chevron-right size-4 transition-transform duration-300"
                                    class:rotate-90=move || expanded.get()
                                />
                            </Show>
                        </h3>
                        <div class="text-xs sm:text-sm tabular-nums text-muted text-right shrink-0">
                            {period}
                        </div>
                    </div>
                    {subtitle.map(|subtitle| view! { <div class="text-xs text-zinc-400">{subtitle}</div> })}
                    {description
                        .map(|description| {
                            view! {
                                <div class=move || {
                                    let shown = if expanded.get() {
                                        "max-h-96 opacity-100 mt-2"
                                    } else {
                                        "max-h-0 opacity-0"
                                    };
                                    format!(
                                        "overflow-hidden text-xs sm:text-sm text-zinc-400 transition-all duration-500 {shown}",
                                    )
                                }>
                                    {description}
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn WorkSection() -> impl IntoView {
    let portfolio = super::use_portfolio();
    let base = BLUR_FADE_DELAY * 5.0;

    view! {
        <section id=Section::Work.id() class="space-y-8">
            <SectionHeader title="Work Experience" subtitle="Professional journey and key contributions" delay=base />
            <div class="relative border-l border-white/10 ml-1 space-y-2">
                {portfolio
                    .work
                    .iter()
                    .enumerate()
                    .map(|(id, work)| {
                        view! {
                            <BlurFade delay=BLUR_FADE_DELAY * 6.0 + stagger(0.05, id)>
                                <ResumeCard
                                    logo_url=work.logo_url.clone()
                                    alt_text=work.company.clone()
                                    title=work.company.clone()
                                    subtitle=Some(work.title.clone())
                                    href=work.href.clone()
                                    badges=work.badges.clone()
                                    period=work.period()
                                    description=Some(work.description.clone())
                                />
                            </BlurFade>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    let portfolio = super::use_portfolio();
    let base = BLUR_FADE_DELAY * 7.0;

    view! {
        <section id=Section::Education.id() class="space-y-8">
            <SectionHeader title="Education" subtitle="Academic background and achievements" delay=base />
            <div class="relative border-l border-white/10 ml-1 space-y-2">
                {portfolio
                    .education
                    .iter()
                    .enumerate()
                    .map(|(id, education)| {
                        view! {
                            <BlurFade delay=BLUR_FADE_DELAY * 8.0 + stagger(0.05, id)>
                                <ResumeCard
                                    logo_url=education.logo_url.clone()
                                    alt_text=education.school.clone()
                                    title=education.school.clone()
                                    subtitle=Some(education.degree.clone())
                                    href=education.href.clone()
                                    badges=Vec::new()
                                    period=education.period()
                                    description=None
                                />
                            </BlurFade>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
