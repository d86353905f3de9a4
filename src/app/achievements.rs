use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::{components::A, hooks::use_params_map};

use super::{
    motion::{Badge, BlurFade, SectionHeader, SpotlightCard},
    use_portfolio, NotFound,
};
use crate::{
    effects::reveal::{stagger, BLUR_FADE_DELAY},
    pages::{AchievementDetail, DetailSection, Section},
};

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <section id=Section::Achievements.id() class="space-y-8">
            <SectionHeader
                title="Recognition & Awards"
                subtitle="Highlights from competitions and hackathons around the world."
                delay=BLUR_FADE_DELAY * 13.0
            />
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {portfolio
                    .achievements
                    .iter()
                    .enumerate()
                    .map(|(id, achievement)| {
                        view! {
                            <BlurFade delay=BLUR_FADE_DELAY * 14.0 + stagger(0.05, id)>
                                <A href=achievement.path() attr:class="block group h-full">
                                    <SpotlightCard
                                        class="rounded-xl border border-white/[0.06] bg-zinc-900/60 h-full"
                                        color="rgba(255, 255, 255, 0.03)"
                                    >
                                        <div class="relative flex flex-col gap-4 p-6 h-full transition-all duration-300 group-hover:-translate-y-0.5">
                                            <div class="flex items-start justify-between">
                                                <span class="flex items-center justify-center size-10 rounded-xl bg-zinc-800 text-xl border border-white/[0.06]">
                                                    {achievement.icon.clone()}
                                                </span>
                                                <i class="extra-arrow-right text-muted transition-transform duration-300 group-hover:translate-x-1" />
                                            </div>
                                            <div class="space-y-2 flex-1">
                                                <h3 class="font-medium leading-tight group-hover:underline underline-offset-4">
                                                    {achievement.title.clone()}
                                                </h3>
                                                <p class="text-sm text-muted leading-relaxed line-clamp-2">
                                                    {achievement.description.clone()}
                                                </p>
                                            </div>
                                            <time class="text-xs text-zinc-500">{achievement.date.clone()}</time>
                                        </div>
                                    </SpotlightCard>
                                </A>
                            </BlurFade>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// `/achievements/:slug`. Unknown slugs fall through to the 404 page.
#[component]
pub fn AchievementPage() -> impl IntoView {
    let portfolio = use_portfolio();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || {
        let slug = slug();
        match AchievementDetail::resolve(&portfolio, &slug) {
            Ok(detail) => detail_view(&detail).into_any(),
            Err(err) => {
                log::warn!("{err}");
                view! { <NotFound /> }.into_any()
            }
        }
    }
}

fn detail_view(detail: &AchievementDetail) -> impl IntoView {
    let achievement = detail.achievement;
    let facts = detail
        .facts()
        .into_iter()
        .map(|(label, value)| {
            let highlight = label == "Placement";
            view! {
                <div>
                    <h3 class="text-sm font-medium text-muted mb-1">{label}</h3>
                    <p class="font-semibold" class:text-green-400=highlight>
                        {value.to_string()}
                    </p>
                </div>
            }
        })
        .collect_view();
    let sections = detail.sections().into_iter().map(section_view).collect_view();
    let illustration = detail.illustration().map(|src| {
        view! {
            <img
                class="w-full rounded-lg border border-white/10 object-cover mb-6"
                src=src.to_string()
                alt=achievement.title.clone()
            />
        }
    });

    view! {
        <Title text=detail.meta.title.clone() />
        <Meta name="description" content=detail.meta.description.clone() />
        <section class="w-full max-w-2xl mx-auto py-16">
            <BlurFade delay=BLUR_FADE_DELAY>
                <A
                    href="/#achievements"
                    attr:class="text-sm text-muted hover:text-foreground mb-4 inline-block"
                >
                    "← Back to Achievements"
                </A>
            </BlurFade>
            <BlurFade delay=BLUR_FADE_DELAY * 2.0>
                <div class="flex items-center gap-4 mb-6">
                    <span class="text-5xl">{achievement.icon.clone()}</span>
                    <div>
                        <h1 class="text-2xl font-bold tracking-tight sm:text-3xl">
                            {achievement.title.clone()}
                        </h1>
                        <p class="text-muted">{achievement.date.clone()}</p>
                    </div>
                </div>
            </BlurFade>
            <BlurFade delay=BLUR_FADE_DELAY * 2.5>{illustration}</BlurFade>
            <BlurFade delay=BLUR_FADE_DELAY * 3.0>
                <div class="rounded-lg border border-white/10 bg-zinc-900/60 p-6 space-y-6">
                    <div class="grid gap-4 sm:grid-cols-2">{facts}</div>
                    {sections}
                </div>
            </BlurFade>
        </section>
    }
}

fn section_view(section: DetailSection) -> AnyView {
    match section {
        DetailSection::Technologies(tags) => {
            view! {
                <div>
                    <h3 class="text-sm font-medium text-muted mb-2">"Technologies Used"</h3>
                    <div class="flex flex-wrap gap-2">
                        {tags
                            .iter()
                            .map(|tag| view! { <Badge text=tag.clone() class="border-white/10" /> })
                            .collect_view()}
                    </div>
                </div>
            }
                .into_any()
        }
        DetailSection::About(about) => {
            view! {
                <div>
                    <h3 class="text-sm font-medium text-muted mb-2">"About"</h3>
                    <p class="text-sm leading-relaxed">{about.to_string()}</p>
                </div>
            }
                .into_any()
        }
        DetailSection::Highlights(highlights) => {
            view! {
                <div>
                    <h3 class="text-sm font-medium text-muted mb-2">"Key Highlights"</h3>
                    <ul class="list-disc list-inside space-y-1 text-sm">
                        {highlights
                            .iter()
                            .map(|highlight| view! { <li>{highlight.clone()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
                .into_any()
        }
        DetailSection::Links(links) => {
            view! {
                <div>
                    <h3 class="text-sm font-medium text-muted mb-2">"Links"</h3>
                    <div class="flex flex-wrap gap-2">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.to_string()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 rounded-md border border-white/20 px-3 py-1 text-xs font-medium hover:bg-white/5"
                                    >
                                        <i class=link.icon.class() />
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
                .into_any()
        }
    }
}
