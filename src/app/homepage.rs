use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::{
    achievements::AchievementsSection,
    avatar::Avatar,
    motion::{
        BlurFade, FloatingTags, LetterPullup, MagneticButton, Marquee, NumberTicker,
        SectionHeader, SpotlightCard, TiltCard,
    },
    projects::ProjectsSection,
    resume::{EducationSection, WorkSection},
    use_portfolio,
};
use crate::{
    effects::reveal::{stagger, BLUR_FADE_DELAY},
    markdown,
    pages::{home_meta, Section, HOME_SECTIONS},
};

#[component]
pub fn HomePage() -> impl IntoView {
    let meta = home_meta(&use_portfolio());

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <div class="flex flex-col space-y-16 sm:space-y-32 mb-24">
            {HOME_SECTIONS
                .iter()
                .map(|section| match section {
                    Section::Hero => view! { <Hero /> }.into_any(),
                    Section::Stats => view! { <Stats /> }.into_any(),
                    Section::About => view! { <About /> }.into_any(),
                    Section::Work => view! { <WorkSection /> }.into_any(),
                    Section::Education => view! { <EducationSection /> }.into_any(),
                    Section::Skills => view! { <Skills /> }.into_any(),
                    Section::Projects => view! { <ProjectsSection /> }.into_any(),
                    Section::Achievements => view! { <AchievementsSection /> }.into_any(),
                    Section::Contact => view! { <Contact /> }.into_any(),
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let portfolio = use_portfolio();
    let profile = &portfolio.profile;
    let socials = portfolio
        .navbar_socials()
        .map(|social| {
            view! {
                <MagneticButton strength=0.2>
                    <a
                        href=social.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=social.name.clone()
                        class="flex items-center gap-2 px-5 py-2.5 rounded-xl bg-zinc-900/80 border border-white/[0.08] hover:border-amber/30 backdrop-blur-sm transition-all duration-300 group"
                    >
                        <i class=format!("{} text-muted group-hover:text-amber", social.icon.class()) />
                        <span class="text-sm text-muted group-hover:text-foreground hidden sm:inline">
                            {social.name.clone()}
                        </span>
                    </a>
                </MagneticButton>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Hero.id() class="relative pt-16 sm:pt-32 space-y-12">
            <div class="flex flex-col items-center text-center space-y-8">
                <BlurFade delay=BLUR_FADE_DELAY * 0.5>
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-emerald-500/10 border border-emerald-500/20">
                        <span class="relative flex size-2.5">
                            <span class="animate-ping absolute inline-flex size-full rounded-full bg-emerald-400 opacity-75" />
                            <span class="relative inline-flex rounded-full size-2.5 bg-emerald-500" />
                        </span>
                        <span class="text-xs font-semibold text-emerald-400 uppercase tracking-wider">
                            "Available for work"
                        </span>
                    </div>
                </BlurFade>
                <BlurFade delay=BLUR_FADE_DELAY * 0.7>
                    <Avatar
                        src=profile.avatar_url.clone()
                        alt=profile.name.clone()
                        initials=profile.initials.clone()
                    />
                </BlurFade>
                <h1 class="text-5xl font-extrabold tracking-tight sm:text-6xl xl:text-7xl">
                    <LetterPullup
                        words=format!("Hi, I'm {}", profile.first_name())
                        delay=BLUR_FADE_DELAY
                        class="justify-center"
                    />
                </h1>
                <BlurFade delay=BLUR_FADE_DELAY * 2.0>
                    <p class="mx-auto max-w-2xl text-lg md:text-xl text-muted leading-relaxed">
                        {profile.description.clone()}
                    </p>
                </BlurFade>
                <BlurFade delay=BLUR_FADE_DELAY * 2.5>
                    <div class="flex items-center gap-3 justify-center pt-4">{socials}</div>
                </BlurFade>
            </div>
            <BlurFade delay=BLUR_FADE_DELAY * 3.0>
                <p class="text-center text-xs uppercase tracking-widest text-muted mb-6">
                    "Technologies I Work With"
                </p>
                <FloatingTags tags=portfolio.skills.clone() max_tags=10 />
            </BlurFade>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <section id=Section::Stats.id()>
            <BlurFade delay=BLUR_FADE_DELAY * 2.5>
                <div class="grid grid-cols-3 gap-3 sm:gap-5">
                    {portfolio
                        .stats
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <TiltCard class="rounded-xl bg-zinc-900/60 border border-white/[0.06]">
                                    <div class="flex flex-col items-center justify-center py-6 sm:py-8 space-y-2">
                                        <span class="text-xl sm:text-2xl mb-1">{stat.icon.clone()}</span>
                                        <span class="text-3xl sm:text-4xl font-extrabold tracking-tight">
                                            <NumberTicker
                                                value=stat.value
                                                delay=0.3 + stagger(0.2, i)
                                                suffix=stat.suffix.clone()
                                            />
                                        </span>
                                        <span class="text-[10px] sm:text-xs text-muted uppercase tracking-widest text-center px-2">
                                            {stat.label.clone()}
                                        </span>
                                    </div>
                                </TiltCard>
                            }
                        })
                        .collect_view()}
                </div>
            </BlurFade>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <section id=Section::About.id() class="space-y-8">
            <SectionHeader
                title="About"
                subtitle="Building from the ground up, from AI models and edge deployments to full-stack applications."
                delay=BLUR_FADE_DELAY * 3.0
            />
            <BlurFade delay=BLUR_FADE_DELAY * 4.0>
                <div class="relative rounded-xl border border-white/[0.06] bg-zinc-900/40 p-6 sm:p-8">
                    <div
                        class="prose prose-invert max-w-full text-pretty text-sm sm:text-base text-muted leading-relaxed pl-4"
                        inner_html=markdown::to_html(&portfolio.profile.summary)
                    />
                </div>
            </BlurFade>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let portfolio = use_portfolio();
    let skills = portfolio.skills.clone();
    let reversed: Vec<String> = skills.iter().rev().cloned().collect();

    view! {
        <section id=Section::Skills.id() class="flex flex-col gap-y-6">
            <BlurFade delay=BLUR_FADE_DELAY * 9.0>
                <h2 class="text-sm font-medium uppercase tracking-widest text-muted">"Skills"</h2>
            </BlurFade>
            <BlurFade delay=BLUR_FADE_DELAY * 10.0>
                <div class="relative">
                    <div class="pointer-events-none absolute inset-y-0 left-0 w-16 z-10 bg-gradient-to-r from-background to-transparent" />
                    <div class="pointer-events-none absolute inset-y-0 right-0 w-16 z-10 bg-gradient-to-l from-background to-transparent" />
                    <Marquee items=skills pause_on_hover=true duration=30.0 gap=0.5 />
                    <Marquee
                        items=reversed
                        reverse=true
                        pause_on_hover=true
                        duration=35.0
                        gap=0.5
                        class="mt-2"
                    />
                </div>
            </BlurFade>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let portfolio = use_portfolio();
    let linkedin = portfolio
        .social("LinkedIn")
        .map(|social| social.url.clone())
        .unwrap_or_else(|| format!("mailto:{}", portfolio.profile.contact.email));
    let socials = portfolio
        .navbar_socials()
        .map(|social| {
            view! {
                <a
                    href=social.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="group flex items-center gap-2 px-5 py-3 rounded-xl bg-white/[0.04] border border-white/[0.08] hover:border-white/20 transition-all duration-200"
                >
                    <i class=format!("{} text-muted group-hover:text-foreground", social.icon.class()) />
                    <span class="text-sm font-medium text-muted group-hover:text-foreground">
                        {social.name.clone()}
                    </span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Contact.id() class="w-full py-16">
            <BlurFade delay=BLUR_FADE_DELAY * 16.0>
                <SpotlightCard
                    class="rounded-2xl border border-white/[0.08] bg-zinc-950"
                    color="rgba(251, 191, 36, 0.05)"
                >
                    <div class="relative flex flex-col items-center text-center space-y-6 p-10 sm:p-14">
                        <span class="text-sm font-medium uppercase tracking-widest text-muted">
                            "Contact"
                        </span>
                        <h2 class="text-3xl font-bold tracking-tight sm:text-5xl">"Get in Touch"</h2>
                        <p class="mx-auto max-w-[500px] text-muted leading-relaxed text-balance">
                            "Want to chat? Connect with me on "
                            <a
                                href=linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-foreground font-medium underline underline-offset-4"
                            >
                                "LinkedIn"
                            </a>
                            " and I'll respond whenever I can."
                        </p>
                        <div class="flex items-center gap-3 pt-4">{socials}</div>
                    </div>
                </SpotlightCard>
            </BlurFade>
        </section>
    }
}
