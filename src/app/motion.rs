use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    use_element_visibility, use_mouse_in_element, use_raf_fn, UseMouseInElementReturn,
    UseRafFnCallbackArgs,
};

use crate::effects::{
    magnetic::{Magnetic, DEFAULT_STRENGTH},
    marquee::{Marquee as MarqueeLoop, MarqueeState},
    pullup,
    reveal::{stagger, Reveal, RevealConfig},
    spotlight::Spotlight,
    ticker::{Direction, NumberTicker as Ticker},
    tilt::{Tilt, DEFAULT_TILT_DEGREES},
    css_num, Point, Rect,
};

/// Fades, un-blurs and lifts its children the first time they scroll into view.
#[component]
pub fn BlurFade(
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let reveal = RwSignal::new(Reveal::new(RevealConfig::with_delay(delay)));

    Effect::new(move |_| {
        if visible.get() && !reveal.with_untracked(Reveal::is_revealed) {
            reveal.update(|r| {
                r.observe(true);
            });
        }
    });

    view! {
        <div node_ref=target class=class style=move || reveal.get().style()>
            {children()}
        </div>
    }
}

/// Letters rise into place one after another once the line is visible.
#[component]
pub fn LetterPullup(
    #[prop(into)] words: String,
    #[prop(default = 0.05)] step: f64,
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_seen.set(true);
        }
    });

    let letters = pullup::letters(&words, delay, step)
        .into_iter()
        .map(|pullup::PulledLetter { glyph, delay }| {
            let config = RevealConfig {
                delay,
                duration: 0.5,
                offset: 20.0,
                blur: 0.0,
            };
            let style = move || {
                let mut reveal = Reveal::new(config);
                reveal.observe(seen.get());
                reveal.style()
            };
            view! {
                <span class="inline-block" style=style>
                    {glyph}
                </span>
            }
        })
        .collect_view();

    view! {
        <div node_ref=target class=format!("flex flex-wrap {class}") aria-label=words.clone()>
            {letters}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
    #[prop(optional)] delay: f64,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h2 class="text-3xl font-bold tracking-tight sm:text-4xl overflow-hidden">
                <LetterPullup words=title step=0.03 delay />
            </h2>
            {subtitle
                .map(|subtitle| {
                    view! {
                        <BlurFade delay=delay + 0.3>
                            <p class="text-muted text-base max-w-[600px] leading-relaxed">
                                {subtitle}
                            </p>
                            <div class="h-px w-12 bg-gradient-to-r from-amber to-transparent mt-3" />
                        </BlurFade>
                    }
                })}
        </div>
    }
}

/// Leans in 3D toward the pointer while hovered.
#[component]
pub fn TiltCard(
    #[prop(default = DEFAULT_TILT_DEGREES)] amount: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(target);
    let tilt = RwSignal::new(Tilt::new(amount));

    Effect::new(move |_| {
        if is_outside.get() {
            tilt.update(Tilt::pointer_leave);
        } else {
            let bounds = Rect::sized(element_width.get(), element_height.get());
            let pointer = Point::new(element_x.get(), element_y.get());
            tilt.update(|t| t.pointer_move(bounds, pointer));
        }
    });

    view! {
        <div node_ref=target class=format!("will-change-transform {class}") style=move || tilt.get().style()>
            {children()}
        </div>
    }
}

/// Drifts toward the pointer on a spring and springs back when it leaves.
#[component]
pub fn MagneticButton(
    #[prop(default = DEFAULT_STRENGTH)] strength: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(target);
    let magnetic = RwSignal::new(Magnetic::new(strength));

    Effect::new(move |_| {
        if is_outside.get() {
            magnetic.update(Magnetic::pointer_leave);
        } else {
            let bounds = Rect::sized(element_width.get(), element_height.get());
            let pointer = Point::new(element_x.get(), element_y.get());
            magnetic.update(|m| m.pointer_move(bounds, pointer));
        }
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if !magnetic.with_untracked(Magnetic::is_settled) {
            magnetic.update(|m| {
                m.tick(args.delta / 1000.0);
            });
        }
    });

    view! {
        <div
            node_ref=target
            class=format!("relative inline-block transition-[scale] duration-300 {class}")
            style=move || magnetic.get().style()
        >
            {children()}
        </div>
    }
}

/// Counts up (or down) to `value` once, the first time it is seen.
#[component]
pub fn NumberTicker(
    value: u32,
    #[prop(optional)] direction: Direction,
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] prefix: String,
    #[prop(into, optional)] suffix: String,
) -> impl IntoView {
    let target = NodeRef::<html::Span>::new();
    let visible = use_element_visibility(target);
    let ticker = RwSignal::new(Ticker::new(f64::from(value), direction, delay));

    Effect::new(move |_| {
        if visible.get() {
            ticker.update(|t| t.observe(true));
        }
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if ticker.with_untracked(Ticker::is_animating) {
            ticker.update(|t| t.tick(args.delta / 1000.0));
        }
    });

    view! {
        <span node_ref=target class="inline-block tabular-nums tracking-tight">
            {prefix}
            {move || ticker.get().display()}
            {suffix}
        </span>
    }
}

/// Endless horizontal strip of badges.
#[component]
pub fn Marquee(
    items: Vec<String>,
    #[prop(optional)] reverse: bool,
    #[prop(optional)] pause_on_hover: bool,
    #[prop(default = 40.0)] duration: f64,
    #[prop(default = 1.0)] gap: f64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let mut strip = MarqueeLoop::new(duration, gap);
    strip.reverse = reverse;
    strip.pause_on_hover = pause_on_hover;
    let marquee = RwSignal::new(strip);
    let track = marquee.with_untracked(|m| m.track(&items));

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if marquee.with_untracked(|m| m.state() == MarqueeState::Running) {
            marquee.update(|m| m.advance(args.delta / 1000.0));
        }
    });

    view! {
        <div
            class=format!("flex overflow-hidden p-2 {class}")
            on:mouseenter=move |_: MouseEvent| marquee.update(|m| m.hover(true))
            on:mouseleave=move |_: MouseEvent| marquee.update(|m| m.hover(false))
        >
            <div
                class="flex shrink-0 w-max will-change-transform"
                style=move || marquee.get().style()
            >
                {track
                    .into_iter()
                    .map(|item| {
                        view! {
                            <span class="px-4 py-2 text-xs font-medium rounded-lg whitespace-nowrap bg-zinc-800/80 text-zinc-300 border border-white/[0.06] cursor-default">
                                {item}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Card with a soft light under the pointer.
#[component]
pub fn SpotlightCard(
    #[prop(into, optional)] class: String,
    #[prop(into, default = String::from("rgba(255, 255, 255, 0.05)"))] color: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        is_outside,
        ..
    } = use_mouse_in_element(target);
    let spotlight = RwSignal::new(Spotlight::default());

    Effect::new(move |_| {
        if is_outside.get() {
            spotlight.update(Spotlight::pointer_leave);
        } else {
            let pointer = Point::new(element_x.get(), element_y.get());
            spotlight.update(|s| s.pointer_move(pointer));
        }
    });

    view! {
        <div node_ref=target class=format!("relative overflow-hidden {class}")>
            <div
                class="pointer-events-none absolute -inset-px transition-opacity duration-500"
                style=move || spotlight.get().style(&color)
            />
            {children()}
        </div>
    }
}

/// Small rounded label.
#[component]
pub fn Badge(#[prop(into)] text: String, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-md px-2 py-0.5 text-xs font-medium border {class}",
        )>{text}</span>
    }
}

/// Skill tags that pop in one by one and then bob gently.
#[component]
pub fn FloatingTags(tags: Vec<String>, #[prop(default = 12)] max_tags: usize) -> impl IntoView {
    view! {
        <div class="relative w-full overflow-hidden">
            <div class="flex flex-wrap gap-2 justify-center items-center p-4">
                {tags
                    .into_iter()
                    .take(max_tags)
                    .enumerate()
                    .map(|(index, tag)| {
                        let delay = stagger(0.1, index);
                        view! {
                            <BlurFade delay>
                                <span
                                    class="inline-block animate-float"
                                    style=format!("animation-delay:{}s", css_num(delay + 0.5))
                                >
                                    <Badge
                                        text=tag
                                        class="px-3 py-1.5 bg-zinc-800/60 text-zinc-300 border-white/[0.08] hover:border-amber/30 backdrop-blur-sm cursor-default"
                                    />
                                </span>
                            </BlurFade>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
