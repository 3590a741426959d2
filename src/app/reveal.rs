use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::config::{REVEAL_ROOT_MARGIN, STAGGER_ROOT_MARGIN};
use crate::portfolio::Skill;
use crate::reveal::{reveal_style, skill_bar_style, Direction, Reveal, Timing};

/// Watch `target` until it first scrolls into view.
///
/// The returned signal flips to true once and stays there; the observer disconnects itself
/// at that point and is torn down with the owning component otherwise.
fn use_reveal(target: NodeRef<html::Div>, root_margin: &str) -> Signal<bool> {
    let (latch, set_latch) = signal(Reveal::default());

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            if set_latch
                .try_update(|latch| latch.observe(intersecting))
                .unwrap_or(false)
            {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().root_margin(root_margin.to_string()),
    );

    Signal::derive(move || latch.get().is_revealed())
}

#[component]
pub fn ScrollReveal(
    #[prop(optional)] direction: Direction,
    /// Seconds to wait before the transition starts.
    #[prop(optional)]
    delay: f64,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, REVEAL_ROOT_MARGIN);
    let timing = Timing {
        delay,
        ..Timing::default()
    };

    view! {
        <div
            node_ref=target
            class=class
            style=move || reveal_style(revealed.get(), direction, timing)
        >
            {children()}
        </div>
    }
}

/// Reveal state shared by the items of one [`StaggerGroup`].
#[derive(Debug, Clone, Copy)]
struct GroupReveal(Signal<bool>);

/// Container of a list that reveals in sequence.
///
/// A single observer watches the container; once it is seen, every [`StaggerItem`] inside
/// starts its transition after its own index-based delay.
#[component]
pub fn StaggerGroup(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    provide_context(GroupReveal(use_reveal(target, STAGGER_ROOT_MARGIN)));

    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

/// One item of a list that reveals in sequence.
///
/// Follows the enclosing [`StaggerGroup`]; outside a group it watches itself.
#[component]
pub fn StaggerItem(
    index: usize,
    #[prop(optional)] direction: Direction,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = match use_context::<GroupReveal>() {
        Some(GroupReveal(group)) => group,
        None => use_reveal(target, STAGGER_ROOT_MARGIN),
    };
    let timing = Timing::staggered(index);

    view! {
        <div
            node_ref=target
            class=class
            style=move || reveal_style(revealed.get(), direction, timing)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, REVEAL_ROOT_MARGIN);

    view! {
        <div node_ref=target class="space-y-1.5">
            <div class="flex justify-between text-sm">
                <span class="font-medium text-gray-800 dark:text-gray-200">{skill.name}</span>
                <span class="text-gray-500 dark:text-gray-400">{format!("{}%", skill.level)}</span>
            </div>
            <div
                class="h-2 w-full overflow-hidden rounded-full bg-gray-200 dark:bg-gray-700"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.level.to_string()
            >
                <div
                    class="h-full rounded-full gradient-bg"
                    style=move || skill_bar_style(revealed.get(), skill.level)
                ></div>
            </div>
        </div>
    }
}
