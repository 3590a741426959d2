use std::time::Duration;

use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::config::SUBMIT_DELAY_MS;
use crate::contact::{
    delivery_notice, simulated_delivery, ContactForm, ContactState, Field, SubmitError,
};
use crate::notify::ToastKind;
use crate::portfolio::{SocialPlatform, PERSONAL_INFO};
use crate::reveal::Direction;

use super::reveal::{ScrollReveal, StaggerGroup, StaggerItem};
use super::toast::use_toasts;
use super::ui::{Button, ButtonSize, Card, CardContent, CardHeader, CardTitle, Input, Textarea};

const FAQS: [(&str, &str); 4] = [
    (
        "What's your typical response time?",
        "I usually respond to emails within 24-48 hours during business days. For urgent matters, feel free to give me a call.",
    ),
    (
        "Do you work on freelance projects?",
        "Yes! I'm always open to discussing interesting freelance opportunities that align with my skills and schedule.",
    ),
    (
        "What technologies do you specialize in?",
        "I specialize in React, TypeScript, Node.js, and modern web technologies. Check out my skills section for a complete list.",
    ),
    (
        "Are you available for full-time positions?",
        "I'm always interested in hearing about new opportunities. Feel free to reach out to discuss potential collaborations.",
    ),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="page-content container mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-20">
            <ScrollReveal class="text-center">
                <h1 class="text-5xl font-bold mb-4 gradient-text">"Get In Touch"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                    "Have a project in mind or just want to say hello? I'd love to hear from you. Let's create something amazing together!"
                </p>
            </ScrollReveal>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <ContactDetails />
                <ScrollReveal direction=Direction::Right>
                    <ContactFormCard />
                </ScrollReveal>
            </div>
            <LocationPanel />
            <Faq />
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let info = PERSONAL_INFO;
    let methods = [
        ("✉", "Email", Some(format!("mailto:{}", info.email)), info.email),
        ("☎", "Phone", Some(format!("tel:{}", info.phone)), info.phone),
        ("⌂", "Location", None, info.location),
    ];

    view! {
        <ScrollReveal direction=Direction::Left class="space-y-8">
            <div>
                <h2 class="text-3xl font-bold mb-4">"Let's Connect"</h2>
                <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                    "I'm always excited to work on new projects and collaborate with talented people. Whether you have a question about my work, want to discuss a potential project, or just want to say hi, feel free to reach out!"
                </p>
            </div>
            <StaggerGroup class="space-y-4">
                {methods
                    .into_iter()
                    .enumerate()
                    .map(|(index, (icon, label, href, text))| {
                        view! {
                            <StaggerItem index>
                                <Card hover=true>
                                    <CardContent class="p-6 flex items-center gap-4">
                                        <div class="w-12 h-12 rounded-lg gradient-bg flex items-center justify-center text-xl text-white">
                                            {icon}
                                        </div>
                                        <div>
                                            <h3 class="font-semibold">{label}</h3>
                                            {match href {
                                                Some(href) => {
                                                    view! {
                                                        <a
                                                            href=href
                                                            class="text-gray-600 dark:text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400"
                                                        >
                                                            {text}
                                                        </a>
                                                    }
                                                        .into_any()
                                                }
                                                None => {
                                                    view! {
                                                        <p class="text-gray-600 dark:text-gray-400">{text}</p>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </div>
                                    </CardContent>
                                </Card>
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerGroup>
            <div>
                <h3 class="text-xl font-semibold mb-4">"Follow Me"</h3>
                <div class="flex gap-4 text-2xl">
                    {info
                        .social_links
                        .iter()
                        .filter(|(platform, _)| *platform != SocialPlatform::Website)
                        .map(|(platform, url)| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="w-12 h-12 rounded-lg glass flex items-center justify-center hover:scale-110 transition-transform"
                                    aria-label=platform.label()
                                >
                                    <i class=platform.icon_class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </ScrollReveal>
    }
}

/// Reactive handles for one form field.
struct Binding {
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
}

fn bind(state: RwSignal<ContactState>, field: Field) -> Binding {
    Binding {
        value: Signal::derive(move || state.with(|s| s.form.get(field).to_string())),
        error: Signal::derive(move || state.with(|s| s.errors.get(field).map(|e| e.to_string()))),
        on_input: Callback::new(move |value: String| state.update(|s| s.edit(field, value))),
    }
}

/// Finish a send once its delay has passed.
///
/// The notice always goes out through `notify`, which outlives the page. Only the form reset
/// needs `state`, and it is skipped when the form was unmounted in the meantime.
fn settle_submission(
    state: RwSignal<ContactState>,
    snapshot: &ContactForm,
    notify: impl FnOnce(ToastKind, String),
) {
    let outcome = simulated_delivery(snapshot);
    if let Err(e) = &outcome {
        log::error!("contact message failed: {e}");
    }
    let (kind, message) = delivery_notice(&outcome);
    notify(kind, message);
    if state.try_update(|s| s.finish_submit(&outcome)).is_none() {
        log::debug!("contact form left before the message was sent");
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let toasts = use_toasts();
    let submitting = Signal::derive(move || state.with(ContactState::is_submitting));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match state.try_update(ContactState::begin_submit) {
            Some(Ok(snapshot)) => {
                log::info!("sending contact message");
                set_timeout(
                    move || {
                        settle_submission(state, &snapshot, |kind, message| toasts.show(kind, message))
                    },
                    Duration::from_millis(SUBMIT_DELAY_MS),
                );
            }
            Some(Err(SubmitError::InFlight)) => log::debug!("ignoring submit while sending"),
            Some(Err(e)) => log::debug!("contact form rejected: {e}"),
            None => {}
        }
    };

    let name = bind(state, Field::Name);
    let email = bind(state, Field::Email);
    let subject = bind(state, Field::Subject);
    let message = bind(state, Field::Message);

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Send a Message"</CardTitle>
                <p class="text-gray-600 dark:text-gray-400">
                    "Fill out the form below and I'll get back to you as soon as possible."
                </p>
            </CardHeader>
            <CardContent>
                <form class="space-y-6" novalidate=true on:submit=on_submit>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <Input
                            id="name"
                            label="Name"
                            placeholder="Your Name"
                            value=name.value
                            on_input=name.on_input
                            error=name.error
                            disabled=submitting
                        />
                        <Input
                            id="email"
                            label="Email"
                            kind="email"
                            placeholder="Your Email"
                            value=email.value
                            on_input=email.on_input
                            error=email.error
                            disabled=submitting
                        />
                    </div>
                    <Input
                        id="subject"
                        label="Subject"
                        placeholder="Subject"
                        value=subject.value
                        on_input=subject.on_input
                        error=subject.error
                        disabled=submitting
                    />
                    <Textarea
                        id="message"
                        label="Message"
                        placeholder="Your message..."
                        rows=6
                        value=message.value
                        on_input=message.on_input
                        error=message.error
                        disabled=submitting
                    />
                    <Button submit=true size=ButtonSize::Lg class="w-full" loading=submitting>
                        {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}

#[component]
fn LocationPanel() -> impl IntoView {
    view! {
        <ScrollReveal>
            <h2 class="text-3xl font-bold text-center mb-8">"Where I'm Located"</h2>
            <Card>
                <div class="h-64 rounded-xl gradient-bg opacity-80 flex flex-col items-center justify-center text-white">
                    <span class="text-4xl mb-2">"⌂"</span>
                    <p class="text-xl font-semibold">{PERSONAL_INFO.location}</p>
                    <p class="text-sm text-white/80">"Map coming soon"</p>
                </div>
            </Card>
        </ScrollReveal>
    }
}

#[component]
fn Faq() -> impl IntoView {
    view! {
        <ScrollReveal>
            <h2 class="text-3xl font-bold text-center mb-8">"Frequently Asked Questions"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {FAQS
                    .into_iter()
                    .map(|(question, answer)| {
                        view! {
                            <Card>
                                <CardContent class="p-6">
                                    <h3 class="font-semibold mb-2">{question}</h3>
                                    <p class="text-gray-600 dark:text-gray-400">{answer}</p>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </ScrollReveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SUCCESS_MESSAGE;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.edit(Field::Name, "Jo".to_string());
        state.edit(Field::Email, "jo@example.com".to_string());
        state.edit(Field::Subject, "Hello".to_string());
        state.edit(Field::Message, "Nice to meet you!".to_string());
        state
    }

    #[test]
    fn test_settle_clears_mounted_form() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(filled());
            let snapshot = state
                .try_update(ContactState::begin_submit)
                .and_then(Result::ok)
                .expect("filled form should submit");

            let mut shown = Vec::new();
            settle_submission(state, &snapshot, |kind, message| shown.push((kind, message)));

            assert_eq!(shown, vec![(ToastKind::Success, SUCCESS_MESSAGE.to_string())]);
            state.with_untracked(|s| {
                assert!(!s.is_submitting());
                assert_eq!(s.form, ContactForm::default());
            });
        });
    }

    #[test]
    fn test_settle_after_leaving_page_still_notifies() {
        let root = Owner::new();
        let page = root.child();
        let state = page.with(|| RwSignal::new(filled()));
        let snapshot = state
            .try_update(ContactState::begin_submit)
            .and_then(Result::ok)
            .expect("filled form should submit");

        page.cleanup();
        assert!(state.try_get_untracked().is_none());

        let mut shown = Vec::new();
        root.with(|| {
            settle_submission(state, &snapshot, |kind, message| shown.push((kind, message)))
        });
        assert_eq!(shown, vec![(ToastKind::Success, SUCCESS_MESSAGE.to_string())]);
    }
}
