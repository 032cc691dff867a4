use std::collections::BTreeMap;
use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::subscribe::SUCCESS_COLOR;
use crate::components::toast::use_toast;
use crate::config::use_landing_config;
use crate::error::FieldError;
use crate::timer::ResetTimer;
use crate::validation::{validate_email, validate_required};

pub const INVALID_NOTICE: &str = "Please fill in all fields correctly.";
pub const SENT_NOTICE: &str = "Message sent! We'll be in touch soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "contactName",
            ContactField::Email => "contactEmail",
            ContactField::Subject => "contactSubject",
            ContactField::Message => "contactMessage",
        }
    }

    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            ContactField::Email => validate_email(value),
            _ => validate_required(value),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Checks every field independently; all failures are reported together.
    pub fn validate(&self) -> BTreeMap<ContactField, FieldError> {
        ContactField::ALL
            .into_iter()
            .filter_map(|field| field.validate(self.value(field)).err().map(|e| (field, e)))
            .collect()
    }
}

/// Result of pressing submit: either the set of invalid fields or a send.
/// Each outcome carries exactly one notice.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Invalid(BTreeMap<ContactField, FieldError>),
    Sent,
}

impl SubmitOutcome {
    pub fn evaluate(draft: &ContactDraft) -> Self {
        let errors = draft.validate();
        if errors.is_empty() {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Invalid(errors)
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Invalid(_) => INVALID_NOTICE,
            SubmitOutcome::Sent => SENT_NOTICE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub draft: ContactDraft,
    pub errors: BTreeMap<ContactField, FieldError>,
    pub sent: bool,
    pub generation: u32,
}

impl ContactState {
    pub fn has_error(&self, field: ContactField) -> bool {
        self.errors.contains_key(&field)
    }
}

pub enum ContactAction {
    Edit(ContactField, String),
    Rejected(BTreeMap<ContactField, FieldError>),
    Sent { generation: u32 },
    Revert(u32),
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => {
                *next.draft.value_mut(field) = value;
                next.errors.remove(&field);
            }
            ContactAction::Rejected(errors) => next.errors = errors,
            ContactAction::Sent { generation } => {
                next.draft = ContactDraft::default();
                next.errors.clear();
                next.sent = true;
                next.generation = generation;
            }
            ContactAction::Revert(generation) if generation == self.generation => next.sent = false,
            ContactAction::Revert(_) => return self,
        }
        Rc::new(next)
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_landing_config();
    let toast = use_toast();
    let state = use_reducer(ContactState::default);
    let revert_timer = use_mut_ref(ResetTimer::default);

    let onsubmit = {
        let state = state.clone();
        let revert_timer = revert_timer.clone();
        let reset_ms = config.contact_reset_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = SubmitOutcome::evaluate(&state.draft);
            toast.emit(outcome.notice().to_string());
            match outcome {
                SubmitOutcome::Invalid(errors) => state.dispatch(ContactAction::Rejected(errors)),
                SubmitOutcome::Sent => {
                    let revert = state.dispatcher();
                    let generation = revert_timer
                        .borrow_mut()
                        .arm(reset_ms, move |generation| revert.dispatch(ContactAction::Revert(generation)));
                    state.dispatch(ContactAction::Sent { generation });
                }
            }
        })
    };

    use_effect_with_deps(
        move |_| {
            move || {
                revert_timer.borrow_mut().cancel();
            }
        },
        (),
    );

    let edit_input = |field: ContactField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let edit_message = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(ContactField::Message, textarea.value()));
        })
    };

    let field_class = |field: ContactField| classes!("contact-input", state.has_error(field).then(|| "error"));
    let submit_style = state.sent.then(|| format!("background: {}", SUCCESS_COLOR));

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for={ContactField::Name.id()}>{"Name"}</label>
                    <input
                        id={ContactField::Name.id()}
                        type="text"
                        class={field_class(ContactField::Name)}
                        placeholder="Your name"
                        value={state.draft.name.clone()}
                        oninput={edit_input(ContactField::Name)}
                    />
                </div>
                <div class="form-group">
                    <label for={ContactField::Email.id()}>{"Email"}</label>
                    <input
                        id={ContactField::Email.id()}
                        type="email"
                        class={field_class(ContactField::Email)}
                        placeholder="you@company.com"
                        value={state.draft.email.clone()}
                        oninput={edit_input(ContactField::Email)}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for={ContactField::Subject.id()}>{"Subject"}</label>
                <input
                    id={ContactField::Subject.id()}
                    type="text"
                    class={field_class(ContactField::Subject)}
                    placeholder="How can we help?"
                    value={state.draft.subject.clone()}
                    oninput={edit_input(ContactField::Subject)}
                />
            </div>
            <div class="form-group">
                <label for={ContactField::Message.id()}>{"Message"}</label>
                <textarea
                    id={ContactField::Message.id()}
                    class={field_class(ContactField::Message)}
                    rows="5"
                    placeholder="Tell us about your project"
                    value={state.draft.message.clone()}
                    oninput={edit_message}
                />
            </div>
            <button
                type="submit"
                id="contactSubmit"
                class="btn btn-primary btn-full"
                style={submit_style}
                disabled={state.sent}
            >
                if state.sent {
                    <>
                    <svg class="btn-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                        <polyline points="22 4 12 14.01 9 11.01" />
                    </svg>
                    {"Message Sent!"}
                    </>
                } else {
                    {"Send Message"}
                }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk.".to_string(),
        }
    }

    fn submit(state: Rc<ContactState>, generation: u32) -> (Rc<ContactState>, Vec<&'static str>) {
        let outcome = SubmitOutcome::evaluate(&state.draft);
        let notices = vec![outcome.notice()];
        let state = match outcome {
            SubmitOutcome::Invalid(errors) => state.reduce(ContactAction::Rejected(errors)),
            SubmitOutcome::Sent => state.reduce(ContactAction::Sent { generation }),
        };
        (state, notices)
    }

    #[test]
    fn all_empty_marks_every_field_with_one_notice() {
        let (state, notices) = submit(Rc::new(ContactState::default()), 1);

        for field in ContactField::ALL {
            assert!(state.has_error(field), "{:?} should be invalid", field);
        }
        assert_eq!(notices, vec![INVALID_NOTICE]);
        assert!(!state.sent);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let draft = ContactDraft {
            email: "ada@example".to_string(),
            ..filled()
        };
        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&ContactField::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn valid_submit_resets_and_disables_until_revert() {
        let state = Rc::new(ContactState {
            draft: filled(),
            ..ContactState::default()
        });
        let (state, notices) = submit(state, 7);

        assert_eq!(notices, vec![SENT_NOTICE]);
        assert_eq!(state.draft, ContactDraft::default());
        assert!(state.sent);

        let state = state.reduce(ContactAction::Revert(7));
        assert!(!state.sent);
    }

    #[test]
    fn stale_revert_keeps_the_newer_send_disabled() {
        let state = Rc::new(ContactState::default())
            .reduce(ContactAction::Sent { generation: 1 })
            .reduce(ContactAction::Sent { generation: 2 })
            .reduce(ContactAction::Revert(1));
        assert!(state.sent);
    }

    #[test]
    fn editing_clears_only_that_field() {
        let (state, _) = submit(Rc::new(ContactState::default()), 1);
        let state = state.reduce(ContactAction::Edit(ContactField::Subject, "Hi".to_string()));

        assert!(!state.has_error(ContactField::Subject));
        assert!(state.has_error(ContactField::Name));
        assert_eq!(state.draft.subject, "Hi");
    }
}
