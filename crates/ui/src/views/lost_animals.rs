use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use hub_core::model::{Animal, AnimalReport, Species, StatusFilter, filter_by_status};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AnimalCardVm, map_animal_cards, view_error_from_board};

const SUBMIT_NOTICE: &str = "Alert posted.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Saving,
}

#[component]
pub fn LostAnimalsView() -> Element {
    let ctx = use_context::<AppContext>();
    let pet_board = ctx.pet_board();

    // The fetched board lives in its own signal so a filed report can be
    // prepended without refetching.
    let animals = use_signal(Vec::<Animal>::new);
    let mut filter = use_signal(StatusFilter::default);
    let mut show_form = use_signal(|| false);

    let mut form_name = use_signal(String::new);
    let mut form_species = use_signal(|| Species::Dog);
    let mut form_location = use_signal(String::new);
    let mut form_contact = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let submit_state = use_signal(|| SubmitState::Idle);
    let submit_error = use_signal(|| None::<String>);
    let submit_notice = use_signal(|| None::<&'static str>);

    let pet_board_for_resource = pet_board.clone();
    let resource = use_resource(move || {
        let pet_board = pet_board_for_resource.clone();
        let mut animals = animals;
        async move {
            let fetched = pet_board
                .list_animals()
                .await
                .map_err(|err| view_error_from_board(&err))?;
            animals.set(fetched);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let pet_board_for_submit = pet_board.clone();
    let submit_report = use_callback(move |()| {
        let pet_board = pet_board_for_submit.clone();
        let mut animals = animals;
        let mut submit_state = submit_state;
        let mut submit_error = submit_error;
        let mut submit_notice = submit_notice;
        let mut show_form = show_form;
        let mut form_name = form_name;
        let mut form_location = form_location;
        let mut form_contact = form_contact;
        let mut form_description = form_description;

        if submit_state() == SubmitState::Saving {
            return;
        }
        let report = AnimalReport {
            name: form_name.read().clone(),
            species: form_species(),
            location: form_location.read().clone(),
            description: form_description.read().clone(),
            contact: form_contact.read().clone(),
        };

        spawn(async move {
            submit_state.set(SubmitState::Saving);
            submit_error.set(None);

            match pet_board.report_lost(report).await {
                Ok(stored) => {
                    animals.with_mut(|list| list.insert(0, stored));
                    submit_state.set(SubmitState::Idle);
                    show_form.set(false);
                    form_name.set(String::new());
                    form_location.set(String::new());
                    form_contact.set(String::new());
                    form_description.set(String::new());
                    submit_notice.set(Some(SUBMIT_NOTICE));
                    let mut submit_notice = submit_notice;
                    spawn(async move {
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        if submit_notice() == Some(SUBMIT_NOTICE) {
                            submit_notice.set(None);
                        }
                    });
                }
                Err(err) => {
                    // The typed fields stay put so nothing is lost.
                    submit_state.set(SubmitState::Idle);
                    submit_error.set(Some(format!("Error reporting pet: {err}")));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<BoardTestHandles>() {
                handles.register(
                    submit_report,
                    BoardForm {
                        show: show_form,
                        name: form_name,
                        species: form_species,
                        location: form_location,
                        contact: form_contact,
                        description: form_description,
                    },
                );
            }
        }
    }

    let saving = submit_state() == SubmitState::Saving;
    let visible = map_animal_cards(&filter_by_status(&animals.read(), filter()));

    rsx! {
        div { class: "page board-page",
            Link { to: Route::Home {}, class: "back-link back-link--purple", "← Back to Hub" }

            div { class: "board-header",
                h1 { class: "board-title", "🐾 Lost & Found" }
                button {
                    class: "btn btn-primary btn-pill",
                    r#type: "button",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "Report Lost Pet" }
                }
            }

            if let Some(notice) = submit_notice() {
                p { class: "board-notice", "{notice}" }
            }

            if show_form() {
                div { class: "board-form",
                    h2 { "Report a Lost Pet" }
                    div { class: "board-form-row",
                        input {
                            class: "board-input",
                            r#type: "text",
                            placeholder: "Pet Name",
                            value: "{form_name}",
                            oninput: move |evt| form_name.set(evt.value()),
                        }
                        select {
                            class: "board-select",
                            value: "{form_species().tag()}",
                            onchange: move |evt| form_species.set(Species::from_tag(&evt.value())),
                            option { value: "dog", "Dog" }
                            option { value: "cat", "Cat" }
                            option { value: "other", "Other" }
                        }
                    }
                    input {
                        class: "board-input",
                        r#type: "text",
                        placeholder: "Last Seen Location",
                        value: "{form_location}",
                        oninput: move |evt| form_location.set(evt.value()),
                    }
                    input {
                        class: "board-input",
                        r#type: "text",
                        placeholder: "Contact Info (Phone/Email)",
                        value: "{form_contact}",
                        oninput: move |evt| form_contact.set(evt.value()),
                    }
                    textarea {
                        class: "board-input board-input--multi",
                        placeholder: "Description (Features, collar, etc.)",
                        value: "{form_description}",
                        oninput: move |evt| form_description.set(evt.value()),
                    }
                    if let Some(message) = submit_error() {
                        p { class: "board-form-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary board-submit",
                        r#type: "button",
                        disabled: saving,
                        onclick: move |_| submit_report.call(()),
                        if saving { "Submitting..." } else { "Submit Alert" }
                    }
                }
            }

            div { class: "board-filters",
                button {
                    class: if filter() == StatusFilter::All { "filter-pill filter-pill--active" } else { "filter-pill" },
                    r#type: "button",
                    onclick: move |_| filter.set(StatusFilter::All),
                    "All"
                }
                button {
                    class: if filter() == StatusFilter::Lost { "filter-pill filter-pill--lost" } else { "filter-pill" },
                    r#type: "button",
                    onclick: move |_| filter.set(StatusFilter::Lost),
                    "Lost 🛑"
                }
                button {
                    class: if filter() == StatusFilter::Found { "filter-pill filter-pill--found" } else { "filter-pill" },
                    r#type: "button",
                    onclick: move |_| filter.set(StatusFilter::Found),
                    "Found ✅"
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { class: "board-status", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "board-status", "Loading pets from database..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "board-status board-status--error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if visible.is_empty() {
                        p { class: "board-status", "No animals found." }
                    } else {
                        div { class: "board-grid",
                            for card in visible {
                                AnimalCard { card }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn AnimalCard(card: AnimalCardVm) -> Element {
    rsx! {
        div { class: "board-card",
            div { class: "board-card-photo",
                img { src: "{card.image_url}", alt: "{card.name}" }
                span { class: "{card.status_class}", "{card.status_label}" }
            }
            div { class: "board-card-body",
                div { class: "board-card-head",
                    h3 { class: "board-card-name", "{card.name}" }
                    span { class: "board-card-date", "{card.date_str}" }
                }
                p { class: "board-card-location", "📍 {card.location}" }
                p { class: "board-card-description", "{card.description}" }
                div { class: "board-card-contact",
                    span { "Contact:" }
                    span { class: "board-card-contact-value", "{card.contact}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct BoardForm {
    pub(crate) show: Signal<bool>,
    pub(crate) name: Signal<String>,
    pub(crate) species: Signal<Species>,
    pub(crate) location: Signal<String>,
    pub(crate) contact: Signal<String>,
    pub(crate) description: Signal<String>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct BoardTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    form: Rc<RefCell<Option<BoardForm>>>,
}

#[cfg(test)]
impl BoardTestHandles {
    pub(crate) fn register(&self, submit: Callback<()>, form: BoardForm) {
        *self.submit.borrow_mut() = Some(submit);
        *self.form.borrow_mut() = Some(form);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("board submit registered")
    }

    pub(crate) fn form(&self) -> BoardForm {
        (*self.form.borrow()).expect("board form registered")
    }
}
