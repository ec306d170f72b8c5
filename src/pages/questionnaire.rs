//! Intake questionnaire page.
//!
//! Renders the seven fixed general questions, the dependent system-type
//! sub-question, and the dynamic template question set. All transition
//! rules live in [`QuestionnaireState`]; this component only wires signals
//! to inputs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::constants::examples::EXAMPLE_KEYS;
use crate::constants::questions::{
    GENERAL_QUESTIONS, GeneralInput, ProjectType, SUB_QUESTION_LABEL, SubSystemType,
    sub_question_options,
};
use crate::constants::templates::sample_templates;
use crate::net::types::{ResponseType, Template};
use crate::state::questionnaire::{QuestionnaireState, SubmitPhase};
use crate::state::rate_limit::RateLimitState;
use crate::state::session::Session;
use crate::state::templates::QuestionDraft;

#[component]
pub fn QuestionnairePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let rate_limit = expect_context::<RwSignal<RateLimitState>>();
    let navigate = use_navigate();

    let state = RwSignal::new(QuestionnaireState::default());
    // Server templates when available, built-ins otherwise.
    let catalog = RwSignal::new(sample_templates());
    provide_context(catalog);
    let error = RwSignal::new(Option::<String>::None);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !session.get().is_authenticated() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(templates) = crate::services::templates::list().await
                && !templates.is_empty()
            {
                catalog.set(templates);
            }
        });
    });

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            let mut attempted = None;
            state.update(|s| attempted = s.try_submit());
            let Some(payload) = attempted else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                state.update(|s| s.phase = SubmitPhase::Submitting);
                leptos::task::spawn_local(async move {
                    match crate::services::questionnaire::process(&payload).await {
                        Ok(_) => {
                            state.update(|s| s.phase = SubmitPhase::Succeeded);
                            gloo_timers::future::TimeoutFuture::new(2000).await;
                            navigate("/", NavigateOptions::default());
                        }
                        Err(e) => {
                            let message = super::route_error(&e, session, rate_limit);
                            state.update(|s| {
                                s.phase = SubmitPhase::Failed(
                                    message.unwrap_or_else(|| e.to_string()),
                                );
                            });
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (payload, &navigate);
            }
        }
    };

    let load_example = move |key: &'static str| {
        state.update(|s| {
            s.load_example(key, &catalog.get_untracked());
        });
    };

    let missing = move || {
        let s = state.get();
        if s.submit_attempted() { s.missing_required() } else { Vec::new() }
    };

    view! {
        <div class="questionnaire-page">
            <h1 class="questionnaire-page__title">"Use Case Questionnaire"</h1>
            <ErrorBanner error=error/>

            <div class="questionnaire-page__examples">
                <span>"Load an example:"</span>
                {EXAMPLE_KEYS
                    .iter()
                    .map(|key| {
                        view! {
                            <button class="btn btn--ghost" on:click=move |_| load_example(key)>
                                {*key}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="questionnaire-page__general">
                {GENERAL_QUESTIONS
                    .iter()
                    .map(|question| view! { <GeneralQuestionField state=state question/> })
                    .collect::<Vec<_>>()}
            </section>

            <SubQuestion state=state/>
            <DynamicQuestions state=state/>

            <Show when=move || !missing().is_empty()>
                <div class="questionnaire-page__missing" role="alert">
                    <p>"Please answer the following required questions:"</p>
                    <ul>
                        {move || {
                            missing()
                                .into_iter()
                                .map(|label| view! { <li>{label}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>

            <footer class="questionnaire-page__footer">
                {move || match state.get().phase {
                    SubmitPhase::Succeeded => view! {
                        <p class="questionnaire-page__success">
                            "Questionnaire submitted. Redirecting to the dashboard..."
                        </p>
                    }
                    .into_any(),
                    SubmitPhase::Failed(message) => view! {
                        <p class="questionnaire-page__failure">{message}</p>
                    }
                    .into_any(),
                    _ => ().into_any(),
                }}
                <button
                    class="btn btn--primary"
                    disabled=move || state.get().phase == SubmitPhase::Submitting
                    on:click=submit.clone()
                >
                    {move || {
                        if state.get().phase == SubmitPhase::Submitting {
                            "Submitting..."
                        } else {
                            "Submit"
                        }
                    }}
                </button>
            </footer>
        </div>
    }
}

#[component]
fn GeneralQuestionField(
    state: RwSignal<QuestionnaireState>,
    question: &'static crate::constants::questions::GeneralQuestion,
) -> impl IntoView {
    let id = question.id;
    let flagged = move || {
        let s = state.get();
        s.flag_missing(!s.general_answer(id).trim().is_empty(), question.required)
    };
    let field_class = move || {
        if flagged() { "question question--missing" } else { "question" }
    };

    view! {
        <div class=field_class>
            <label class="question__label">{question.label}</label>
            {match question.input {
                GeneralInput::Text => view! {
                    <input
                        class="question__input"
                        placeholder=question.placeholder
                        prop:value=move || state.get().general_answer(id).to_owned()
                        on:input=move |ev| {
                            state.update(|s| s.set_general(id, &event_target_value(&ev)));
                        }
                    />
                }
                .into_any(),
                GeneralInput::Textarea => view! {
                    <textarea
                        class="question__input question__input--area"
                        placeholder=question.placeholder
                        prop:value=move || state.get().general_answer(id).to_owned()
                        on:input=move |ev| {
                            state.update(|s| s.set_general(id, &event_target_value(&ev)));
                        }
                    ></textarea>
                }
                .into_any(),
                GeneralInput::Radio => view! {
                    <div class="question__options">
                        {question
                            .options
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <label class="question__option">
                                        <input
                                            type="radio"
                                            name=id
                                            prop:checked=move || {
                                                state.get().general_answer(id) == *value
                                            }
                                            on:change=move |_| {
                                                state.update(|s| s.set_general(id, value));
                                            }
                                        />
                                        {*label}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// The dependent system-type question, visible once a project type is set.
#[component]
fn SubQuestion(state: RwSignal<QuestionnaireState>) -> impl IntoView {
    let catalog = current_catalog;
    let project_type = move || state.get().project_type();

    view! {
        <Show when=move || project_type().is_some()>
            <div class=move || {
                let s = state.get();
                if s.flag_missing(s.sub_selection().is_some(), true) {
                    "question question--missing"
                } else {
                    "question"
                }
            }>
                <label class="question__label">{SUB_QUESTION_LABEL}</label>
                <div class="question__options">
                    {move || {
                        let Some(pt) = project_type() else {
                            return Vec::new();
                        };
                        sub_options_view(state, pt, catalog())
                    }}
                </div>
            </div>
        </Show>
    }
}

/// The template catalog provided by the page, defaulting to the built-ins.
fn current_catalog() -> Vec<Template> {
    use_context::<RwSignal<Vec<Template>>>()
        .map_or_else(sample_templates, |catalog| catalog.get_untracked())
}

fn sub_options_view(
    state: RwSignal<QuestionnaireState>,
    project_type: ProjectType,
    catalog: Vec<Template>,
) -> Vec<impl IntoView + use<>> {
    sub_question_options(project_type)
        .iter()
        .map(|(value, label)| {
            let catalog = catalog.clone();
            let selected = SubSystemType::from_key(value);
            view! {
                <label class="question__option">
                    <input
                        type="radio"
                        name="subSystemType"
                        prop:checked=move || state.get().sub_selection() == selected
                        on:change=move |_| {
                            if let Some(sub) = selected {
                                state.update(|s| s.select_sub_system(sub, &catalog));
                            }
                        }
                    />
                    {*label}
                </label>
            }
        })
        .collect()
}

/// The installed template's question set. Admins can edit the set in
/// place: changes stay local to this questionnaire run and never write
/// back to the template catalog.
#[component]
fn DynamicQuestions(state: RwSignal<QuestionnaireState>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let editor = RwSignal::new(QuestionDraft::default());
    let editor_open = RwSignal::new(false);

    let is_admin = move || session.get().is_admin();

    let open_add = move |_| {
        editor.set(QuestionDraft {
            id: uuid::Uuid::new_v4().to_string(),
            required: true,
            ..Default::default()
        });
        editor_open.set(true);
    };

    let save_question = move |()| {
        let draft = editor.get_untracked();
        if !draft.is_complete() {
            return;
        }
        state.update(|s| {
            s.upsert_question(draft.to_question());
        });
        editor_open.set(false);
    };

    view! {
        <Show when=move || state.get().template().is_some()>
            <section class="questionnaire-page__dynamic">
                <h2 class="questionnaire-page__section-title">
                    {move || {
                        state
                            .get()
                            .template()
                            .map(|t| t.name.clone())
                            .unwrap_or_default()
                    }}
                </h2>
                {move || {
                    let admin = is_admin();
                    let template = state.get().template().cloned();
                    template
                        .map(|t| {
                            t.questions
                                .iter()
                                .map(|q| {
                                    let edit = admin.then(|| {
                                        let question = q.clone();
                                        view! {
                                            <button
                                                class="btn btn--ghost question__edit"
                                                on:click=move |_| {
                                                    editor.set(QuestionDraft::from_question(
                                                        &question,
                                                    ));
                                                    editor_open.set(true);
                                                }
                                            >
                                                "Edit"
                                            </button>
                                        }
                                    });
                                    view! {
                                        <div class="questionnaire-page__question-row">
                                            {dynamic_field(state, q.clone())}
                                            {edit}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default()
                }}
                <Show when=is_admin>
                    <button class="btn" on:click=open_add>"Add Question"</button>
                </Show>
            </section>
            <Show when=move || editor_open.get()>
                <QuestionEditDialog
                    draft=editor
                    on_save=Callback::new(save_question)
                    on_close=Callback::new(move |()| editor_open.set(false))
                />
            </Show>
        </Show>
    }
}

/// Admin dialog for one dynamic question.
#[component]
fn QuestionEditDialog(
    draft: RwSignal<QuestionDraft>,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Edit Question"</h2>
                <label class="dialog__field">
                    "Question"
                    <textarea
                        prop:value=move || draft.get().question
                        on:input=move |ev| {
                            draft.update(|d| d.question = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__field">
                    "Response type"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.response_type = response_type_from_label(&value));
                    }>
                        {move || {
                            let current = draft.get().response_type;
                            ResponseType::ALL
                                .iter()
                                .map(|t| {
                                    view! {
                                        <option value=t.label() selected=*t == current>
                                            {t.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__field dialog__field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().required
                        on:change=move |_| draft.update(|d| d.required = !d.required)
                    />
                    "Required"
                </label>
                <Show when=move || draft.get().response_type.has_options()>
                    <div class="dialog__options">
                        {move || {
                            draft
                                .get()
                                .options
                                .iter()
                                .enumerate()
                                .map(|(index, option)| {
                                    view! {
                                        <div class="dialog__option">
                                            <input
                                                placeholder=format!("Option {}", index + 1)
                                                prop:value=option.clone()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| {
                                                        if index < d.options.len() {
                                                            d.options[index] = value.clone();
                                                        }
                                                    });
                                                }
                                            />
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| {
                                                    draft.update(|d| {
                                                        if index < d.options.len() {
                                                            d.options.remove(index);
                                                        }
                                                    });
                                                }
                                            >
                                                "\u{d7}"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| draft.update(|d| d.options.push(String::new()))
                        >
                            "Add Option"
                        </button>
                    </div>
                </Show>
                <footer class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !draft.get().is_complete()
                        on:click=move |_| on_save.run(())
                    >
                        "Save"
                    </button>
                </footer>
            </div>
        </div>
    }
}

fn response_type_from_label(value: &str) -> ResponseType {
    ResponseType::ALL
        .into_iter()
        .find(|t| t.label() == value)
        .unwrap_or(ResponseType::Text)
}

fn dynamic_field(
    state: RwSignal<QuestionnaireState>,
    question: crate::net::types::TemplateQuestion,
) -> impl IntoView + use<> {
    let id = question.id.clone();
    let flagged = {
        let id = id.clone();
        move || {
            let s = state.get();
            s.flag_missing(!s.dynamic_answer(&id).trim().is_empty(), question.required)
        }
    };

    let input = match question.response_type {
        ResponseType::Mcq | ResponseType::Boolean => {
            let options = if question.response_type == ResponseType::Boolean {
                vec!["Yes".to_owned(), "No".to_owned()]
            } else {
                question.options.clone()
            };
            let id = id.clone();
            view! {
                <div class="question__options">
                    {options
                        .into_iter()
                        .map(|option| {
                            let id = id.clone();
                            let check_id = id.clone();
                            let value = option.clone();
                            let checked_value = option.clone();
                            view! {
                                <label class="question__option">
                                    <input
                                        type="radio"
                                        name=format!("dynamic-{id}")
                                        prop:checked=move || {
                                            state.get().dynamic_answer(&check_id) == checked_value
                                        }
                                        on:change=move |_| {
                                            state.update(|s| s.set_dynamic(&id, &value));
                                        }
                                    />
                                    {option}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
        ResponseType::Numeric => {
            let id = id.clone();
            let read_id = id.clone();
            view! {
                <input
                    class="question__input"
                    type="number"
                    prop:value=move || state.get().dynamic_answer(&read_id).to_owned()
                    on:input=move |ev| {
                        state.update(|s| s.set_dynamic(&id, &event_target_value(&ev)));
                    }
                />
            }
            .into_any()
        }
        _ => {
            let id = id.clone();
            let read_id = id.clone();
            view! {
                <textarea
                    class="question__input question__input--area"
                    prop:value=move || state.get().dynamic_answer(&read_id).to_owned()
                    on:input=move |ev| {
                        state.update(|s| s.set_dynamic(&id, &event_target_value(&ev)));
                    }
                ></textarea>
            }
            .into_any()
        }
    };

    view! {
        <div class=move || {
            if flagged() { "question question--missing" } else { "question" }
        }>
            <label class="question__label">{question.question.clone()}</label>
            {input}
        </div>
    }
}
