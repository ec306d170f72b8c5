//! Template catalog with the builder dialog and submitted-response viewer.
//!
//! The builder edits a [`TemplateDraft`] and refuses to save until
//! `problems()` is empty, so the wire shape sent to the server is always
//! complete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::{Answer, ResponseType, Template, TemplateResponse, TemplateType};
use crate::state::rate_limit::RateLimitState;
use crate::state::session::Session;
use crate::state::templates::TemplateDraft;

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let rate_limit = expect_context::<RwSignal<RateLimitState>>();
    let navigate = use_navigate();

    let templates = RwSignal::new(Vec::<Template>::new());
    let error = RwSignal::new(Option::<String>::None);
    let draft = RwSignal::new(TemplateDraft::default());
    let builder_open = RwSignal::new(false);
    let confirm_delete = RwSignal::new(Option::<(String, String)>::None);
    let responses_for = RwSignal::new(Option::<String>::None);
    let responses = RwSignal::new(Vec::<TemplateResponse>::new());

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let refetch = move || {
        leptos::task::spawn_local(async move {
            match crate::services::templates::list().await {
                Ok(list) => templates.set(list),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let refetch = move || {};

    #[cfg(feature = "hydrate")]
    Effect::new(move || refetch());

    let open_new = move |_| {
        draft.set(TemplateDraft::default());
        builder_open.set(true);
    };

    let open_edit = move |template: &Template| {
        draft.set(TemplateDraft::from_template(template));
        builder_open.set(true);
    };

    let view_responses = move |template_id: String| {
        responses_for.set(Some(template_id.clone()));
        responses.set(Vec::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::templates::responses_for_template(&template_id).await {
                Ok(list) => responses.set(list),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = template_id;
        }
    };

    let save_draft = move |()| {
        let current = draft.get_untracked();
        if !current.is_valid() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let template = current.to_template();
            let result = if current.id.is_empty() {
                crate::services::templates::create(&template).await
            } else {
                crate::services::templates::update(&current.id, &template).await
            };
            match result {
                Ok(_) => {
                    builder_open.set(false);
                    refetch();
                }
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    };

    let delete_confirmed = move |()| {
        let Some((template_id, _)) = confirm_delete.get_untracked() else { return };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::templates::delete(&template_id).await {
                Ok(_) => refetch(),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = template_id;
        }
    };

    view! {
        <div class="templates-page">
            <header class="templates-page__header">
                <h1>"Assessment Templates"</h1>
                <button class="btn btn--primary" on:click=open_new>"New Template"</button>
            </header>

            <ErrorBanner error=error/>

            <div class="templates-page__list">
                {move || {
                    let list = templates.get();
                    if list.is_empty() {
                        return view! {
                            <p class="templates-page__empty">"No templates defined yet."</p>
                        }
                        .into_any();
                    }
                    list.into_iter()
                        .map(|template| {
                            let edit_template = template.clone();
                            let delete_target =
                                (template.id.clone(), template.name.clone());
                            let responses_id = template.id.clone();
                            view! {
                                <article class="template-card">
                                    <header class="template-card__header">
                                        <h2 class="template-card__name">{template.name.clone()}</h2>
                                        <span class="template-card__type">
                                            {template.template_type.as_str()}
                                        </span>
                                    </header>
                                    <p class="template-card__description">
                                        {template.description.clone()}
                                    </p>
                                    <p class="template-card__count">
                                        {format!("{} questions", template.questions.len())}
                                    </p>
                                    <footer class="template-card__actions">
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| open_edit(&edit_template)
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                view_responses(responses_id.clone())
                                            }
                                        >
                                            "Responses"
                                        </button>
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                confirm_delete.set(Some(delete_target.clone()))
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </footer>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || responses_for.get().is_some()>
                <ResponsePanel
                    templates=templates
                    responses_for=responses_for
                    responses=responses
                />
            </Show>

            <Show when=move || builder_open.get()>
                <TemplateBuilder
                    draft=draft
                    on_save=Callback::new(save_draft)
                    on_close=Callback::new(move |()| builder_open.set(false))
                />
            </Show>

            <Show when=move || confirm_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete template"
                    message=Signal::derive(move || {
                        let name = confirm_delete
                            .get()
                            .map(|(_, name)| name)
                            .unwrap_or_default();
                        format!("\"{name}\" and its questions will be permanently deleted.")
                    })
                    on_confirm=Callback::new(delete_confirmed)
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}

/// Submitted responses for the selected template.
#[component]
fn ResponsePanel(
    templates: RwSignal<Vec<Template>>,
    responses_for: RwSignal<Option<String>>,
    responses: RwSignal<Vec<TemplateResponse>>,
) -> impl IntoView {
    let title = move || {
        let id = responses_for.get().unwrap_or_default();
        templates
            .get()
            .iter()
            .find(|t| t.id == id)
            .map_or("Responses".to_owned(), |t| format!("Responses for {}", t.name))
    };

    view! {
        <section class="response-panel">
            <header class="response-panel__header">
                <h2>{title}</h2>
                <button class="btn" on:click=move |_| responses_for.set(None)>"Close"</button>
            </header>
            {move || {
                let list = responses.get();
                if list.is_empty() {
                    return view! {
                        <p class="response-panel__empty">"No responses submitted yet."</p>
                    }
                    .into_any();
                }
                list.into_iter()
                    .map(|response| {
                        view! {
                            <article class="response-panel__item">
                                <header class="response-panel__meta">
                                    <span>{response.respondent_info.name.clone()}</span>
                                    <span>{response.submitted_at.clone().unwrap_or_default()}</span>
                                </header>
                                <dl class="response-panel__answers">
                                    {response
                                        .responses
                                        .iter()
                                        .map(|(question_id, answer)| {
                                            let text = match answer {
                                                Answer::One(value) => value.clone(),
                                                Answer::Many(values) => values.join(", "),
                                            };
                                            view! {
                                                <div class="response-panel__answer">
                                                    <dt>{question_id.clone()}</dt>
                                                    <dd>{text}</dd>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </dl>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn TemplateBuilder(
    draft: RwSignal<TemplateDraft>,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let save_attempted = RwSignal::new(false);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">
                    {move || {
                        if draft.get().id.is_empty() { "New Template" } else { "Edit Template" }
                    }}
                </h2>

                <label class="dialog__field">
                    "Name"
                    <input
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__field">
                    "Description"
                    <textarea
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            draft.update(|d| d.description = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__field">
                    "Template type"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.template_type = template_type_from_str(&value));
                    }>
                        {move || {
                            let current = draft.get().template_type;
                            TemplateType::ALL
                                .iter()
                                .map(|t| {
                                    view! {
                                        <option value=t.as_str() selected=*t == current>
                                            {t.as_str()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>

                <h3 class="dialog__section">"Questions"</h3>
                {move || {
                    draft
                        .get()
                        .questions
                        .iter()
                        .map(|question| question_editor(draft, question.id.clone()))
                        .collect::<Vec<_>>()
                }}
                <button
                    class="btn"
                    on:click=move |_| {
                        draft.update(|d| {
                            d.add_question();
                        });
                    }
                >
                    "Add Question"
                </button>

                <Show when=move || save_attempted.get() && !draft.get().is_valid()>
                    <ul class="dialog__problems" role="alert">
                        {move || {
                            draft
                                .get()
                                .problems()
                                .into_iter()
                                .map(|p| view! { <li>{p}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                <footer class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            save_attempted.set(true);
                            on_save.run(());
                        }
                    >
                        "Save Template"
                    </button>
                </footer>
            </div>
        </div>
    }
}

fn question_editor(draft: RwSignal<TemplateDraft>, question_id: String) -> impl IntoView + use<> {
    let id = question_id.clone();
    let with_question = move |d: &TemplateDraft| {
        d.questions.iter().find(|q| q.id == id).cloned().unwrap_or_default()
    };
    let question = {
        let with_question = with_question.clone();
        move || with_question(&draft.get())
    };

    let text_id = question_id.clone();
    let type_id = question_id.clone();
    let required_id = question_id.clone();
    let up_id = question_id.clone();
    let down_id = question_id.clone();
    let remove_id = question_id.clone();
    let options_id = question_id.clone();

    view! {
        <div class="question-editor">
            <div class="question-editor__row">
                <input
                    class="question-editor__text"
                    placeholder="Question text"
                    prop:value={
                        let question = question.clone();
                        move || question().question
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(q) = d.questions.iter_mut().find(|q| q.id == text_id) {
                                q.question = value.clone();
                            }
                        });
                    }
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| {
                        if let Some(q) = d.questions.iter_mut().find(|q| q.id == type_id) {
                            q.response_type = response_type_from_str(&value);
                        }
                    });
                }>
                    {
                        let question = question.clone();
                        move || {
                            let current = question().response_type;
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
                        }
                    }
                </select>
                <label class="question-editor__required">
                    <input
                        type="checkbox"
                        prop:checked={
                            let question = question.clone();
                            move || question().required
                        }
                        on:change=move |_| {
                            draft.update(|d| {
                                if let Some(q) =
                                    d.questions.iter_mut().find(|q| q.id == required_id)
                                {
                                    q.required = !q.required;
                                }
                            });
                        }
                    />
                    "Required"
                </label>
                <button class="btn btn--ghost" on:click=move |_| {
                    draft.update(|d| d.move_question_up(&up_id));
                }>"\u{2191}"</button>
                <button class="btn btn--ghost" on:click=move |_| {
                    draft.update(|d| d.move_question_down(&down_id));
                }>"\u{2193}"</button>
                <button class="btn btn--ghost" on:click=move |_| {
                    draft.update(|d| d.remove_question(&remove_id));
                }>"Remove"</button>
            </div>
            <Show when={
                let question = question.clone();
                move || question().response_type.has_options()
            }>
                {
                    let question = question.clone();
                    let options_id = options_id.clone();
                    move || {
                        let options_id = options_id.clone();
                        let add_id = options_id.clone();
                        view! {
                            <div class="question-editor__options">
                                {question()
                                    .options
                                    .iter()
                                    .enumerate()
                                    .map(|(index, option)| {
                                        let edit_id = options_id.clone();
                                        let remove_option_id = options_id.clone();
                                        view! {
                                            <div class="question-editor__option">
                                                <input
                                                    placeholder=format!("Option {}", index + 1)
                                                    prop:value=option.clone()
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        draft.update(|d| {
                                                            if let Some(q) = d
                                                                .questions
                                                                .iter_mut()
                                                                .find(|q| q.id == edit_id)
                                                                && index < q.options.len()
                                                            {
                                                                q.options[index] = value.clone();
                                                            }
                                                        });
                                                    }
                                                />
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| {
                                                        draft.update(|d| {
                                                            if let Some(q) = d
                                                                .questions
                                                                .iter_mut()
                                                                .find(|q| q.id == remove_option_id)
                                                                && index < q.options.len()
                                                            {
                                                                q.options.remove(index);
                                                            }
                                                        });
                                                    }
                                                >
                                                    "\u{d7}"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                                <button
                                    class="btn btn--ghost"
                                    on:click=move |_| {
                                        draft.update(|d| {
                                            if let Some(q) =
                                                d.questions.iter_mut().find(|q| q.id == add_id)
                                            {
                                                q.options.push(String::new());
                                            }
                                        });
                                    }
                                >
                                    "Add Option"
                                </button>
                            </div>
                        }
                    }
                }
            </Show>
        </div>
    }
}

fn template_type_from_str(value: &str) -> TemplateType {
    TemplateType::ALL
        .into_iter()
        .find(|t| t.as_str() == value)
        .unwrap_or(TemplateType::AiSystem)
}

fn response_type_from_str(value: &str) -> ResponseType {
    ResponseType::ALL
        .into_iter()
        .find(|t| t.label() == value)
        .unwrap_or(ResponseType::Text)
}
