//! Project comment thread with PDF attachments.
//!
//! Files are validated client-side before any upload; the picked file stays
//! in the file input itself and is read back at submit time, so only its
//! metadata lives in state.

use leptos::html;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::constants::DEFAULT_PROJECT_ID;
use crate::net::types::Comment;
use crate::state::comments::CommentComposer;
use crate::state::rate_limit::RateLimitState;
use crate::state::session::Session;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let rate_limit = expect_context::<RwSignal<RateLimitState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let project_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_owned())
    });

    let comments = RwSignal::new(Vec::<Comment>::new());
    let composer = RwSignal::new(CommentComposer::default());
    let confirm_delete = RwSignal::new(Option::<String>::None);
    let error = RwSignal::new(Option::<String>::None);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let refetch = move || {
        let project = project_id.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::services::comments::list(&project).await {
                Ok(list) => comments.set(list),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let refetch = move || {};

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = project_id.get();
        refetch();
    });

    let clear_file_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        composer.update(CommentComposer::clear_file);
    };

    let on_file_pick = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else { return };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                composer.update(CommentComposer::clear_file);
                return;
            };
            let size = file.size() as u64;
            composer.update(|c| c.pick_file(&file.name(), &file.type_(), size));
            // A rejected pick must not leave the file in the input either.
            if composer.get_untracked().attachment.is_none() {
                input.set_value("");
            }
        }
    };

    let submit = move |_| {
        let current = composer.get();
        if !current.can_submit() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let project = project_id.get_untracked();
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .filter(|_| current.attachment.is_some());
            leptos::task::spawn_local(async move {
                let result = match &current.editing {
                    Some(comment_id) => {
                        crate::services::comments::update(comment_id, &current.text, file.as_ref())
                            .await
                    }
                    None => {
                        crate::services::comments::create(&project, &current.text, file.as_ref())
                            .await
                    }
                };
                match result {
                    Ok(_) => {
                        composer.update(CommentComposer::reset);
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        refetch();
                    }
                    Err(e) => {
                        let message = crate::state::comments::upload_error_message(&e);
                        if super::route_error(&e, session, rate_limit).is_some() {
                            composer.update(|c| c.error = Some(message));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    };

    let delete_confirmed = move |_| {
        let Some(comment_id) = confirm_delete.get_untracked() else { return };
        confirm_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::services::comments::delete(&comment_id).await {
                Ok(_) => refetch(),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = comment_id;
        }
    };

    view! {
        <div class="project-page">
            <h1 class="project-page__title">
                {move || format!("Project {}", project_id.get())}
            </h1>
            <ErrorBanner error=error/>

            <section class="comment-thread">
                {move || {
                    let list = comments.get();
                    if list.is_empty() {
                        view! { <p class="comment-thread__empty">"No comments yet."</p> }
                            .into_any()
                    } else {
                        list.into_iter()
                            .map(|comment| comment_row(comment, composer, confirm_delete))
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </section>

            <section class="comment-composer">
                <h2 class="comment-composer__title">
                    {move || {
                        if composer.get().editing.is_some() { "Edit comment" } else { "Add comment" }
                    }}
                </h2>
                {move || {
                    composer
                        .get()
                        .error
                        .map(|e| view! { <p class="comment-composer__error">{e}</p> })
                }}
                <textarea
                    class="comment-composer__text"
                    placeholder="Write a comment..."
                    prop:value=move || composer.get().text
                    on:input=move |ev| composer.update(|c| c.text = event_target_value(&ev))
                ></textarea>
                <div class="comment-composer__attachment">
                    <input
                        type="file"
                        accept="application/pdf"
                        node_ref=file_input
                        on:change=on_file_pick
                    />
                    {move || {
                        composer.get().attachment.map(|attachment| {
                            view! {
                                <span class="comment-composer__file">
                                    {attachment.name}
                                    <button
                                        class="comment-composer__remove"
                                        on:click=move |_| clear_file_input()
                                    >
                                        "\u{d7}"
                                    </button>
                                </span>
                            }
                        })
                    }}
                </div>
                <div class="comment-composer__actions">
                    <Show when=move || composer.get().editing.is_some()>
                        <button
                            class="btn"
                            on:click=move |_| {
                                composer.update(CommentComposer::cancel_edit);
                                clear_file_input();
                            }
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <button
                        class="btn btn--primary"
                        disabled=move || !composer.get().can_submit()
                        on:click=submit
                    >
                        {move || {
                            if composer.get().editing.is_some() { "Save" } else { "Post" }
                        }}
                    </button>
                </div>
            </section>

            <Show when=move || confirm_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete comment"
                    message=Signal::derive(|| {
                        "This comment will be permanently deleted.".to_owned()
                    })
                    on_confirm=Callback::new(delete_confirmed)
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                />
            </Show>
        </div>
    }
}

fn comment_row(
    comment: Comment,
    composer: RwSignal<CommentComposer>,
    confirm_delete: RwSignal<Option<String>>,
) -> impl IntoView + use<> {
    let edit_id = comment.comment_id.clone();
    let edit_text = comment.text.clone();
    let delete_id = comment.comment_id.clone();

    view! {
        <article class="comment">
            <header class="comment__header">
                <span class="comment__author">
                    {comment.author.clone().unwrap_or_else(|| "Unknown".to_owned())}
                </span>
                <span class="comment__date">{comment.created_at.clone().unwrap_or_default()}</span>
            </header>
            <p class="comment__text">{comment.text.clone()}</p>
            {comment.attachment.as_ref().map(|url| {
                let name = comment
                    .attachment_info
                    .as_ref()
                    .map_or("attachment.pdf".to_owned(), |info| info.original_name.clone());
                view! {
                    <a class="comment__attachment" href=url.clone() target="_blank">
                        {name}
                    </a>
                }
            })}
            <footer class="comment__actions">
                <button
                    class="btn btn--ghost"
                    on:click=move |_| {
                        composer.update(|c| c.start_edit(&edit_id, &edit_text));
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--ghost"
                    on:click=move |_| confirm_delete.set(Some(delete_id.clone()))
                >
                    "Delete"
                </button>
            </footer>
        </article>
    }
}
