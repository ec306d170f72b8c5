//! Control assessment table, parameterized by system type.
//!
//! One wide fetch per visit; filtering and 15-row pagination happen in
//! [`ControlTable`]. Status changes are optimistic and roll back if the
//! server rejects the update.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::pagination::Pager;
use crate::net::types::{ControlStatus, SystemType};
use crate::state::controls::ControlTable;
use crate::state::rate_limit::RateLimitState;
use crate::state::session::Session;

#[component]
pub fn AiControlPage() -> impl IntoView {
    view! { <ControlAssessment system=SystemType::Ai/> }
}

#[component]
pub fn CyberControlPage() -> impl IntoView {
    view! { <ControlAssessment system=SystemType::Cybersecurity/> }
}

#[component]
fn ControlAssessment(system: SystemType) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let rate_limit = expect_context::<RwSignal<RateLimitState>>();
    let navigate = use_navigate();

    let table = RwSignal::new(ControlTable::default());
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::services::controls::list_by_type(system, &ControlTable::fetch_query())
                .await
            {
                Ok(page) => table.update(|t| t.load(page.controls)),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
    });

    let on_status_change = move |control_id: String, status: ControlStatus| {
        let mut command = None;
        table.update(|t| command = t.begin_status_change(&control_id, status));
        let Some(command) = command else { return };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = serde_json::json!({ "status": command.requested.as_str() });
            if let Err(e) = crate::services::controls::update(&command.control_id, &body).await {
                log::error!("control status update failed, rolling back: {e}");
                table.update(|t| t.rollback(&command));
                error.set(super::route_error(&e, session, rate_limit));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = command;
        }
    };

    let export = move |as_pdf: bool| {
        #[cfg(feature = "hydrate")]
        {
            let controls: Vec<_> = table.get_untracked().controls().to_vec();
            let rows = crate::util::export::control_export_rows(&controls);
            let label = system.label();
            let result = if as_pdf {
                crate::util::export::pdf_table_bytes(
                    &format!("{label} Control Assessment"),
                    &crate::util::export::CONTROL_EXPORT_HEADER,
                    &rows,
                )
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    crate::util::download::save_bytes(
                        &format!("{label}-controls.pdf").to_lowercase(),
                        crate::util::download::PDF_MIME,
                        &bytes,
                    )
                })
            } else {
                crate::util::export::workbook_bytes(
                    &format!("{label} Controls"),
                    &crate::util::export::CONTROL_EXPORT_HEADER,
                    &rows,
                )
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    crate::util::download::save_bytes(
                        &format!("{label}-controls.xlsx").to_lowercase(),
                        crate::util::download::XLSX_MIME,
                        &bytes,
                    )
                })
            };
            if let Err(message) = result {
                error.set(Some(message));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = as_pdf;
        }
    };

    view! {
        <div class="control-page">
            <header class="control-page__header">
                <h1>{format!("{} Control Assessment", system.label())}</h1>
                <div class="control-page__actions">
                    <button class="btn" on:click=move |_| export(false)>"Export Excel"</button>
                    <button class="btn" on:click=move |_| export(true)>"Export PDF"</button>
                </div>
            </header>

            <ErrorBanner error=error/>

            <div class="control-page__filters">
                <select
                    class="control-page__select"
                    on:change=move |ev| {
                        table.update(|t| t.set_status_filter(&event_target_value(&ev)));
                    }
                >
                    <option value="all">"All statuses"</option>
                    {ControlStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="control-page__select"
                    on:change=move |ev| {
                        table.update(|t| t.set_project_filter(&event_target_value(&ev)));
                    }
                >
                    <option value="all">"All projects"</option>
                    {move || {
                        table
                            .get()
                            .unique_projects()
                            .into_iter()
                            .map(|p| view! { <option value=p.clone()>{p.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Section"</th>
                        <th>"Control"</th>
                        <th>"Requirements"</th>
                        <th>"Status"</th>
                        <th>"Tickets"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        table
                            .get()
                            .visible()
                            .into_iter()
                            .map(|control| {
                                let control_id = control.id.clone();
                                let current = control.status;
                                view! {
                                    <tr>
                                        <td>{control.code.clone()}</td>
                                        <td>{control.section.clone()}</td>
                                        <td>{control.control.clone()}</td>
                                        <td class="data-table__wrap">
                                            {control.requirements.clone()}
                                        </td>
                                        <td>
                                            <select
                                                class="data-table__status"
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    let status = match value.as_str() {
                                                        "Implemented" => ControlStatus::Implemented,
                                                        "In Progress" => ControlStatus::InProgress,
                                                        _ => ControlStatus::NotImplemented,
                                                    };
                                                    on_status_change(control_id.clone(), status);
                                                }
                                            >
                                                {ControlStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=*s == current
                                                            >
                                                                {s.as_str()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                        </td>
                                        <td>{control.tickets.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Pager
                page=Signal::derive(move || table.get().page() as u32)
                pages=Signal::derive(move || table.get().page_count() as u32)
                on_page=Callback::new(move |page: u32| {
                    table.update(|t| t.set_page(page as usize));
                })
            />
        </div>
    }
}
