//! Risk dashboard, parameterized by system type (AI or Cybersecurity).
//!
//! DESIGN
//! ======
//! Listing is server-paginated through `RiskFilters`; the charts derive
//! from the loaded page. Status changes are guarded client-side (a risk
//! with no project cannot be updated), then PATCHed with an optimistic
//! local patch and a stats refetch.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::badges::SeverityBadge;
use crate::components::bar_chart::ProjectBarChart;
use crate::components::error_banner::ErrorBanner;
use crate::components::heatmap::Heatmap;
use crate::components::pagination::Pager;
use crate::components::pie_chart::PieChart;
use crate::components::stats_card::StatsCard;
use crate::constants::DEFAULT_PROJECT_ID;
use crate::net::types::{RiskPage, RiskStats, RiskStatus, SystemType};
use crate::state::rate_limit::RateLimitState;
use crate::state::risk_dashboard::{
    NewRiskForm, RiskFilters, heatmap_cells, pie_buckets, project_bars, status_update_guard,
    strategy_progress,
};
use crate::state::session::Session;

#[component]
pub fn AiRiskPage() -> impl IntoView {
    view! { <RiskDashboard system=SystemType::Ai/> }
}

#[component]
pub fn CyberRiskPage() -> impl IntoView {
    view! { <RiskDashboard system=SystemType::Cybersecurity/> }
}

#[component]
fn RiskDashboard(system: SystemType) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let rate_limit = expect_context::<RwSignal<RateLimitState>>();
    let navigate = use_navigate();

    let filters = RwSignal::new(RiskFilters::default());
    let page_data = RwSignal::new(RiskPage::default());
    let stats = RwSignal::new(RiskStats::default());
    let error = RwSignal::new(Option::<String>::None);
    let show_add = RwSignal::new(false);

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let refetch_stats = move || {
        leptos::task::spawn_local(async move {
            match crate::services::risks::stats(None).await {
                Ok(s) => stats.set(s),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let refetch_stats = move || {};

    // Refetch the list whenever the filters change.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let query = filters.get().list_query();
        leptos::task::spawn_local(async move {
            match crate::services::risks::list_by_type(system, &query).await {
                Ok(page) => page_data.set(page),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || refetch_stats());

    let risks = move || page_data.get().risks;
    let pagination = move || page_data.get().pagination.unwrap_or_default();

    let buckets = Signal::derive(move || pie_buckets(&risks()));
    let cells = Signal::derive(move || heatmap_cells(&risks()));
    let bars = Signal::derive(move || project_bars(&risks()));
    let progress = move || strategy_progress(&risks());

    let total = Signal::derive(move || stats.get().summary.total_assessments.to_string());
    let completed = Signal::derive(move || stats.get().summary.completed_assessments.to_string());
    let pending = Signal::derive(move || stats.get().summary.pending_assessments.to_string());

    // Project dropdown options come from the loaded page.
    let project_options = move || {
        let mut options: Vec<String> =
            risks().iter().filter_map(|r| r.project_id.clone()).collect();
        options.sort();
        options.dedup();
        options
    };

    let on_status_change = move |risk_id: String, status: RiskStatus| {
        let Some(risk) = risks().into_iter().find(|r| r.id == risk_id) else {
            return;
        };
        if let Err(message) = status_update_guard(&risk) {
            error.set(Some(message));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let update = crate::services::risks::StatusUpdate {
                project_id: risk.project_id.clone().unwrap_or_default(),
                status,
            };
            let assessment_id = risk.risk_assessment_id.clone();
            page_data.update(|page| {
                crate::state::risk_dashboard::apply_status_locally(
                    &mut page.risks,
                    &risk_id,
                    status,
                );
            });
            leptos::task::spawn_local(async move {
                match crate::services::risks::update_status(&assessment_id, &update).await {
                    Ok(_) => refetch_stats(),
                    Err(e) => error.set(super::route_error(&e, session, rate_limit)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = status;
        }
    };

    let export = move |as_pdf: bool| {
        #[cfg(feature = "hydrate")]
        {
            let known_total = page_data.get_untracked().pagination.map(|p| p.total);
            let query = filters.get_untracked().export_query(known_total);
            leptos::task::spawn_local(async move {
                match crate::services::risks::list_by_type(system, &query).await {
                    Ok(page) => {
                        let rows = crate::util::export::risk_export_rows(&page.risks);
                        let label = system.label();
                        let result = if as_pdf {
                            crate::util::export::pdf_table_bytes(
                                &format!("{label} Risk Assessment"),
                                &crate::util::export::RISK_EXPORT_HEADER,
                                &rows,
                            )
                            .map_err(|e| e.to_string())
                            .and_then(|bytes| {
                                crate::util::download::save_bytes(
                                    &format!("{label}-risks.pdf").to_lowercase(),
                                    crate::util::download::PDF_MIME,
                                    &bytes,
                                )
                            })
                        } else {
                            crate::util::export::workbook_bytes(
                                &format!("{label} Risks"),
                                &crate::util::export::RISK_EXPORT_HEADER,
                                &rows,
                            )
                            .map_err(|e| e.to_string())
                            .and_then(|bytes| {
                                crate::util::download::save_bytes(
                                    &format!("{label}-risks.xlsx").to_lowercase(),
                                    crate::util::download::XLSX_MIME,
                                    &bytes,
                                )
                            })
                        };
                        if let Err(message) = result {
                            error.set(Some(message));
                        }
                    }
                    Err(e) => error.set(super::route_error(&e, session, rate_limit)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = as_pdf;
        }
    };

    view! {
        <div class="risk-page">
            <header class="risk-page__header">
                <h1>{format!("{} Risk Assessment", system.label())}</h1>
                <div class="risk-page__actions">
                    <button class="btn" on:click=move |_| export(false)>"Export Excel"</button>
                    <button class="btn" on:click=move |_| export(true)>"Export PDF"</button>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "+ Add Risk"
                    </button>
                </div>
            </header>

            <ErrorBanner error=error/>

            <div class="risk-page__cards">
                <StatsCard label="Total Assessments" value=total/>
                <StatsCard label="Completed" value=completed/>
                <StatsCard label="Pending" value=pending/>
            </div>

            <div class="risk-page__charts">
                <PieChart entries=buckets title="Risks by Severity"/>
                <Heatmap cells=cells title="Risk Heatmap"/>
                <ProjectBarChart bars=bars title="Average Scores by Project"/>
                <div class="chart chart--progress">
                    <h3 class="chart__title">"Mitigation Progress"</h3>
                    {move || {
                        let p = progress();
                        view! {
                            <p class="chart__progress-line">
                                {format!(
                                    "{} of {} completed ({:.0}%), {} pending, {} rejected",
                                    p.completed,
                                    p.total,
                                    p.completed_percent(),
                                    p.pending,
                                    p.rejected,
                                )}
                            </p>
                        }
                    }}
                </div>
            </div>

            <div class="risk-page__filters">
                <input
                    class="risk-page__search"
                    placeholder="Search risks..."
                    prop:value=move || filters.get().search.clone()
                    on:input=move |ev| {
                        filters.update(|f| f.set_search(&event_target_value(&ev)));
                    }
                />
                <select
                    class="risk-page__select"
                    on:change=move |ev| {
                        filters.update(|f| f.set_project(&event_target_value(&ev)));
                    }
                >
                    <option value="all" selected=move || filters.get().project == "all">
                        "All projects"
                    </option>
                    {move || {
                        project_options()
                            .into_iter()
                            .map(|p| {
                                let value = p.clone();
                                view! {
                                    <option
                                        value=p.clone()
                                        selected=move || filters.get().project == value
                                    >
                                        {p.clone()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    class="risk-page__select"
                    on:change=move |ev| {
                        filters.update(|f| f.set_status(&event_target_value(&ev)));
                    }
                >
                    <option value="all">"All statuses"</option>
                    {RiskStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Risk ID"</th>
                        <th>"Name"</th>
                        <th>"Severity"</th>
                        <th>"Status"</th>
                        <th>"Owner"</th>
                        <th>"Project"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        risks()
                            .into_iter()
                            .map(|risk| {
                                let risk_id = risk.id.clone();
                                let current = risk.status;
                                let owner = risk
                                    .risk_owner
                                    .clone()
                                    .unwrap_or_else(|| "N/A".to_owned());
                                view! {
                                    <tr>
                                        <td>{risk.risk_assessment_id.clone()}</td>
                                        <td>{risk.risk_name.clone()}</td>
                                        <td><SeverityBadge severity=risk.severity/></td>
                                        <td>
                                            <select
                                                class="data-table__status"
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    let status = match value.as_str() {
                                                        "Completed" => RiskStatus::Completed,
                                                        "Rejected" => RiskStatus::Rejected,
                                                        _ => RiskStatus::Pending,
                                                    };
                                                    on_status_change(risk_id.clone(), status);
                                                }
                                            >
                                                {RiskStatus::ALL
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
                                        <td>{owner}</td>
                                        <td>
                                            {match risk.project_id.clone() {
                                                Some(project) => view! {
                                                    <a
                                                        class="data-table__link"
                                                        href=format!("/project/{project}")
                                                    >
                                                        "Comments"
                                                    </a>
                                                }
                                                .into_any(),
                                                None => view! {
                                                    <span class="data-table__muted">"-"</span>
                                                }
                                                .into_any(),
                                            }}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Pager
                page=Signal::derive(move || pagination().page)
                pages=Signal::derive(move || pagination().pages)
                on_page=Callback::new(move |page| filters.update(|f| f.set_page(page)))
            />

            <Show when=move || show_add.get()>
                <AddRiskDialog
                    on_close=Callback::new(move |()| show_add.set(false))
                    on_added=Callback::new(move |()| {
                        show_add.set(false);
                        // Reload the current page and the stat cards.
                        filters.update(|f| f.set_page(f.page));
                        refetch_stats();
                    })
                    error=error
                />
            </Show>
        </div>
    }
}

#[component]
fn AddRiskDialog(
    on_close: Callback<()>,
    on_added: Callback<()>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(NewRiskForm::default());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let current = form.get();
        if !current.is_valid() {
            error.set(Some("Risk name and a 1-5 severity are required.".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let payload = current.to_payload(DEFAULT_PROJECT_ID);
            leptos::task::spawn_local(async move {
                match crate::services::risks::add(&payload).await {
                    Ok(_) => on_added.run(()),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--add-risk" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Add Risk"</h2>
                <label class="dialog__label">
                    "Risk name"
                    <input
                        class="dialog__input"
                        prop:value=move || form.get().risk_name
                        on:input=move |ev| form.update(|f| f.risk_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Owner"
                    <input
                        class="dialog__input"
                        prop:value=move || form.get().risk_owner
                        on:input=move |ev| form.update(|f| f.risk_owner = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Severity (1-5)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        max="5"
                        prop:value=move || form.get().severity.to_string()
                        on:input=move |ev| {
                            if let Ok(severity) = event_target_value(&ev).parse() {
                                form.update(|f| f.severity = severity);
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Justification"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || form.get().justification
                        on:input=move |ev| {
                            form.update(|f| f.justification = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Mitigation"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || form.get().mitigation
                        on:input=move |ev| {
                            form.update(|f| f.mitigation = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
