//! Dashboard home with platform-wide statistic cards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::stats_card::StatsCard;
use crate::net::types::{GovernanceStatistics, RiskStats};
use crate::state::rate_limit::RateLimitState;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let rate_limit = expect_context::<RwSignal<RateLimitState>>();
    let navigate = use_navigate();

    let governance = RwSignal::new(GovernanceStatistics::default());
    let risks = RwSignal::new(RiskStats::default());
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::services::governance::statistics().await {
                Ok(stats) => governance.set(stats),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
            match crate::services::risks::stats(None).await {
                Ok(stats) => risks.set(stats),
                Err(e) => error.set(super::route_error(&e, session, rate_limit)),
            }
        });
    });

    let total_projects = Signal::derive(move || governance.get().total_projects.to_string());
    let average_score = Signal::derive(move || format!("{:.1}", governance.get().average_score));
    let total_assessments =
        Signal::derive(move || risks.get().summary.total_assessments.to_string());
    let pending = Signal::derive(move || risks.get().summary.pending_assessments.to_string());

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Governance Overview"</h1>
            <ErrorBanner error=error/>
            <div class="home-page__cards">
                <StatsCard label="Projects" value=total_projects/>
                <StatsCard label="Average Governance Score" value=average_score/>
                <StatsCard label="Risk Assessments" value=total_assessments/>
                <StatsCard label="Pending Assessments" value=pending hint="Awaiting review"/>
            </div>
        </div>
    }
}
