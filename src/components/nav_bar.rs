//! Top navigation bar with section links, contact support, and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::contact_dialog::ContactDialog;
use crate::config::APP_NAME;
use crate::state::session::Session;

const LINKS: [(&str, &str); 8] = [
    ("/", "Dashboard"),
    ("/questionnaire", "Questionnaire"),
    ("/risks/ai", "AI Risks"),
    ("/risks/cyber", "Cyber Risks"),
    ("/controls/ai", "AI Controls"),
    ("/controls/cyber", "Cyber Controls"),
    ("/templates", "Templates"),
    ("/inventory", "Inventory"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let show_contact = RwSignal::new(false);

    let sign_out = move |_| {
        crate::state::session::clear_persisted();
        session.update(Session::invalidate);
        navigate("/login", NavigateOptions::default());
    };

    let user_name = move || {
        session
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">{APP_NAME}</span>
            <div class="nav-bar__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! { <a class="nav-bar__link" href=*href>{*label}</a> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="nav-bar__actions">
                <button class="nav-bar__contact" on:click=move |_| show_contact.set(true)>
                    "Contact Support"
                </button>
                <Show when=move || session.get().is_authenticated()>
                    <span class="nav-bar__user">{user_name}</span>
                    <button class="nav-bar__signout" on:click=sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
            <Show when=move || show_contact.get()>
                <ContactDialog on_close=Callback::new(move |()| show_contact.set(false))/>
            </Show>
        </nav>
    }
}
