//! Vendor and system inventory.
//!
//! All records live client-side in an [`InventoryTable`]; the page seeds a
//! starter set, edits happen through the record dialog, and the download
//! button writes a CSV of whatever the filters currently show.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::inventory::{AiUsage, InventoryRecord, InventoryTable, RecordType};
use crate::state::session::Session;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let table = RwSignal::new(InventoryTable::with_records(seed_records()));
    let draft = RwSignal::new(InventoryRecord::default());
    let dialog_open = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let notice = RwSignal::new(Option::<String>::None);

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let open_add = move |_| {
        draft.set(InventoryRecord { ai_usage: AiUsage::Low, ..Default::default() });
        dialog_open.set(true);
    };

    let open_edit = move |record: InventoryRecord| {
        draft.set(record);
        dialog_open.set(true);
    };

    let save_record = move |()| {
        let mut record = draft.get_untracked();
        if record.name.trim().is_empty() {
            return;
        }
        record.last_updated = now_string();
        if record.data_processing.trim().is_empty() {
            record.data_processing = "-".to_owned();
        }
        if record.contact.trim().is_empty() {
            record.contact = "-".to_owned();
        }
        table.update(|t| {
            if record.id == 0 {
                t.add(record.clone());
            } else {
                t.update(record.clone());
            }
        });
        dialog_open.set(false);
    };

    let duplicate_selected = move |_| {
        table.update(|t| {
            let copies: Vec<InventoryRecord> = t
                .records()
                .iter()
                .filter(|r| t.selected().contains(&r.id))
                .map(|r| InventoryRecord {
                    id: 0,
                    name: format!("{} (Copy)", r.name),
                    last_updated: now_string(),
                    ..r.clone()
                })
                .collect();
            for copy in copies {
                t.add(copy);
            }
            t.select_all_visible(false);
        });
    };

    let request_delete = move |_| {
        if table.get_untracked().selected().is_empty() {
            notice.set(Some("Select at least one record to delete.".to_owned()));
        } else {
            confirm_delete.set(true);
        }
    };

    let delete_confirmed = move |()| {
        confirm_delete.set(false);
        let mut deleted = 0;
        table.update(|t| deleted = t.delete_selected());
        notice.set(Some(format!("Deleted {deleted} record(s).")));
    };

    let download = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let csv = table.get_untracked().to_csv();
            if let Err(message) = crate::util::download::save_text(
                "inventory-data.csv",
                crate::util::download::CSV_MIME,
                &csv,
            ) {
                notice.set(Some(message));
            }
        }
    };

    let all_visible_selected = move || {
        let t = table.get();
        let visible = t.filtered();
        !visible.is_empty() && visible.iter().all(|r| t.selected().contains(&r.id))
    };

    view! {
        <div class="inventory-page">
            <header class="inventory-page__header">
                <h1>"Inventory"</h1>
                <div class="inventory-page__actions">
                    <button class="btn" on:click=download>"Download CSV"</button>
                    <button class="btn" on:click=duplicate_selected>"Duplicate Selected"</button>
                    <button class="btn" on:click=request_delete>"Delete Selected"</button>
                    <button class="btn btn--primary" on:click=open_add>"Add Record"</button>
                </div>
            </header>

            {move || {
                notice.get().map(|message| {
                    view! {
                        <div class="inventory-page__notice" role="status">
                            {message}
                            <button class="btn btn--ghost" on:click=move |_| notice.set(None)>
                                "\u{d7}"
                            </button>
                        </div>
                    }
                })
            }}

            <div class="inventory-page__filters">
                <input
                    class="inventory-page__search"
                    placeholder="Search by name, type, or contact"
                    prop:value=move || table.get().search.clone()
                    on:input=move |ev| {
                        table.update(|t| t.search = event_target_value(&ev));
                    }
                />
                <select
                    class="inventory-page__filter"
                    on:change=move |ev| {
                        table.update(|t| t.filter = event_target_value(&ev));
                    }
                >
                    <option value="all">"All records"</option>
                    <option value="vendor">"Vendors"</option>
                    <option value="system">"Systems"</option>
                    {AiUsage::ALL
                        .iter()
                        .map(|usage| {
                            view! {
                                <option value=usage.status_key()>
                                    {format!("AI Usage: {}", usage.as_str())}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                prop:checked=all_visible_selected
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    table.update(|t| t.select_all_visible(checked));
                                }
                            />
                        </th>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Contact"</th>
                        <th>"Last Updated"</th>
                        <th>"AI Usage"</th>
                        <th>"Data Processing"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let t = table.get();
                        t.filtered()
                            .into_iter()
                            .map(|record| {
                                let id = record.id;
                                let selected = t.selected().contains(&id);
                                let edit_record = record.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=selected
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    table.update(|t| {
                                                        t.toggle_selected(id, checked)
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>{record.name.clone()}</td>
                                        <td>{record.record_type.as_str()}</td>
                                        <td>{record.contact.clone()}</td>
                                        <td>{record.last_updated.clone()}</td>
                                        <td>
                                            <span class=format!(
                                                "usage-badge usage-badge--{}",
                                                record.ai_usage.status_key(),
                                            )>
                                                {record.ai_usage.as_str()}
                                            </span>
                                        </td>
                                        <td>{record.data_processing.clone()}</td>
                                        <td>
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| open_edit(edit_record.clone())
                                            >
                                                "Edit"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || dialog_open.get()>
                <RecordDialog
                    draft=draft
                    on_save=Callback::new(save_record)
                    on_close=Callback::new(move |()| dialog_open.set(false))
                />
            </Show>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Delete records"
                    message=Signal::derive(move || {
                        format!(
                            "{} selected record(s) will be permanently deleted.",
                            table.get().selected().len(),
                        )
                    })
                    on_confirm=Callback::new(delete_confirmed)
                    on_cancel=Callback::new(move |()| confirm_delete.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn RecordDialog(
    draft: RwSignal<InventoryRecord>,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">
                    {move || if draft.get().id == 0 { "Add Record" } else { "Edit Record" }}
                </h2>
                <label class="dialog__field">
                    "Name"
                    <input
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__field">
                    "Type"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.record_type = record_type_from_str(&value));
                    }>
                        {move || {
                            let current = draft.get().record_type;
                            RecordType::ALL
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
                <label class="dialog__field">
                    "Contact"
                    <input
                        prop:value=move || draft.get().contact
                        on:input=move |ev| draft.update(|d| d.contact = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__field">
                    "AI Usage"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.ai_usage = ai_usage_from_str(&value));
                    }>
                        {move || {
                            let current = draft.get().ai_usage;
                            AiUsage::ALL
                                .iter()
                                .map(|u| {
                                    view! {
                                        <option value=u.as_str() selected=*u == current>
                                            {u.as_str()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__field">
                    "Data Processing"
                    <input
                        prop:value=move || draft.get().data_processing
                        on:input=move |ev| {
                            draft.update(|d| d.data_processing = event_target_value(&ev));
                        }
                    />
                </label>
                <footer class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || draft.get().name.trim().is_empty()
                        on:click=move |_| on_save.run(())
                    >
                        "Save"
                    </button>
                </footer>
            </div>
        </div>
    }
}

fn record_type_from_str(value: &str) -> RecordType {
    RecordType::ALL
        .into_iter()
        .find(|t| t.as_str() == value)
        .unwrap_or_default()
}

fn ai_usage_from_str(value: &str) -> AiUsage {
    AiUsage::ALL
        .into_iter()
        .find(|u| u.as_str() == value)
        .unwrap_or_default()
}

/// Locale timestamp for the "Last Updated" column.
fn now_string() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Starter records shown before the user adds their own.
fn seed_records() -> Vec<InventoryRecord> {
    let record = |id: u32,
                  name: &str,
                  record_type: RecordType,
                  contact: &str,
                  last_updated: &str,
                  ai_usage: AiUsage| InventoryRecord {
        id,
        name: name.to_owned(),
        record_type,
        contact: contact.to_owned(),
        last_updated: last_updated.to_owned(),
        ai_usage,
        data_processing: "-".to_owned(),
    };
    vec![
        record(1, "Comptroller Services", RecordType::Vendor, "-", "08-25-2022 12:33 AM", AiUsage::Unavailable),
        record(2, "Gainsight Inc", RecordType::Vendor, "-", "08-27-2024 05:50 PM", AiUsage::High),
        record(3, "INNRESEARCH", RecordType::Vendor, "-", "10-29-2024 02:42 PM", AiUsage::Incomplete),
        record(4, "Authbridge Research", RecordType::Vendor, "-", "04-20-2025 12:17 PM", AiUsage::Low),
        record(5, "ISLAND TECHNOLOGIES", RecordType::Vendor, "-", "09-14-2024 01:40 AM", AiUsage::Unavailable),
        record(6, "Lorensbergs AB", RecordType::Vendor, "-", "04-20-2023 12:09 PM", AiUsage::Unavailable),
        record(7, "D&B FATCA Portal", RecordType::System, "Martin Skeen", "05-18-2022 03:59 PM", AiUsage::Incomplete),
        record(8, "Vertex AI", RecordType::System, "Zissis Konstas", "06-04-2025 04:18 PM", AiUsage::High),
        record(9, "SETCCE d.o.o.", RecordType::Vendor, "-", "01-27-2025 07:35 PM", AiUsage::Medium),
    ]
}
