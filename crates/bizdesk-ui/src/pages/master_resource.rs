use bizdesk_types::{find_resource, FieldKind, MasterResource, MasterTable};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::card::Card;
use crate::components::form::{FormState, FormValues, TextField};
use crate::components::modal::{ConfirmDialog, Modal};
use crate::pages::not_found::NotFoundPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Editor {
    Closed,
    Adding,
    Editing(u64),
}

/// Trimmed values for the resource's own fields; stray inputs are dropped.
pub fn record_values(resource: &MasterResource, values: &FormValues) -> FormValues {
    resource
        .fields
        .iter()
        .map(|field| {
            let value = values.get(field.name).map(|v| v.trim()).unwrap_or("");
            (field.name.to_string(), value.to_string())
        })
        .collect()
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Number => "number",
    }
}

#[component]
pub fn MasterResourcePage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.with(|p| p.get("resource")).unwrap_or_default();
        match find_resource(&slug) {
            Some(resource) => view! { <ResourceScreen resource=resource /> }.into_any(),
            None => view! { <NotFoundPage /> }.into_any(),
        }
    }
}

#[component]
fn ResourceScreen(resource: &'static MasterResource) -> impl IntoView {
    let table = RwSignal::new(MasterTable::default());
    let editor = RwSignal::new(Editor::Closed);
    let pendingDelete = RwSignal::new(Option::<u64>::None);
    let form = FormState::new();

    let openAdd = move |_: MouseEvent| {
        form.reset();
        editor.set(Editor::Adding);
    };

    let closeEditor = move || {
        editor.set(Editor::Closed);
        form.reset();
    };

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = record_values(resource, &form.values_untracked());
        let errors = resource.validate(&values);
        if !errors.is_empty() {
            form.set_errors(errors);
            return;
        }

        match editor.get_untracked() {
            Editor::Adding => table.update(|t| {
                t.insert(values);
            }),
            Editor::Editing(key) => table.update(|t| {
                if !t.update(key, values) {
                    tracing::warn!(key, resource = resource.slug, "edited row no longer exists");
                }
            }),
            Editor::Closed => {}
        }
        closeEditor();
    };

    let columnCount = resource.fields.len() + 1;

    view! {
        <div class="subpage-header">
            <div class="subpage-title">
                <a class="btn btn-ghost" href="/master-data">"\u{2190}"</a>
                <h1>{resource.title}</h1>
            </div>
            <button class="btn btn-primary" on:click=openAdd>
                {format!("Add {}", resource.singular)}
            </button>
        </div>
        <p class="subtitle">{resource.description}</p>

        <Card title=resource.title.to_string() subtitle=format!("A list of all {}.", resource.title.to_lowercase())>
            <table>
                <thead>
                    <tr>
                        {resource
                            .fields
                            .iter()
                            .map(|field| view! { <th>{field.label}</th> })
                            .collect_view()}
                        <th class="col-actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = table.with(|t| t.records().to_vec());
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan=columnCount.to_string()>"No data"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|record| {
                                let key = record.key;
                                let cells: Vec<String> = resource
                                    .fields
                                    .iter()
                                    .map(|field| record.value(field.name).to_string())
                                    .collect();
                                let values = record.values;
                                view! {
                                    <tr>
                                        {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                        <td class="row-actions">
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| {
                                                    form.fill(values.clone());
                                                    editor.set(Editor::Editing(key));
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-sm btn-danger-text"
                                                on:click=move |_| pendingDelete.set(Some(key))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </Card>

        {move || {
            let (title, submitLabel) = match editor.get() {
                Editor::Closed => return None,
                Editor::Adding => (format!("Add {}", resource.singular), "Create"),
                Editor::Editing(_) => (format!("Edit {}", resource.singular), "Update"),
            };
            Some(view! {
                <Modal title=title>
                    <form on:submit=save novalidate>
                        {resource
                            .fields
                            .iter()
                            .map(|field| {
                                view! {
                                    <TextField
                                        form=form
                                        name=field.name
                                        label=field.label
                                        input_type=input_type(field.kind)
                                    />
                                }
                            })
                            .collect_view()}
                        <div class="modal-actions">
                            <button type="button" class="btn btn-ghost" on:click=move |_| closeEditor()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">{submitLabel}</button>
                        </div>
                    </form>
                </Modal>
            })
        }}

        {move || {
            pendingDelete.get().map(|key| {
                view! {
                    <ConfirmDialog
                        title=format!(
                            "Are you sure you want to delete this {}?",
                            resource.singular.to_lowercase(),
                        )
                        message="This action cannot be undone.".to_string()
                        confirm_label="Yes, Delete".to_string()
                        on_confirm=move || {
                            table.update(|t| {
                                t.remove(key);
                            });
                            pendingDelete.set(None);
                        }
                        on_cancel=move || pendingDelete.set(None)
                    />
                }
            })
        }}
    }
}
