use crate::auth::use_auth;
use crate::components::icons::{RefreshCw, Search};
use crate::components::notification::use_notifier;
use distro_admin::listing::filter_by_query;
use distro_admin::shared::protocol::ListConversations;
use distro_admin::shared::{Conversation, Message};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_badge(status: Option<&str>) -> &'static str {
    match status {
        Some("nuevo") => "badge badge-info",
        Some("activo") => "badge badge-success",
        Some("seguimiento") => "badge badge-warning",
        _ => "badge badge-ghost",
    }
}

fn format_time(time: Option<chrono::NaiveDateTime>) -> String {
    time.map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// 会话消息记录
#[component]
fn MessagesDialog(selected: RwSignal<Option<Conversation>>) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let (messages, set_messages) = signal(Vec::<Message>::new());
    let (loading, set_loading) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let Some(id) = selected.with(|s| s.as_ref().map(|c| c.id)) else {
            if let Some(dialog) = dialog_ref.get_untracked() {
                dialog.close();
            }
            return;
        };

        if let Some(dialog) = dialog_ref.get_untracked() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }

        let api = auth.api();
        set_messages.set(Vec::new());
        set_loading.set(true);
        spawn_local(async move {
            match api.get_messages(id).await {
                Ok(data) => set_messages.set(data),
                Err(e) => notifier.api_error(&e, "Error al cargar los mensajes"),
            }
            set_loading.set(false);
        });
    });

    let title = move || {
        selected.with(|s| {
            s.as_ref()
                .map(|c| c.user_name.clone().unwrap_or_else(|| c.phone_number.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| selected.set(None)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>
                <div class="py-4 space-y-2 max-h-[60vh] overflow-y-auto">
                    <Show when=move || loading.get()>
                        <span class="loading loading-spinner loading-md"></span>
                    </Show>
                    <For
                        each=move || messages.get()
                        key=|m| m.id
                        children=move |m| {
                            let side = if m.role == "user" { "chat chat-start" } else { "chat chat-end" };
                            view! {
                                <div class=side>
                                    <div class="chat-header text-xs opacity-60">{format_time(m.timestamp)}</div>
                                    <div class="chat-bubble whitespace-pre-wrap">{m.content}</div>
                                </div>
                            }
                        }
                    />
                </div>
                <div class="modal-action">
                    <button class="btn" on:click=move |_| selected.set(None)>"Cerrar"</button>
                </div>
            </div>
        </dialog>
    }
}

#[component]
pub fn ConversationsPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();

    let (conversations, set_conversations) = signal(Vec::<Conversation>::new());
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(Option::<Conversation>::None);

    let load = move || {
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_conversations(ListConversations::default()).await {
                Ok(data) => set_conversations.set(data),
                Err(e) => notifier.api_error(&e, "Error al cargar las conversaciones"),
            }
            set_loading.set(false);
        });
    };

    load();

    let filtered = Memo::new(move |_| {
        conversations.with(|all| search.with(|q| filter_by_query(all, q)))
    });

    view! {
        <div class="flex flex-col sm:flex-row justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"Conversaciones"</h1>
                <div class="badge badge-neutral mt-1">
                    "Total: " {move || filtered.with(Vec::len)}
                </div>
            </div>
            <button on:click=move |_| load() disabled=move || loading.get() class="btn btn-ghost btn-circle">
                <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
            </button>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="p-6 pb-2">
                    <label class="input input-bordered flex items-center gap-2">
                        <Search attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Buscar por teléfono, nombre o perfil"
                            on:input=move |ev| search.set(event_target_value(&ev))
                            prop:value=move || search.get()
                        />
                    </label>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th class="hidden md:table-cell">"ID"</th>
                                <th>"Usuario"</th>
                                <th>"Teléfono"</th>
                                <th class="hidden md:table-cell">"Perfil"</th>
                                <th>"Estado"</th>
                                <th class="hidden md:table-cell">"Mensajes"</th>
                                <th class="hidden lg:table-cell">"Última Interacción"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || filtered.with(Vec::is_empty) && !loading.get()>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "No se encontraron conversaciones"
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || filtered.get()
                                key=|c| c.id
                                children=move |c| {
                                    let row = c.clone();
                                    view! {
                                        <tr class="hover cursor-pointer" on:click=move |_| selected.set(Some(row.clone()))>
                                            <td class="hidden md:table-cell">{c.id}</td>
                                            <td class="font-medium">
                                                {c.user_name.clone().unwrap_or_else(|| "Sin nombre".to_string())}
                                            </td>
                                            <td class="font-mono text-sm">{c.phone_number.clone()}</td>
                                            <td class="hidden md:table-cell">{c.profile_type.clone().unwrap_or_default()}</td>
                                            <td>
                                                <div class=status_badge(c.status.as_deref())>
                                                    {c.status.clone().unwrap_or_default()}
                                                </div>
                                            </td>
                                            <td class="hidden md:table-cell">{c.messages_count.unwrap_or(0)}</td>
                                            <td class="hidden lg:table-cell text-sm">{format_time(c.last_interaction)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <MessagesDialog selected=selected />
    }
}
