use crate::auth::use_auth;
use crate::components::distributor_dialog::DistributorDialog;
use crate::components::icons::{MoreHorizontal, Pencil, Plus, RefreshCw, Search, Trash2};
use crate::components::notification::use_notifier;
use crate::web::confirm;
use crate::web::router::query_param;
use distro_admin::shared::protocol::ListDistributors;
use distro_admin::shared::{Distributor, DistributorLevel, DistributorStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_badge(status: DistributorStatus) -> &'static str {
    match status {
        DistributorStatus::Active => "badge badge-success",
        DistributorStatus::Suspended => "badge badge-warning",
        DistributorStatus::Deleted => "badge badge-error",
        DistributorStatus::Inactive => "badge badge-ghost",
    }
}

fn initials(d: &Distributor) -> String {
    let initials: String = [&d.first_names, &d.last_names]
        .into_iter()
        .filter_map(|name| name.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() { "?".to_string() } else { initials }
}

#[component]
pub fn DistributorsPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();

    let (distributors, set_distributors) = signal(Vec::<Distributor>::new());
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(Option::<DistributorStatus>::None);
    let level_filter = RwSignal::new(Option::<DistributorLevel>::None);

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Distributor>::None);

    let load = move || {
        let query = ListDistributors {
            search: Some(search.get_untracked()),
            status: status_filter.get_untracked(),
            level: level_filter.get_untracked(),
            ..Default::default()
        };
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_distributors(query).await {
                Ok(data) => set_distributors.set(data),
                Err(e) => notifier.api_error(&e, "Error al cargar"),
            }
            set_loading.set(false);
        });
    };

    // 过滤条件变化时重新查询
    Effect::new(move |_| {
        search.track();
        status_filter.track();
        level_filter.track();
        load();
    });

    let open_dialog = move |distributor: Option<Distributor>| {
        editing.set(distributor);
        dialog_open.set(true);
    };

    // 从控制面板的"新建"按钮进入
    if query_param("action").as_deref() == Some("new") {
        open_dialog(None);
    }

    let handle_delete = move |id: i64| {
        if !confirm("¿Eliminar?") {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            match api.delete_distributor(id).await {
                Ok(_) => {
                    notifier.success("Eliminado");
                    load();
                }
                Err(e) => notifier.api_error(&e, "Error"),
            }
        });
    };

    let handle_toggle = move |id: i64, status: DistributorStatus| {
        let api = auth.api();
        spawn_local(async move {
            let result = if status == DistributorStatus::Active {
                api.suspend_distributor(id).await.map(|_| "Suspendido")
            } else {
                api.activate_distributor(id).await.map(|_| "Activado")
            };
            match result {
                Ok(message) => {
                    notifier.success(message);
                    load();
                }
                Err(e) => notifier.api_error(&e, "Error"),
            }
        });
    };

    view! {
        <div class="flex flex-col sm:flex-row justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"Distribuidores"</h1>
                <p class="text-base-content/70 text-sm">
                    {move || distributors.with(Vec::len)} " registrados"
                </p>
            </div>
            <button class="btn btn-primary gap-2" on:click=move |_| open_dialog(None)>
                <Plus attr:class="h-4 w-4" />
                "Nuevo Distribuidor"
            </button>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-col md:flex-row gap-3 p-6 pb-2">
                    <label class="input input-bordered flex items-center gap-2 flex-1">
                        <Search attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Buscar por nombre, teléfono o usuario"
                            on:input=move |ev| search.set(event_target_value(&ev))
                            prop:value=move || search.get()
                        />
                    </label>
                    <select
                        class="select select-bordered"
                        on:change=move |ev| status_filter.set(DistributorStatus::parse(&event_target_value(&ev)))
                    >
                        <option value="">"Todos los estados"</option>
                        {DistributorStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="select select-bordered"
                        on:change=move |ev| level_filter.set(DistributorLevel::parse(&event_target_value(&ev)))
                    >
                        <option value="">"Todos los niveles"</option>
                        {DistributorLevel::ALL
                            .into_iter()
                            .map(|l| view! { <option value=l.as_str()>{l.as_str()}</option> })
                            .collect_view()}
                    </select>
                    <button on:click=move |_| load() disabled=move || loading.get() class="btn btn-ghost btn-circle">
                        <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Distribuidor"</th>
                                <th class="hidden md:table-cell">"Teléfono"</th>
                                <th class="hidden md:table-cell">"Usuario"</th>
                                <th>"Nivel"</th>
                                <th>"Estado"</th>
                                <th class="hidden lg:table-cell">"F. Ingreso"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || distributors.with(Vec::is_empty) && !loading.get()>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "No hay distribuidores"
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || distributors.get()
                                key=|d| (d.id, d.status, d.updated_at)
                                children=move |d| {
                                    let id = d.id;
                                    let status = d.status;
                                    let row = d.clone();
                                    let toggle_label = if status == DistributorStatus::Active { "Suspender" } else { "Activar" };
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <div class="avatar placeholder">
                                                        <div class="bg-neutral text-neutral-content rounded-full w-9">
                                                            <span class="text-xs">{initials(&d)}</span>
                                                        </div>
                                                    </div>
                                                    <div>
                                                        <div class="font-bold">{d.display_name()}</div>
                                                        <div class="text-xs opacity-60">{d.email.clone().unwrap_or_default()}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td class="hidden md:table-cell font-mono text-sm">{d.phone.clone()}</td>
                                            <td class="hidden md:table-cell">{d.username.clone()}</td>
                                            <td><div class="badge badge-outline">{d.level.as_str()}</div></td>
                                            <td><div class=status_badge(status)>{status.as_str()}</div></td>
                                            <td class="hidden lg:table-cell">{d.joined_on.format("%d/%m/%Y").to_string()}</td>
                                            <td>
                                                <div class="dropdown dropdown-end">
                                                    <div tabindex="0" role="button" class="btn btn-ghost btn-sm btn-square">
                                                        <MoreHorizontal attr:class="h-4 w-4" />
                                                    </div>
                                                    <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                                                        <li>
                                                            <a on:click=move |_| open_dialog(Some(row.clone()))>
                                                                <Pencil attr:class="mr-2 h-4 w-4" />
                                                                "Editar"
                                                            </a>
                                                        </li>
                                                        <li>
                                                            <a on:click=move |_| handle_toggle(id, status)>{toggle_label}</a>
                                                        </li>
                                                        <li>
                                                            <a on:click=move |_| handle_delete(id) class="text-error hover:bg-error/10">
                                                                <Trash2 attr:class="mr-2 h-4 w-4" />
                                                                "Eliminar"
                                                            </a>
                                                        </li>
                                                    </ul>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <DistributorDialog open=dialog_open editing=editing on_saved=move |()| load() />
    }
}
