use crate::auth::use_auth;
use crate::components::icons::{RefreshCw, Search};
use crate::components::notification::use_notifier;
use distro_admin::listing::filter_by_query;
use distro_admin::shared::protocol::ListLeads;
use distro_admin::shared::{LEAD_STATUS_CONVERTED, Lead, LeadSummary, LeadUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

const LEAD_STATUSES: [&str; 5] = ["nuevo", "contactado", "seguimiento", "convertido", "perdido"];

fn interest_class(level: i32) -> &'static str {
    match level {
        7.. => "progress progress-success w-20",
        4..=6 => "progress progress-warning w-20",
        _ => "progress progress-error w-20",
    }
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();

    let (leads, set_leads) = signal(Vec::<Lead>::new());
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());

    let load = move || {
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_leads(ListLeads::default()).await {
                Ok(data) => set_leads.set(data),
                Err(e) => notifier.api_error(&e, "Error al cargar los leads"),
            }
            set_loading.set(false);
        });
    };

    load();

    let summary = Memo::new(move |_| leads.with(|all| LeadSummary::from_leads(all)));
    let filtered = Memo::new(move |_| leads.with(|all| search.with(|q| filter_by_query(all, q))));

    let handle_convert = move |id: i64| {
        let api = auth.api();
        spawn_local(async move {
            match api.convert_lead(id).await {
                Ok(result) => {
                    notifier.success(result.message.unwrap_or_else(|| "Lead convertido".to_string()));
                    load();
                }
                Err(e) => notifier.api_error(&e, "Error al convertir el lead"),
            }
        });
    };

    let handle_status = move |id: i64, status: String| {
        let api = auth.api();
        let changes = LeadUpdate {
            status: Some(status),
            ..Default::default()
        };
        spawn_local(async move {
            match api.update_lead(id, changes).await {
                Ok(_) => {
                    notifier.success("Lead actualizado");
                    load();
                }
                Err(e) => notifier.api_error(&e, "Error al actualizar el lead"),
            }
        });
    };

    let card = move |label: &'static str, class: &'static str, value: fn(&LeadSummary) -> usize| {
        view! {
            <div class="stat">
                <div class="stat-title">{label}</div>
                <div class=format!("stat-value {class}")>{move || summary.with(value)}</div>
            </div>
        }
    };

    view! {
        <div class="flex justify-between gap-4">
            <h1 class="text-3xl font-bold">"Leads"</h1>
            <button on:click=move |_| load() disabled=move || loading.get() class="btn btn-ghost btn-circle">
                <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
            </button>
        </div>

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            {card("Total Leads", "text-info", |s| s.total)}
            {card("Nuevos", "text-success", |s| s.new)}
            {card("Alto Interés", "text-warning", |s| s.high_interest)}
            {card("Convertidos", "text-secondary", |s| s.converted)}
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="p-6 pb-2">
                    <label class="input input-bordered flex items-center gap-2">
                        <Search attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Buscar por teléfono, nombre, email o perfil"
                            on:input=move |ev| search.set(event_target_value(&ev))
                            prop:value=move || search.get()
                        />
                    </label>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Contacto"</th>
                                <th class="hidden md:table-cell">"Email"</th>
                                <th class="hidden md:table-cell">"Perfil"</th>
                                <th>"Interés"</th>
                                <th>"Estado"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || filtered.with(Vec::is_empty) && !loading.get()>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        "No se encontraron leads"
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || filtered.get()
                                key=|l| (l.id, l.status.clone(), l.interest_level)
                                children=move |lead| {
                                    let id = lead.id;
                                    let status = lead.status.clone().unwrap_or_default();
                                    let converted = status == LEAD_STATUS_CONVERTED;
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-medium">
                                                    {lead.user_name.clone().unwrap_or_else(|| "Sin nombre".to_string())}
                                                </div>
                                                <div class="text-xs font-mono opacity-60">{lead.phone_number.clone()}</div>
                                            </td>
                                            <td class="hidden md:table-cell">{lead.email.clone().unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell">{lead.profile_type.clone().unwrap_or_default()}</td>
                                            <td>
                                                <div class="flex items-center gap-2">
                                                    <progress
                                                        class=interest_class(lead.interest_level)
                                                        value=lead.interest_level.to_string()
                                                        max="10"
                                                    ></progress>
                                                    <span class="text-sm">{lead.interest_level} "/10"</span>
                                                </div>
                                            </td>
                                            <td>
                                                <select
                                                    class="select select-bordered select-sm"
                                                    on:change=move |ev| handle_status(id, event_target_value(&ev))
                                                >
                                                    {LEAD_STATUSES
                                                        .into_iter()
                                                        .map(|s| view! { <option value=s selected={status == s}>{s}</option> })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-sm btn-primary"
                                                    disabled=converted
                                                    on:click=move |_| handle_convert(id)
                                                >
                                                    "Convertir"
                                                </button>
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
    }
}
