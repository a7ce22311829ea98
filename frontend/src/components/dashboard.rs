use crate::auth::use_auth;
use crate::components::icons::{MessageSquare, Plus, RefreshCw, Target, Users};
use crate::components::notification::use_notifier;
use crate::web::router::use_router;
use distro_admin::dashboard::{ChartPoint, DashboardOverview, load_overview};
use distro_admin::shared::Conversation;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 横向条形图，宽度按最大值归一化
fn bar_list(points: Vec<ChartPoint>, empty: &'static str) -> AnyView {
    if points.is_empty() {
        return view! { <p class="text-base-content/50 text-sm py-4">{empty}</p> }.into_any();
    }
    let max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1);
    points
        .into_iter()
        .map(|point| {
            let percent = point.value * 100 / max;
            view! {
                <div class="space-y-1">
                    <div class="flex justify-between text-sm">
                        <span>{point.name}</span>
                        <span class="font-semibold">{point.value}</span>
                    </div>
                    <progress class="progress progress-primary w-full" value=percent.to_string() max="100"></progress>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn conversation_row(conversation: Conversation) -> impl IntoView {
    let last = conversation
        .last_interaction
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    view! {
        <li class="flex items-center justify-between py-2">
            <div>
                <div class="font-medium">
                    {conversation.user_name.unwrap_or_else(|| "Sin nombre".to_string())}
                </div>
                <div class="text-xs font-mono text-base-content/60">{conversation.phone_number}</div>
            </div>
            <div class="text-right">
                <div class="badge badge-ghost">{conversation.profile_type.unwrap_or_default()}</div>
                <div class="text-xs text-base-content/50">{last}</div>
            </div>
        </li>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notifier = use_notifier();

    let (overview, set_overview) = signal(DashboardOverview::default());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            match load_overview(&api).await {
                Ok(data) => {
                    if !data.is_complete() {
                        log::warn!("dashboard loaded without: {:?}", data.degraded);
                    }
                    set_overview.set(data);
                }
                Err(e) => notifier.api_error(&e, "Error al cargar el dashboard"),
            }
            set_loading.set(false);
        });
    };

    load();

    let stat = move |f: fn(&DashboardOverview) -> u64| move || overview.with(f);

    view! {
        <div class="flex flex-col sm:flex-row justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"Mi Dashboard"</h1>
                <p class="text-base-content/70 text-sm">"Resumen de actividad y métricas"</p>
            </div>
            <div class="flex gap-2">
                <button class="btn btn-primary gap-2" on:click=move |_| router.navigate("/distributors?action=new")>
                    <Plus attr:class="h-4 w-4" />
                    "Nuevo Distribuidor"
                </button>
                <button class="btn btn-ghost btn-circle" on:click=move |_| load() disabled=move || loading.get()>
                    <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>
        </div>

        <Show when=move || overview.with(|o| !o.is_complete())>
            <div role="alert" class="alert alert-warning text-sm">
                "Algunas secciones no se pudieron cargar y se muestran vacías."
            </div>
        </Show>

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <div class="stat">
                <div class="stat-figure text-info"><MessageSquare attr:class="h-8 w-8" /></div>
                <div class="stat-title">"Total Conversaciones"</div>
                <div class="stat-value text-info">{stat(|o| o.stats.total_conversations)}</div>
            </div>
            <div class="stat">
                <div class="stat-figure text-success"><Users attr:class="h-8 w-8" /></div>
                <div class="stat-title">"Distribuidores"</div>
                <div class="stat-value text-success">{stat(|o| o.stats.total_distributors)}</div>
                <div class="stat-desc">{stat(|o| o.stats.active_distributors)} " activos"</div>
            </div>
            <div class="stat">
                <div class="stat-figure text-warning"><Target attr:class="h-8 w-8" /></div>
                <div class="stat-title">"Total Leads"</div>
                <div class="stat-value text-warning">{stat(|o| o.stats.total_leads)}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Alto Interés"</div>
                <div class="stat-value text-secondary">{stat(|o| o.stats.high_interest_leads)}</div>
            </div>
        </div>

        <div class="grid gap-6 lg:grid-cols-3">
            <div class="card bg-base-100 shadow-xl lg:col-span-2">
                <div class="card-body">
                    <h3 class="card-title">"Flujo de actividad"</h3>
                    {move || {
                        let points = overview.with(|o| {
                            o.activity
                                .iter()
                                .map(|p| ChartPoint { name: p.month.clone(), value: p.value })
                                .collect::<Vec<_>>()
                        });
                        bar_list(points, "Sin actividad registrada")
                    }}
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Distribuidores por nivel"</h3>
                    {move || bar_list(overview.with(|o| o.distributors_by_level.clone()), "Sin distribuidores")}
                </div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Conversaciones recientes"</h3>
                <Show
                    when=move || overview.with(|o| !o.recent_conversations.is_empty())
                    fallback=|| view! { <p class="text-base-content/50 text-sm py-4">"No hay conversaciones"</p> }
                >
                    <ul class="divide-y divide-base-200">
                        {move || {
                            overview
                                .with(|o| o.recent_conversations.clone())
                                .into_iter()
                                .map(conversation_row)
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </div>
    }
}
