//! 已认证页面的外壳：侧边栏导航、页眉和用户菜单

use crate::auth::use_auth;
use crate::components::icons::{LayoutDashboard, LogOut, MessageSquare, Package, Target, Users};
use crate::web::router::{Link, use_router};
use distro_admin::AppRoute;
use leptos::prelude::*;

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Distributors => view! { <Users attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Conversations => view! { <MessageSquare attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Leads => view! { <Target attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Inventory => view! { <Package attr:class="h-5 w-5" /> }.into_any(),
        _ => view! { <LayoutDashboard attr:class="h-5 w-5" /> }.into_any(),
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();

    let display_name = move || {
        auth.profile()
            .map(|p| p.display_name().to_string())
            .unwrap_or_default()
    };
    let initials = move || auth.profile().map(|p| p.initials()).unwrap_or_default();
    let role = move || auth.profile().and_then(|p| p.role).unwrap_or_default();

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200 font-sans">
            <input id="main-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow-sm px-4">
                    <div class="flex-none lg:hidden">
                        <label for="main-drawer" class="btn btn-square btn-ghost">"☰"</label>
                    </div>
                    <div class="flex-1">
                        <h2 class="text-xl font-semibold">{move || current.get().title()}</h2>
                    </div>
                    <div class="flex-none gap-3">
                        <div class="hidden md:flex flex-col items-end leading-tight">
                            <span class="font-medium">{display_name}</span>
                            <span class="text-xs text-base-content/60">{role}</span>
                        </div>
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="avatar placeholder">
                                <div class="bg-primary text-primary-content rounded-full w-10">
                                    <span>{initials}</span>
                                </div>
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-52">
                                <li>
                                    <a on:click=move |_| auth.logout() class="text-error">
                                        <LogOut attr:class="h-4 w-4" />
                                        "Cerrar Sesión"
                                    </a>
                                </li>
                            </ul>
                        </div>
                    </div>
                </div>

                <main class="p-4 md:p-8">
                    <div class="max-w-7xl mx-auto space-y-6">{children()}</div>
                </main>
            </div>

            <div class="drawer-side z-40">
                <label for="main-drawer" class="drawer-overlay"></label>
                <aside class="bg-base-100 w-64 min-h-full">
                    <div class="p-6 text-2xl font-bold text-primary">"Distribuidores"</div>
                    <ul class="menu p-4 gap-1">
                        {AppRoute::NAVIGATION
                            .into_iter()
                            .map(|route| {
                                let class = Signal::derive(move || {
                                    if current.get() == route {
                                        "active".to_string()
                                    } else {
                                        String::new()
                                    }
                                });
                                view! {
                                    <li>
                                        <Link route=route class=class>
                                            {nav_icon(route)}
                                            {route.title()}
                                        </Link>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>
            </div>
        </div>
    }
}
