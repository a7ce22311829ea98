//! 分销商管理后台前端
//!
//! 采用 Context-Driven 架构：
//! - `web::router`: 路由服务，认证守卫逻辑来自 `distro_admin::guard`
//! - `auth`: 会话信号与共享的 API 客户端
//! - `components`: 页面与 UI 组件

mod auth;
mod config;
mod components {
    pub mod conversations;
    pub mod dashboard;
    pub mod distributor_dialog;
    pub mod distributors;
    pub mod icons;
    pub mod inventory;
    pub mod layout;
    pub mod leads;
    pub mod login;
    pub mod notification;
}

use crate::auth::AuthContext;
use crate::components::conversations::ConversationsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::distributors::DistributorsPage;
use crate::components::inventory::InventoryPage;
use crate::components::layout::Layout;
use crate::components::leads::LeadsPage;
use crate::components::login::LoginPage;
use crate::components::notification::{NotificationToast, provide_notifier};
use distro_admin::AppRoute;

use leptos::prelude::*;

// 浏览器 API 封装：fetch 传输、LocalStorage 会话存储和 History 路由
pub(crate) mod web {
    mod http;
    mod prompt;
    pub mod router;
    mod storage;

    pub use http::FetchTransport;
    pub use prompt::confirm;
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 除登录页外的页面都包在 [`Layout`] 中。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Distributors => view! { <DistributorsPage /> }.into_any(),
        AppRoute::Conversations => view! { <ConversationsPage /> }.into_any(),
        AppRoute::Leads => view! { <LeadsPage /> }.into_any(),
        AppRoute::Inventory => view! { <InventoryPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="text-center py-20">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Página no encontrada"</p>
            </div>
        }
        .into_any(),
    };
    view! { <Layout>{page}</Layout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（恢复 LocalStorage 中的会话）
    let auth_ctx = AuthContext::new(config::load());
    provide_context(auth_ctx);

    // 2. 全局提示
    provide_notifier();

    // 3. 认证状态信号注入路由服务
    let auth_state = auth_ctx.auth_state_signal();

    view! {
        <Router auth_state=auth_state>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <NotificationToast />
    }
}
