//! 路由服务模块
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 放行还是重定向由核心库的 [`guard`] 决定，这里只负责读写 History
//! 并驱动当前路由信号。

use distro_admin::{AppRoute, AuthState, GuardDecision, guard};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 当前浏览器路径（含查询串）
fn current_location() -> String {
    web_sys::window()
        .map(|w| w.location())
        .and_then(|loc| Some(format!("{}{}", loc.pathname().ok()?, loc.search().ok()?)))
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 读取当前 URL 中的查询参数
pub fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

/// 路由器服务
///
/// 通过注入的认证状态信号与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth_state: Signal<AuthState>,
}

impl RouterService {
    fn new(auth_state: Signal<AuthState>) -> Self {
        let location = current_location();
        let decision = guard(auth_state.get_untracked(), AppRoute::from_path(&location));
        if let GuardDecision::Redirect(route) = decision {
            replace_history_state(route.to_path());
        }
        let (current_route, set_route) = signal(decision.route());

        Self {
            current_route,
            set_route,
            auth_state,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到路径（可带查询串，如 `/distributors?action=new`）
    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), path);
    }

    pub fn navigate_to_route(&self, route: AppRoute) {
        self.apply(route, route.to_path());
    }

    /// 守卫 -> 写 History -> 更新信号
    fn apply(&self, target: AppRoute, path: &str) {
        let decision = guard(self.auth_state.get_untracked(), target);
        let path = match decision {
            GuardDecision::Allow(_) => path,
            GuardDecision::Redirect(route) => route.to_path(),
        };

        push_history_state(path);
        self.set_route.set(decision.route());
    }

    /// 浏览器后退/前进同样经过守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let auth_state = self.auth_state;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_location());
            let decision = guard(auth_state.get_untracked(), target);
            if let GuardDecision::Redirect(route) = decision {
                replace_history_state(route.to_path());
            }
            set_route.set(decision.route());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与页面同寿命
        closure.forget();
    }

    /// 认证状态变化（登录、登出、401）时重新守卫当前路由
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth_state = self.auth_state;

        Effect::new(move |_| {
            let state = auth_state.get();
            let route = current_route.get_untracked();

            if let GuardDecision::Redirect(redirect) = guard(state, route) {
                log::info!("[Router] auth state is {state:?}, leaving {route} for {redirect}");
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(auth_state: Signal<AuthState>) -> RouterService {
    let router = RouterService::new(auth_state);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证状态信号
    auth_state: Signal<AuthState>,
    children: Children,
) -> impl IntoView {
    provide_router(auth_state);

    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，点击时走路由服务而不是整页刷新
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(route);
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
