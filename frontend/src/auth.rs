//! 认证模块
//!
//! 持有共享的 API 客户端，并把会话暴露为信号。
//! 路由服务只读取派生的 [`AuthState`] 信号，不依赖本模块的其它部分。

use crate::web::{BrowserStorage, FetchTransport};
use distro_admin::shared::UserProfile;
use distro_admin::{
    AdminApi, ApiClient, ApiResult, AuthService, AuthState, ClientConfig, Session, SessionStore,
};
use leptos::prelude::*;
use std::sync::Arc;

/// 认证上下文
///
/// `Copy`，可以直接移入事件闭包。
#[derive(Clone, Copy)]
pub struct AuthContext {
    service: StoredValue<AuthService>,
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// 用浏览器传输和 LocalStorage 构建客户端，并恢复上次的会话
    pub fn new(config: ClientConfig) -> Self {
        let client = ApiClient::new(
            config,
            Arc::new(FetchTransport),
            SessionStore::new(Arc::new(BrowserStorage)),
        );
        let service = AuthService::new(AdminApi::new(client));
        let session = RwSignal::new(service.current());

        // 任意已认证请求收到 401 时，客户端已清除存储，这里同步信号
        service.api().client().on_unauthorized(move || {
            log::warn!("session rejected by the API, signing out");
            session.set(None);
        });

        Self {
            service: StoredValue::new(service),
            session,
        }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn auth_state_signal(&self) -> Signal<AuthState> {
        let session = self.session;
        Signal::derive(move || session.with(|s| AuthState::from_session(s.as_ref())))
    }

    pub fn api(&self) -> AdminApi {
        self.service.with_value(|service| service.api().clone())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.session.with(|s| s.as_ref().map(|s| s.profile.clone()))
    }

    /// 登录成功后会话信号更新，路由服务随之离开登录页
    pub async fn login(&self, username: String, password: String) -> ApiResult<()> {
        let service = self.service.get_value();
        let session = service.login(&username, &password).await?;
        self.session.set(Some(session));
        Ok(())
    }

    /// 注销；导航由路由服务监听认证状态自动完成
    pub fn logout(&self) {
        self.service.with_value(AuthService::logout);
        self.session.set(None);
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
