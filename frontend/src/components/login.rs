use crate::auth::use_auth;
use crate::components::icons::ShieldCheck;
use distro_admin::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 401 是凭据错误；其余失败显示后端给出的说明或通用提示
fn login_failure_message(err: &ApiError) -> String {
    match err.status_code() {
        Some(401) => "Credenciales inválidas".to_string(),
        _ => err.user_message("Error de conexión, intenta de nuevo"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Completa usuario y contraseña".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        // 成功后路由服务会因认证状态变化离开登录页
        spawn_local(async move {
            if let Err(e) = auth.login(username.get_untracked(), password.get_untracked()).await {
                log::warn!("login failed: {e}");
                set_error_msg.set(Some(login_failure_message(&e)));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Panel de Distribuidores"</h1>
                        <p class="text-base-content/70">"Inicia sesión para continuar"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Usuario"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered join-item flex-1"
                                    required
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Ocultar" } else { "Ver" }}
                                </button>
                            </div>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                } else {
                                    "Iniciar sesión".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejected_credentials_read_as_invalid() {
        let rejected = ApiError::from_status(401, r#"{"detail": "Incorrect username or password"}"#);
        assert_eq!(login_failure_message(&rejected), "Credenciales inválidas");

        let offline = ApiError::Network("connection refused".into());
        assert_eq!(login_failure_message(&offline), "Error de conexión, intenta de nuevo");

        let crashed = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(login_failure_message(&crashed), "Error de conexión, intenta de nuevo");

        let invalid = ApiError::from_status(422, r#"{"detail": "Usuario inactivo"}"#);
        assert_eq!(login_failure_message(&invalid), "Usuario inactivo");
    }
}
