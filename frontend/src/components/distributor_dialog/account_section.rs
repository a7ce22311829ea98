//! 账户设置：用户名、等级、状态和密码
//!
//! 编辑时密码可以留空，表示不修改。

use distro_admin::shared::{DistributorLevel, DistributorStatus};
use leptos::prelude::*;

use super::form_state::FormState;

#[component]
pub fn AccountSection(
    state: FormState,
    /// 是否在编辑已有分销商
    #[prop(into)]
    editing: Signal<bool>,
) -> impl IntoView {
    let password_hint = move || {
        if editing.get() {
            "Dejar vacío para no cambiar"
        } else {
            "Mínimo 6 caracteres"
        }
    };

    view! {
        <div class="divider text-sm">"Cuenta"</div>
        <div class="grid grid-cols-3 gap-4">
            <div class="form-control">
                <label for="usuario" class="label">
                    <span class="label-text">"Usuario"</span>
                </label>
                <input
                    id="usuario"
                    type="text"
                    required
                    on:input=move |ev| state.username.set(event_target_value(&ev))
                    prop:value=move || state.username.get()
                    class="input input-bordered w-full"
                />
            </div>
            <div class="form-control">
                <label for="nivel" class="label">
                    <span class="label-text">"Nivel"</span>
                </label>
                <select
                    id="nivel"
                    class="select select-bordered w-full"
                    on:change=move |ev| {
                        if let Some(level) = DistributorLevel::parse(&event_target_value(&ev)) {
                            state.level.set(level);
                        }
                    }
                    prop:value=move || state.level.get().as_str()
                >
                    {DistributorLevel::ALL
                        .into_iter()
                        .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-control">
                <label for="estado" class="label">
                    <span class="label-text">"Estado"</span>
                </label>
                <select
                    id="estado"
                    class="select select-bordered w-full"
                    on:change=move |ev| {
                        if let Some(status) = DistributorStatus::parse(&event_target_value(&ev)) {
                            state.status.set(status);
                        }
                    }
                    prop:value=move || state.status.get().as_str()
                >
                    {DistributorStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label for="contrasena" class="label">
                    <span class="label-text">"Contraseña"</span>
                    <span class="label-text-alt">{password_hint}</span>
                </label>
                <input
                    id="contrasena"
                    type="password"
                    autocomplete="new-password"
                    on:input=move |ev| state.password.set(event_target_value(&ev))
                    prop:value=move || state.password.get()
                    class="input input-bordered w-full"
                />
            </div>
            <div class="form-control">
                <label for="contrasena_doble_factor" class="label">
                    <span class="label-text">"Contraseña doble factor"</span>
                    <span class="label-text-alt">"Opcional"</span>
                </label>
                <input
                    id="contrasena_doble_factor"
                    type="password"
                    autocomplete="new-password"
                    on:input=move |ev| state.second_factor_password.set(event_target_value(&ev))
                    prop:value=move || state.second_factor_password.get()
                    class="input input-bordered w-full"
                />
            </div>
        </div>
    }
}
