//! 新建 / 编辑分销商的模态框

mod account_section;
mod form_state;
mod personal_form;

use crate::auth::use_auth;
use crate::components::notification::use_notifier;
use account_section::AccountSection;
use distro_admin::shared::Distributor;
use form_state::FormState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use personal_form::PersonalForm;

/// `editing` 为 `None` 时新建
///
/// 保存成功后关闭并调用 `on_saved`，由列表页重新加载。
#[component]
pub fn DistributorDialog(
    open: RwSignal<bool>,
    #[prop(into)] editing: Signal<Option<Distributor>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let (saving, set_saving) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = FormState::new();

    let is_editing = Signal::derive(move || editing.with(Option::is_some));

    // 打开时按当前模式填充表单
    Effect::new(move |_| {
        if open.get() {
            match editing.get_untracked() {
                Some(distributor) => form.load(&distributor),
                None => form.reset(),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = form.to_draft();
        let target = editing.get_untracked().map(|d| d.id);
        let checked = match target {
            Some(_) => draft.validate_for_update(),
            None => draft.validate_for_create(),
        };
        if let Err(e) = checked {
            notifier.error(e.to_string());
            return;
        }

        set_saving.set(true);
        let api = auth.api();
        spawn_local(async move {
            let result = match target {
                Some(id) => api.update_distributor(id, draft).await,
                None => api.create_distributor(draft).await,
            };
            match result {
                Ok(_) => {
                    notifier.success(if target.is_some() { "Actualizado" } else { "Creado" });
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => notifier.api_error(&e, "Error al guardar"),
            }
            set_saving.set(false);
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box max-w-3xl">
                <h3 class="font-bold text-lg">
                    {move || if is_editing.get() { "Editar Distribuidor" } else { "Nuevo Distribuidor" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 pt-4">
                    <PersonalForm state=form />
                    <AccountSection state=form editing=is_editing />

                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| open.set(false)>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() {
                                view! { <span class="loading loading-spinner"></span> }.into_any()
                            } else {
                                "Guardar".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
