//! 销售员、产品、库存分配和销售的新建 / 编辑对话框

use super::form::InventoryForm;
use crate::auth::use_auth;
use crate::components::notification::use_notifier;
use distro_admin::AdminApi;
use distro_admin::shared::{Product, Sale, Seller};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogKind {
    Seller(Option<Seller>),
    Product(Option<Product>),
    Stock,
    Sale(Option<Sale>),
}

impl DialogKind {
    fn title(&self) -> &'static str {
        match self {
            Self::Seller(None) => "Nuevo Vendedor",
            Self::Seller(Some(_)) => "Editar Vendedor",
            Self::Product(None) => "Nuevo Producto",
            Self::Product(Some(_)) => "Editar Producto",
            Self::Stock => "Asignar Stock",
            Self::Sale(None) => "Registrar Venta",
            Self::Sale(Some(_)) => "Editar Venta",
        }
    }

    fn fill(&self, form: &InventoryForm) {
        match self {
            Self::Seller(Some(seller)) => form.fill_seller(seller),
            Self::Product(Some(product)) => form.fill_product(product),
            Self::Sale(Some(sale)) => form.fill_sale(sale),
            _ => form.reset(),
        }
    }
}

/// 校验并提交，返回成功提示
async fn submit(api: AdminApi, kind: DialogKind, form: InventoryForm) -> Result<&'static str, String> {
    let saved = match kind {
        DialogKind::Seller(None) => api.create_seller(form.seller_draft()).await.map(|_| "Vendedor creado"),
        DialogKind::Seller(Some(s)) => api
            .update_seller(s.id, form.seller_draft())
            .await
            .map(|_| "Vendedor actualizado"),
        DialogKind::Product(existing) => {
            let draft = form.product_draft()?;
            match existing {
                Some(p) => api.update_product(p.id, draft).await.map(|_| "Producto actualizado"),
                None => api.create_product(draft).await.map(|_| "Producto creado"),
            }
        }
        DialogKind::Stock => api.assign_stock(form.assignment()?).await.map(|_| "Stock asignado"),
        DialogKind::Sale(None) => api.create_sale(form.sale_draft()?).await.map(|_| "Venta registrada"),
        DialogKind::Sale(Some(s)) => api
            .update_sale(s.id, form.sale_update()?)
            .await
            .map(|_| "Venta actualizada"),
    };

    saved.map_err(|e| {
        log::error!("inventory save failed: {e}");
        if e.is_unauthorized() {
            String::new()
        } else {
            e.user_message("Error al guardar")
        }
    })
}

#[component]
fn Field(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

/// `options` 为 (id, 显示名称)
#[component]
fn Picker(
    label: &'static str,
    value: RwSignal<String>,
    options: Signal<Vec<(i64, String)>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="">"Seleccionar..."</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn InventoryDialog(
    kind: RwSignal<Option<DialogKind>>,
    #[prop(into)] sellers: Signal<Vec<Seller>>,
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let (saving, set_saving) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = InventoryForm::new();

    Effect::new(move |_| {
        let current = kind.get();
        if let Some(kind) = current.as_ref() {
            kind.fill(&form);
        }
        if let Some(dialog) = dialog_ref.get_untracked() {
            if current.is_some() {
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
        let Some(current) = kind.get_untracked() else {
            return;
        };
        let api = auth.api();
        set_saving.set(true);
        spawn_local(async move {
            match submit(api, current, form).await {
                Ok(message) => {
                    notifier.success(message);
                    kind.set(None);
                    on_saved.run(());
                }
                Err(message) if !message.is_empty() => notifier.error(message),
                Err(_) => {}
            }
            set_saving.set(false);
        });
    };

    let seller_options = Signal::derive(move || {
        sellers.with(|all| all.iter().map(|s| (s.id, s.name.clone())).collect::<Vec<_>>())
    });
    let product_options = Signal::derive(move || {
        products.with(|all| {
            all.iter()
                .map(|p| (p.id, format!("{} ({})", p.name, p.code)))
                .collect::<Vec<_>>()
        })
    });

    let is = move |f: fn(&DialogKind) -> bool| move || kind.with(|k| k.as_ref().is_some_and(f));
    let is_seller = is(|k| matches!(k, DialogKind::Seller(_)));
    let is_product = is(|k| matches!(k, DialogKind::Product(_)));
    let is_catalog = is(|k| matches!(k, DialogKind::Seller(_) | DialogKind::Product(_)));
    let is_ledger = is(|k| matches!(k, DialogKind::Stock | DialogKind::Sale(_)));
    let is_sale = is(|k| matches!(k, DialogKind::Sale(_)));
    let is_editing_sale = is(|k| matches!(k, DialogKind::Sale(Some(_))));

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| kind.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || kind.with(|k| k.as_ref().map(DialogKind::title).unwrap_or_default())}
                </h3>

                <form on:submit=on_submit class="space-y-3 pt-4">
                    <Show when=is_seller>
                        <Field label="Nombre" value=form.name />
                        <Field label="Teléfono" value=form.phone input_type="tel" />
                        <Field label="Email" value=form.email input_type="email" />
                        <Field label="Dirección" value=form.address />
                        <Field label="Ciudad" value=form.city />
                    </Show>
                    <Show when=is_product>
                        <Field label="Nombre" value=form.name />
                        <Field label="Código" value=form.code />
                        <Field label="Precio Unitario" value=form.price />
                        <Field label="Categoría" value=form.category />
                        <Field label="Descripción" value=form.description />
                    </Show>
                    <Show when=is_catalog>
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="toggle toggle-success"
                                prop:checked=move || form.active.get()
                                on:change=move |ev| form.active.set(event_target_checked(&ev))
                            />
                            <span class="label-text">"Activo"</span>
                        </label>
                    </Show>
                    <Show when=move || is_ledger() && !is_editing_sale()>
                        <Picker label="Vendedor" value=form.seller_id options=seller_options />
                        <Picker label="Producto" value=form.product_id options=product_options />
                    </Show>
                    <Show when=is_ledger>
                        <Field label="Cantidad" value=form.quantity input_type="number" />
                    </Show>
                    <Show when=is_sale>
                        <Field label="Precio de Venta" value=form.price />
                        <Field label="Notas" value=form.notes />
                    </Show>

                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| kind.set(None)>"Cancelar"</button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            "Guardar"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
