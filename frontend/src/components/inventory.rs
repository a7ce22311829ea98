//! 库存管理页：销售员、产品、库存和销售四个标签页

mod dialog;
mod form;

use crate::auth::use_auth;
use crate::components::icons::{Pencil, Plus, RefreshCw, Search, Trash2};
use crate::components::notification::use_notifier;
use crate::web::confirm;
use dialog::{DialogKind, InventoryDialog};
use distro_admin::listing::{DEFAULT_ROWS_PER_PAGE, clamp_page, page_count, paginate};
use distro_admin::shared::protocol::{CatalogFilter, LedgerFilter, Paging};
use distro_admin::shared::{
    Amount, InventoryStats, Product, RecordStatus, Sale, Seller, StockEntry,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

const FETCH_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Sellers,
    Products,
    Stock,
    Sales,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Sellers, Tab::Products, Tab::Stock, Tab::Sales];

    fn label(self) -> &'static str {
        match self {
            Tab::Sellers => "Vendedores",
            Tab::Products => "Productos",
            Tab::Stock => "Stock",
            Tab::Sales => "Ventas",
        }
    }
}

fn record_badge(status: RecordStatus) -> impl IntoView {
    let (class, label) = match status {
        RecordStatus::Active => ("badge badge-success", "activo"),
        RecordStatus::Inactive => ("badge badge-ghost", "inactivo"),
    };
    view! { <div class=class>{label}</div> }
}

fn seller_name(seller: Option<&Seller>, id: i64) -> String {
    seller.map(|s| s.name.clone()).unwrap_or_else(|| format!("#{id}"))
}

fn product_name(product: Option<&Product>, id: i64) -> String {
    product.map(|p| p.name.clone()).unwrap_or_else(|| format!("#{id}"))
}

fn format_amount(amount: Option<Amount>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
}

/// 当前页的切片
fn page_of<T: Clone + Send + Sync + 'static>(rows: ReadSignal<Vec<T>>, page: RwSignal<usize>) -> Vec<T> {
    rows.with(|all| paginate(all, page.get(), DEFAULT_ROWS_PER_PAGE).to_vec())
}

#[component]
fn Pager(page: RwSignal<usize>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let pages = move || page_count(total.get(), DEFAULT_ROWS_PER_PAGE);

    view! {
        <Show when=move || { pages() > 1 }>
            <div class="flex justify-center p-4">
                <div class="join">
                    <button
                        class="join-item btn btn-sm"
                        disabled=move || page.get() == 0
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                    >
                        "«"
                    </button>
                    <button class="join-item btn btn-sm btn-disabled">
                        {move || format!("{} / {}", page.get() + 1, pages())}
                    </button>
                    <button
                        class="join-item btn btn-sm"
                        disabled=move || page.get() + 1 >= pages()
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "»"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();

    let tab = RwSignal::new(Tab::Sellers);
    let page = RwSignal::new(0usize);
    let search = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let stats = RwSignal::new(Option::<InventoryStats>::None);
    let (sellers, set_sellers) = signal(Vec::<Seller>::new());
    let (products, set_products) = signal(Vec::<Product>::new());
    let (stock, set_stock) = signal(Vec::<StockEntry>::new());
    let (sales, set_sales) = signal(Vec::<Sale>::new());
    let dialog = RwSignal::new(Option::<DialogKind>::None);

    let load_stats = move || {
        let api = auth.api();
        spawn_local(async move {
            match api.get_inventory_stats().await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => notifier.api_error(&e, "Error al cargar estadísticas"),
            }
        });
    };

    // 对话框选择器需要完整的销售员和产品目录
    let load_catalogs = move || {
        let api = auth.api();
        spawn_local(async move {
            let catalog = || CatalogFilter {
                paging: Paging::limit(FETCH_LIMIT),
                search: None,
            };
            match api.get_sellers(catalog()).await {
                Ok(data) => set_sellers.set(data),
                Err(e) => notifier.api_error(&e, "Error al cargar vendedores"),
            }
            match api.get_products(catalog()).await {
                Ok(data) => set_products.set(data),
                Err(e) => notifier.api_error(&e, "Error al cargar productos"),
            }
        });
    };

    let load = move || {
        let current = tab.get_untracked();
        let text = search.get_untracked();
        let catalog = CatalogFilter {
            paging: Paging::limit(FETCH_LIMIT),
            search: (!text.trim().is_empty()).then(|| text.trim().to_string()),
        };
        let ledger = LedgerFilter {
            paging: Paging::limit(FETCH_LIMIT),
            ..Default::default()
        };
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            let failed = match current {
                Tab::Sellers => api.get_sellers(catalog).await.map(|d| set_sellers.set(d)).err(),
                Tab::Products => api.get_products(catalog).await.map(|d| set_products.set(d)).err(),
                Tab::Stock => api.get_stock(ledger).await.map(|d| set_stock.set(d)).err(),
                Tab::Sales => api.get_sales(ledger).await.map(|d| set_sales.set(d)).err(),
            };
            if let Some(e) = failed {
                notifier.api_error(&e, "Error al cargar los datos");
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        tab.track();
        search.track();
        page.set(0);
        load();
    });

    load_stats();
    load_catalogs();

    let reload_all = move || {
        load();
        load_stats();
        load_catalogs();
    };

    let handle_delete = move |current: Tab, id: i64| {
        if !confirm("¿Está seguro de eliminar este registro?") {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            let result = match current {
                Tab::Sellers => api.delete_seller(id).await,
                Tab::Products => api.delete_product(id).await,
                Tab::Sales => api.delete_sale(id).await,
                Tab::Stock => return,
            };
            match result {
                Ok(_) => {
                    notifier.success("Eliminado correctamente");
                    reload_all();
                }
                Err(e) => notifier.api_error(&e, "Error al eliminar"),
            }
        });
    };

    let total = Signal::derive(move || match tab.get() {
        Tab::Sellers => sellers.with(Vec::len),
        Tab::Products => products.with(Vec::len),
        Tab::Stock => stock.with(Vec::len),
        Tab::Sales => sales.with(Vec::len),
    });

    // 删除或保存后列表可能变短
    Effect::new(move |_| {
        let total = total.get();
        let current = page.get_untracked();
        let clamped = clamp_page(current, total, DEFAULT_ROWS_PER_PAGE);
        if clamped != current {
            page.set(clamped);
        }
    });

    let stat = move |label: &'static str, value: fn(&InventoryStats) -> String| {
        view! {
            <div class="stat">
                <div class="stat-title">{label}</div>
                <div class="stat-value text-2xl">
                    {move || stats.with(|s| s.as_ref().map(value).unwrap_or_else(|| "-".to_string()))}
                </div>
            </div>
        }
    };

    let new_button = move || {
        let (label, kind) = match tab.get() {
            Tab::Sellers => ("Nuevo Vendedor", DialogKind::Seller(None)),
            Tab::Products => ("Nuevo Producto", DialogKind::Product(None)),
            Tab::Stock => ("Asignar Stock", DialogKind::Stock),
            Tab::Sales => ("Registrar Venta", DialogKind::Sale(None)),
        };
        view! {
            <button class="btn btn-primary gap-2" on:click=move |_| dialog.set(Some(kind.clone()))>
                <Plus attr:class="h-4 w-4" />
                {label}
            </button>
        }
    };

    let actions = move |current: Tab, id: i64, edit: Option<DialogKind>| {
        view! {
            <div class="flex gap-1">
                {edit.map(|kind| view! {
                    <button class="btn btn-ghost btn-sm btn-square" on:click=move |_| dialog.set(Some(kind.clone()))>
                        <Pencil attr:class="h-4 w-4" />
                    </button>
                })}
                <button class="btn btn-ghost btn-sm btn-square text-error" on:click=move |_| handle_delete(current, id)>
                    <Trash2 attr:class="h-4 w-4" />
                </button>
            </div>
        }
    };

    let sellers_table = move || {
        view! {
            <thead>
                <tr>
                    <th>"Nombre"</th>
                    <th>"Teléfono"</th>
                    <th class="hidden md:table-cell">"Email"</th>
                    <th class="hidden md:table-cell">"Ciudad"</th>
                    <th>"Estado"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    page_of(sellers, page)
                        .into_iter()
                        .map(|s| {
                            let edit = DialogKind::Seller(Some(s.clone()));
                            view! {
                                <tr>
                                    <td class="font-medium">{s.name}</td>
                                    <td class="font-mono text-sm">{s.phone}</td>
                                    <td class="hidden md:table-cell">{s.email.unwrap_or_default()}</td>
                                    <td class="hidden md:table-cell">{s.city.unwrap_or_default()}</td>
                                    <td>{record_badge(s.status)}</td>
                                    <td>{actions(Tab::Sellers, s.id, Some(edit))}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        }
    };

    let products_table = move || {
        view! {
            <thead>
                <tr>
                    <th>"Código"</th>
                    <th>"Nombre"</th>
                    <th class="hidden md:table-cell">"Categoría"</th>
                    <th>"Precio"</th>
                    <th>"Estado"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    page_of(products, page)
                        .into_iter()
                        .map(|p| {
                            let edit = DialogKind::Product(Some(p.clone()));
                            view! {
                                <tr>
                                    <td class="font-mono text-sm">{p.code}</td>
                                    <td class="font-medium">{p.name}</td>
                                    <td class="hidden md:table-cell">{p.category.unwrap_or_default()}</td>
                                    <td>{p.unit_price.to_string()}</td>
                                    <td>{record_badge(p.status)}</td>
                                    <td>{actions(Tab::Products, p.id, Some(edit))}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        }
    };

    let stock_table = move || {
        view! {
            <thead>
                <tr>
                    <th>"Vendedor"</th>
                    <th>"Producto"</th>
                    <th>"Inicial"</th>
                    <th>"Actual"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    page_of(stock, page)
                        .into_iter()
                        .map(|entry| {
                            let low = entry.current_quantity <= 0;
                            view! {
                                <tr>
                                    <td>{seller_name(entry.seller.as_ref(), entry.seller_id)}</td>
                                    <td>{product_name(entry.product.as_ref(), entry.product_id)}</td>
                                    <td>{entry.initial_quantity}</td>
                                    <td class:text-error=low class="font-bold">{entry.current_quantity}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        }
    };

    let sales_table = move || {
        view! {
            <thead>
                <tr>
                    <th>"Fecha"</th>
                    <th>"Vendedor"</th>
                    <th>"Producto"</th>
                    <th>"Cantidad"</th>
                    <th class="hidden md:table-cell">"Precio"</th>
                    <th>"Total"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    page_of(sales, page)
                        .into_iter()
                        .map(|sale| {
                            let edit = DialogKind::Sale(Some(sale.clone()));
                            let sold_at = sale
                                .sold_at
                                .map(|t| t.format("%d/%m/%Y").to_string())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr>
                                    <td class="text-sm">{sold_at}</td>
                                    <td>{seller_name(sale.seller.as_ref(), sale.seller_id)}</td>
                                    <td>{product_name(sale.product.as_ref(), sale.product_id)}</td>
                                    <td>{sale.quantity}</td>
                                    <td class="hidden md:table-cell">{format_amount(sale.price)}</td>
                                    <td class="font-medium">{format_amount(sale.total())}</td>
                                    <td>{actions(Tab::Sales, sale.id, Some(edit))}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        }
    };

    view! {
        <div class="flex flex-col sm:flex-row justify-between gap-4">
            <h1 class="text-3xl font-bold">"Inventario"</h1>
            <div class="flex gap-2">
                <button on:click=move |_| reload_all() disabled=move || loading.get() class="btn btn-ghost btn-circle">
                    <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
                {new_button}
            </div>
        </div>

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            {stat("Vendedores Activos", |s| s.active_sellers.to_string())}
            {stat("Productos Activos", |s| s.active_products.to_string())}
            {stat("Stock Total", |s| s.total_stock.to_string())}
            {stat("Valor Inventario", |s| s.inventory_value.to_string())}
            {stat("Ventas del Mes", |s| format!("{} ({})", s.sales_this_month, s.sales_value_this_month))}
        </div>

        <div role="tablist" class="tabs tabs-boxed bg-base-100 w-fit">
            {Tab::ALL
                .into_iter()
                .map(|t| view! {
                    <a role="tab" class="tab" class:tab-active=move || tab.get() == t on:click=move |_| tab.set(t)>
                        {t.label()}
                    </a>
                })
                .collect_view()}
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <Show when=move || matches!(tab.get(), Tab::Sellers | Tab::Products)>
                    <div class="p-6 pb-2">
                        <label class="input input-bordered flex items-center gap-2">
                            <Search attr:class="h-4 w-4 opacity-50" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Buscar..."
                                on:change=move |ev| search.set(event_target_value(&ev))
                                prop:value=move || search.get()
                            />
                        </label>
                    </div>
                </Show>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        {move || match tab.get() {
                            Tab::Sellers => sellers_table().into_any(),
                            Tab::Products => products_table().into_any(),
                            Tab::Stock => stock_table().into_any(),
                            Tab::Sales => sales_table().into_any(),
                        }}
                    </table>
                    <Show when=move || total.get() == 0 && !loading.get()>
                        <div class="text-center py-8 text-base-content/50">"No hay registros"</div>
                    </Show>
                </div>

                <Pager page=page total=total />
            </div>
        </div>

        <InventoryDialog
            kind=dialog
            sellers=sellers
            products=products
            on_saved=move |()| reload_all()
        />
    }
}
