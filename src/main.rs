use chrono::Utc;
use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod api;
mod filters;
mod forms;
mod model;
mod storage;

use filters::{apply_filters, summarize, FilterState, KindFilter, TimeWindow};
use forms::FieldErrors;
use model::{replace_by_id, Transaction, TransactionDraft, TransactionKind};
use storage::{BrowserTokenStore, TokenStore};

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Transactions,
    NewTransaction,
}

/// Load state of a view's transaction cache. Entered at `Loading` on mount;
/// the initial fetch resolves it to `Ready` or `Failed` and it never changes
/// again. Filter edits and in-place updates happen within `Ready`.
#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<MouseEvent>,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Transactions",
            page: Page::Transactions,
            icon: icon_bar_chart,
        },
    ];

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white border-b border-gray-200 h-14 flex items-center justify-between px-6">
                <div class="flex items-center gap-2">
                    { icon_wallet() }
                    <span class="text-lg font-bold text-gray-800">{"FinSync"}</span>
                </div>
                <nav class="flex items-center gap-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium bg-blue-50 text-blue-700"
                        } else {
                            "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                { (item.icon)() }
                                <span>{ item.label }</span>
                            </button>
                        }
                    }) }
                    <button
                        type="button"
                        class="flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100"
                        onclick={props.on_logout.clone()}
                    >
                        { icon_log_out() }
                        <span>{"Log out"}</span>
                    </button>
                </nav>
            </header>
            <main class="flex-1">
                { for props.children.iter() }
            </main>
        </div>
    }
}

fn page_shell(title: &'static str, subtitle: &'static str, children: Html) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 p-6">
            <header class="mb-8">
                <h1 class="text-2xl font-bold text-gray-800">{ title }</h1>
                <p class="text-gray-600">{ subtitle }</p>
            </header>
            { children }
        </div>
    }
}

fn error_banner(message: &str) -> Html {
    html! {
        <div class="mb-4 p-4 bg-red-100 text-red-700 rounded-md border border-red-200">
            { message.to_string() }
        </div>
    }
}

// ── filter bar ────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct FilterBarProps {
    filter: FilterState,
    on_change: Callback<FilterState>,
}

#[function_component(FilterBar)]
fn filter_bar(props: &FilterBarProps) -> Html {
    let on_window = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FilterState {
                window: TimeWindow::parse(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_kind = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FilterState {
                kind: KindFilter::parse(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_search = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FilterState {
                search: input.value(),
                ..filter.clone()
            });
        })
    };

    html! {
        <div class="mb-6 grid grid-cols-1 md:grid-cols-3 gap-4">
            <div>
                <label class="block text-sm font-medium mb-1 text-gray-700">{"Filter by period:"}</label>
                <select onchange={on_window} class="w-full border rounded px-3 py-2 text-gray-900 bg-white">
                    <option value="all" selected={props.filter.window == TimeWindow::All}>{"All"}</option>
                    <option value="year" selected={props.filter.window == TimeWindow::Year}>{"Year"}</option>
                    <option value="month" selected={props.filter.window == TimeWindow::Month}>{"Month"}</option>
                    <option value="week" selected={props.filter.window == TimeWindow::Week}>{"Week"}</option>
                    <option value="day" selected={props.filter.window == TimeWindow::Day}>{"Day"}</option>
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium mb-1 text-gray-700">{"Filter by type:"}</label>
                <select onchange={on_kind} class="w-full border rounded px-3 py-2 text-gray-900 bg-white">
                    <option value="all" selected={props.filter.kind == KindFilter::All}>{"All"}</option>
                    <option value="income" selected={props.filter.kind == KindFilter::Income}>{"Income"}</option>
                    <option value="expense" selected={props.filter.kind == KindFilter::Expense}>{"Expense"}</option>
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium mb-1 text-gray-700">{"Search:"}</label>
                <input
                    type="text"
                    placeholder="Search transactions..."
                    value={props.filter.search.clone()}
                    oninput={on_search}
                    class="w-full border rounded px-3 py-2 text-gray-900 bg-white"
                />
            </div>
        </div>
    }
}

// ── summary cards ─────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    UpRight,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
struct SummaryCardProps {
    title: &'static str,
    amount: f64,
    icon: StatIcon,
}

#[function_component(SummaryCard)]
fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-lg shadow flex justify-between items-start">
            <div>
                <p class="text-gray-500 text-xs font-bold mb-1 uppercase tracking-wide">{ props.title }</p>
                <h3 class="text-2xl font-bold text-gray-800">{ format_currency(props.amount) }</h3>
            </div>
            <div class="p-3 bg-blue-50 rounded-lg">
                {
                    match props.icon {
                        StatIcon::UpRight => icon_arrow_up_right(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}

// ── transaction card ──────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct TransactionCardProps {
    transaction: Transaction,
    #[prop_or_default]
    on_edit: Option<Callback<MouseEvent>>,
}

#[function_component(TransactionCard)]
fn transaction_card(props: &TransactionCardProps) -> Html {
    let tx = &props.transaction;
    let (card_class, amount_class, sign) = match tx.kind {
        TransactionKind::Income => (
            "bg-white p-4 rounded-lg shadow mb-3 border-l-4 border-green-500",
            "font-bold text-green-600",
            "+",
        ),
        TransactionKind::Expense => (
            "bg-white p-4 rounded-lg shadow mb-3 border-l-4 border-red-500",
            "font-bold text-red-600",
            "-",
        ),
    };

    html! {
        <div class={card_class}>
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-medium text-gray-900">{ &tx.title }</h3>
                    <p class="text-sm text-gray-500">
                        { format!("{} • {}", tx.category, tx.date.format("%d/%m/%Y")) }
                    </p>
                </div>

                <div class="flex items-center space-x-2">
                    <span class={amount_class}>
                        { format!("{}{}", sign, format_currency(tx.amount)) }
                    </span>
                    {
                        if let Some(on_edit) = &props.on_edit {
                            html! {
                                <button
                                    type="button"
                                    onclick={on_edit.clone()}
                                    class="text-gray-400 hover:text-blue-600 transition-colors"
                                    title="Edit transaction"
                                >
                                    { icon_pencil() }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

// ── dashboard ─────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct DashboardProps {
    on_navigate: Callback<Page>,
}

#[function_component(DashboardPage)]
fn dashboard_page(props: &DashboardProps) -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let load = use_state(|| LoadState::Loading);
    let filter = use_state(FilterState::default);
    let selected = use_state(|| None::<Transaction>);

    {
        let transactions = transactions.clone();
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_transactions(&BrowserTokenStore).await {
                        Ok(list) => {
                            transactions.set(list);
                            load.set(LoadState::Ready);
                        }
                        Err(err) => {
                            let message = err.to_string();
                            error!("failed to load transactions:", message.clone());
                            load.set(LoadState::Failed(message));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: FilterState| filter.set(next))
    };

    let on_save = {
        let transactions = transactions.clone();
        let selected = selected.clone();
        Callback::from(move |updated: Transaction| {
            transactions.set(replace_by_id(&transactions, &updated));
            selected.set(None);
        })
    };

    let on_close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    // Full re-filter from the unfiltered cache on every render; the summary
    // always reflects the post-filter set.
    let filtered = apply_filters(&transactions, &filter);
    let summary = summarize(&filtered);

    let new_transaction = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::NewTransaction))
    };
    let view_all = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Transactions))
    };

    let recent = filtered.iter().take(6).map(|t| {
        let selected = selected.clone();
        let tx = t.clone();
        let on_edit = Callback::from(move |_: MouseEvent| selected.set(Some(tx.clone())));
        html! {
            <TransactionCard key={t.id.clone()} transaction={t.clone()} on_edit={on_edit} />
        }
    });

    let last_transaction = filtered
        .first()
        .map(|t| t.date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    page_shell(
        "Personal Finances",
        "Track your income and expenses",
        html! {
            <>
                <div class="mb-6 grid grid-cols-1 md:grid-cols-3 gap-6">
                    <SummaryCard title="Income" amount={summary.income} icon={StatIcon::UpRight} />
                    <SummaryCard title="Expenses" amount={summary.expenses} icon={StatIcon::CreditCard} />
                    <SummaryCard title="Balance" amount={summary.balance} icon={StatIcon::Wallet} />
                </div>

                {
                    if let LoadState::Failed(message) = &*load {
                        error_banner(message)
                    } else {
                        html! {}
                    }
                }

                <FilterBar filter={(*filter).clone()} on_change={on_filter_change} />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="md:col-span-2">
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="text-xl font-semibold text-gray-800">{"Recent Transactions"}</h2>
                            <button
                                type="button"
                                onclick={new_transaction}
                                class="text-blue-600 hover:text-blue-800 text-sm font-medium"
                            >
                                {"+ New Transaction"}
                            </button>
                        </div>

                        <div class="space-y-3">
                            {
                                if *load == LoadState::Loading {
                                    html! { <p class="text-gray-500 text-center py-8">{"Loading transactions..."}</p> }
                                } else if filtered.is_empty() {
                                    html! { <p class="text-gray-500 text-center py-8">{"No transactions found"}</p> }
                                } else {
                                    html! { <>{ for recent }</> }
                                }
                            }
                        </div>
                    </div>

                    <div>
                        <h2 class="text-xl font-semibold text-gray-800 mb-4">{"Overview"}</h2>
                        <div class="bg-white p-6 rounded-lg shadow">
                            <p class="text-gray-600 mb-2">{ format!("Total transactions: {}", filtered.len()) }</p>
                            <p class="text-gray-600 mb-2">{ format!("Last transaction: {}", last_transaction) }</p>
                            <button
                                type="button"
                                onclick={view_all}
                                class="text-blue-600 hover:text-blue-800 text-sm font-medium block mt-4"
                            >
                                {"View all transactions →"}
                            </button>
                        </div>
                    </div>
                </div>

                {
                    if let Some(tx) = &*selected {
                        html! {
                            <TransactionEditModal
                                key={tx.id.clone()}
                                transaction={tx.clone()}
                                on_close={on_close_modal}
                                on_save={on_save}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        },
    )
}

// ── transactions page ─────────────────────────────────────────

#[function_component(TransactionsPage)]
fn transactions_page() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let load = use_state(|| LoadState::Loading);
    let filter = use_state(FilterState::default);

    {
        let transactions = transactions.clone();
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_transactions(&BrowserTokenStore).await {
                        Ok(list) => {
                            transactions.set(list);
                            load.set(LoadState::Ready);
                        }
                        Err(err) => {
                            let message = err.to_string();
                            error!("failed to load transactions:", message.clone());
                            load.set(LoadState::Failed(message));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: FilterState| filter.set(next))
    };

    let filtered = apply_filters(&transactions, &filter);

    page_shell(
        "All Transactions",
        "View and filter your full history",
        html! {
            <>
                {
                    if let LoadState::Failed(message) = &*load {
                        error_banner(message)
                    } else {
                        html! {}
                    }
                }

                <FilterBar filter={(*filter).clone()} on_change={on_filter_change} />

                <div class="bg-white rounded-lg shadow overflow-hidden p-4">
                    {
                        if *load == LoadState::Loading {
                            html! { <p class="text-gray-500 text-center py-12">{"Loading transactions..."}</p> }
                        } else if filtered.is_empty() {
                            html! { <p class="text-gray-500 text-center py-12">{"No transactions found"}</p> }
                        } else {
                            html! {
                                <>
                                    { for filtered.iter().map(|t| html! {
                                        <TransactionCard key={t.id.clone()} transaction={t.clone()} />
                                    }) }
                                </>
                            }
                        }
                    }
                </div>
            </>
        },
    )
}

// ── create form ───────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct NewTransactionProps {
    on_done: Callback<()>,
}

#[function_component(NewTransactionPage)]
fn new_transaction_page(props: &NewTransactionProps) -> Html {
    let title = use_state(String::new);
    let amount = use_state(String::new);
    let kind = use_state(|| TransactionKind::Expense);
    let category = use_state(String::new);
    let errors = use_state(FieldErrors::new);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_close = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(match select.value().as_str() {
                "income" => TransactionKind::Income,
                _ => TransactionKind::Expense,
            });
        })
    };

    let on_submit = {
        let title = title.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let category = category.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let on_done = props.on_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let found = forms::validate_transaction(&title, &amount, &category);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            form_error.set(None);
            saving.set(true);

            let draft = TransactionDraft {
                title: title.trim().to_string(),
                amount: amount.trim().parse().unwrap_or(0.0),
                kind: *kind,
                date: Utc::now(),
                category: category.trim().to_string(),
            };

            let form_error = form_error.clone();
            let saving = saving.clone();
            let on_done = on_done.clone();
            spawn_local(async move {
                match api::create_transaction(&BrowserTokenStore, &draft).await {
                    Ok(_) => on_done.emit(()),
                    Err(err) => {
                        form_error.set(Some(err.to_string()));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
            <div class="w-full max-w-md rounded-lg bg-white shadow-xl">
                <div class="p-8">
                    <div class="mb-6 flex items-center justify-between">
                        <h2 class="text-2xl font-bold text-gray-800">{"New Transaction"}</h2>
                        <button
                            type="button"
                            onclick={on_close}
                            class="text-gray-400 hover:text-gray-600 transition-colors"
                            aria-label="Close"
                        >
                            { icon_x() }
                        </button>
                    </div>

                    {
                        if let Some(message) = &*form_error {
                            error_banner(message)
                        } else {
                            html! {}
                        }
                    }

                    <form onsubmit={on_submit} class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700">{"Title*"}</label>
                            <input
                                value={(*title).clone()}
                                oninput={text_input_handler(title.clone(), errors.clone(), "title")}
                                placeholder="e.g. Salary, Rent"
                                class={input_class(&errors, "title")}
                                disabled={*saving}
                            />
                            { field_error(&errors, "title") }
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">{"Amount*"}</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0.01"
                                value={(*amount).clone()}
                                oninput={text_input_handler(amount.clone(), errors.clone(), "amount")}
                                placeholder="0.00"
                                class={input_class(&errors, "amount")}
                                disabled={*saving}
                            />
                            { field_error(&errors, "amount") }
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">{"Type*"}</label>
                            <select onchange={on_kind} class="block w-full rounded-md border border-gray-300 px-4 py-3 text-gray-900 bg-white" disabled={*saving}>
                                <option value="expense" selected={*kind == TransactionKind::Expense}>{"Expense"}</option>
                                <option value="income" selected={*kind == TransactionKind::Income}>{"Income"}</option>
                            </select>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">{"Category*"}</label>
                            <input
                                value={(*category).clone()}
                                oninput={text_input_handler(category.clone(), errors.clone(), "category")}
                                placeholder="e.g. Housing, Groceries"
                                class={input_class(&errors, "category")}
                                disabled={*saving}
                            />
                            { field_error(&errors, "category") }
                        </div>

                        <button
                            type="submit"
                            class="w-full rounded-md bg-blue-600 px-4 py-3 font-medium text-white hover:bg-blue-700 transition-colors shadow-sm"
                            disabled={*saving}
                        >
                            { if *saving { "Saving..." } else { "Add Transaction" } }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

// ── edit modal ────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct TransactionEditModalProps {
    transaction: Transaction,
    on_close: Callback<MouseEvent>,
    on_save: Callback<Transaction>,
}

#[function_component(TransactionEditModal)]
fn transaction_edit_modal(props: &TransactionEditModalProps) -> Html {
    let title = use_state(|| props.transaction.title.clone());
    let amount = use_state(|| props.transaction.amount.to_string());
    let kind = use_state(|| props.transaction.kind);
    let category = use_state(|| props.transaction.category.clone());
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(match select.value().as_str() {
                "income" => TransactionKind::Income,
                _ => TransactionKind::Expense,
            });
        })
    };

    let on_submit = {
        let id = props.transaction.id.clone();
        let title = title.clone();
        let amount = amount.clone();
        let kind = kind.clone();
        let category = category.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_save = props.on_save.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed = amount.trim().parse::<f64>().unwrap_or(0.0);
            if parsed <= 0.0 {
                error.set(Some("Enter an amount greater than zero".to_string()));
                return;
            }

            error.set(None);
            saving.set(true);

            let draft = TransactionDraft {
                title: title.trim().to_string(),
                amount: parsed,
                kind: *kind,
                date: Utc::now(),
                category: category.trim().to_string(),
            };

            let id = id.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_save = on_save.clone();
            spawn_local(async move {
                match api::update_transaction(&BrowserTokenStore, &id, &draft).await {
                    Ok(updated) => on_save.emit(updated),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
            <div class="w-full max-w-md rounded-lg bg-white shadow-xl">
                <div class="p-8">
                    <div class="mb-6 flex items-center justify-between">
                        <h2 class="text-2xl font-bold text-gray-800">{"Edit Transaction"}</h2>
                        <button
                            type="button"
                            onclick={props.on_close.clone()}
                            class="text-gray-400 hover:text-gray-600"
                            aria-label="Close"
                        >
                            { icon_x() }
                        </button>
                    </div>

                    {
                        if let Some(message) = &*error {
                            error_banner(message)
                        } else {
                            html! {}
                        }
                    }

                    <form onsubmit={on_submit} class="space-y-4">
                        <input
                            value={(*title).clone()}
                            oninput={{
                                let title = title.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    title.set(input.value());
                                })
                            }}
                            placeholder="Title"
                            class="w-full p-3 border rounded text-gray-900"
                            required={true}
                        />
                        <input
                            type="number"
                            step="0.01"
                            value={(*amount).clone()}
                            oninput={{
                                let amount = amount.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    amount.set(input.value());
                                })
                            }}
                            placeholder="Amount"
                            class="w-full p-3 border rounded text-gray-900"
                            required={true}
                        />
                        <select onchange={on_kind} class="w-full p-3 border rounded text-gray-900 bg-white">
                            <option value="income" selected={*kind == TransactionKind::Income}>{"Income"}</option>
                            <option value="expense" selected={*kind == TransactionKind::Expense}>{"Expense"}</option>
                        </select>
                        <input
                            value={(*category).clone()}
                            oninput={{
                                let category = category.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    category.set(input.value());
                                })
                            }}
                            placeholder="Category"
                            class="w-full p-3 border rounded text-gray-900"
                            required={true}
                        />
                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700"
                            disabled={*saving}
                        >
                            { if *saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

// ── auth screens ──────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct AuthScreenProps {
    on_authenticated: Callback<()>,
}

#[function_component(AuthScreen)]
fn auth_screen(props: &AuthScreenProps) -> Html {
    let show_signup = use_state(|| false);

    let to_signup = {
        let show_signup = show_signup.clone();
        Callback::from(move |_: MouseEvent| show_signup.set(true))
    };
    let to_login = {
        let show_signup = show_signup.clone();
        Callback::from(move |_: MouseEvent| show_signup.set(false))
    };
    let on_registered = {
        let show_signup = show_signup.clone();
        Callback::from(move |_: ()| show_signup.set(false))
    };

    if *show_signup {
        html! { <SignupForm on_registered={on_registered} on_switch={to_login} /> }
    } else {
        html! { <LoginForm on_authenticated={props.on_authenticated.clone()} on_switch={to_signup} /> }
    }
}

#[derive(Properties, PartialEq)]
struct LoginFormProps {
    on_authenticated: Callback<()>,
    on_switch: Callback<MouseEvent>,
}

#[function_component(LoginForm)]
fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(message) = forms::validate_login(&email, &password) {
                error.set(Some(message));
                return;
            }

            error.set(None);
            loading.set(true);

            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                match api::login(&email_val, &password_val).await {
                    Ok(token) => {
                        BrowserTokenStore.set(&token);
                        on_authenticated.emit(());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
            <div class="w-full max-w-md overflow-hidden rounded-lg bg-white shadow-xl">
                <div class="p-8">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-gray-800">{"Welcome to FinSync!"}</h2>
                        <p class="text-sm text-gray-500 mt-1">{"Sign in to continue."}</p>
                    </div>

                    <form onsubmit={on_submit} class="space-y-6">
                        {
                            if let Some(message) = &*error {
                                html! {
                                    <div class="rounded-md bg-red-50 p-4">
                                        <p class="text-sm font-medium text-red-800">{ message.clone() }</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-700">{"Email"}</label>
                            <input
                                type="email"
                                value={(*email).clone()}
                                oninput={{
                                    let email = email.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        email.set(input.value());
                                    })
                                }}
                                placeholder="your@email.com"
                                class="block w-full rounded-md border border-gray-300 px-4 py-3 text-gray-900 shadow-sm"
                                disabled={*loading}
                            />
                        </div>

                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-700">{"Password"}</label>
                            <input
                                type="password"
                                value={(*password).clone()}
                                oninput={{
                                    let password = password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        password.set(input.value());
                                    })
                                }}
                                placeholder="••••••••"
                                class="block w-full rounded-md border border-gray-300 px-4 py-3 text-gray-900 shadow-sm"
                                disabled={*loading}
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full rounded-md bg-blue-600 px-4 py-3 font-medium text-white hover:bg-blue-700 transition-colors shadow-sm"
                            disabled={*loading}
                        >
                            { if *loading { "Signing in..." } else { "Sign in" } }
                        </button>
                    </form>

                    <div class="mt-6 text-center text-sm text-gray-500">
                        {"Don't have an account? "}
                        <button
                            type="button"
                            onclick={props.on_switch.clone()}
                            class="font-medium text-blue-600 hover:text-blue-500"
                        >
                            {"Sign up"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SignupFormProps {
    on_registered: Callback<()>,
    on_switch: Callback<MouseEvent>,
}

#[function_component(SignupForm)]
fn signup_form(props: &SignupFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let errors = use_state(FieldErrors::new);
    let form_error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        let loading = loading.clone();
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let found = forms::validate_signup(&name, &email, &password, &confirm);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            form_error.set(None);
            loading.set(true);

            let name_val = name.trim().to_string();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let form_error = form_error.clone();
            let loading = loading.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                match api::register(&name_val, &email_val, &password_val).await {
                    Ok(_) => {
                        log!("registration complete");
                        on_registered.emit(());
                    }
                    Err(err) => {
                        form_error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="w-full max-w-md overflow-hidden rounded-lg bg-white shadow-xl">
                <div class="p-8">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-gray-800">{"Create Account"}</h2>
                        <p class="text-sm text-gray-500 mt-1">{"Start managing your finances."}</p>
                    </div>

                    {
                        if let Some(message) = &*form_error {
                            html! {
                                <div class="mb-6 rounded-md bg-red-50 p-4">
                                    <p class="text-sm font-medium text-red-800">{ message.clone() }</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <form onsubmit={on_submit} class="space-y-6">
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-700">{"Full Name"}</label>
                            <input
                                value={(*name).clone()}
                                oninput={text_input_handler(name.clone(), errors.clone(), "name")}
                                placeholder="Jane Doe"
                                class={input_class(&errors, "name")}
                                disabled={*loading}
                            />
                            { field_error(&errors, "name") }
                        </div>

                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-700">{"Email"}</label>
                            <input
                                type="email"
                                value={(*email).clone()}
                                oninput={text_input_handler(email.clone(), errors.clone(), "email")}
                                placeholder="your@email.com"
                                class={input_class(&errors, "email")}
                                disabled={*loading}
                            />
                            { field_error(&errors, "email") }
                        </div>

                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-700">{"Password"}</label>
                            <input
                                type="password"
                                value={(*password).clone()}
                                oninput={text_input_handler(password.clone(), errors.clone(), "password")}
                                placeholder="••••••••"
                                class={input_class(&errors, "password")}
                                disabled={*loading}
                            />
                            { field_error(&errors, "password") }
                        </div>

                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-700">{"Confirm Password"}</label>
                            <input
                                type="password"
                                value={(*confirm).clone()}
                                oninput={text_input_handler(confirm.clone(), errors.clone(), "confirm")}
                                placeholder="••••••••"
                                class={input_class(&errors, "confirm")}
                                disabled={*loading}
                            />
                            { field_error(&errors, "confirm") }
                        </div>

                        <button
                            type="submit"
                            class="w-full rounded-md bg-blue-600 px-4 py-3 font-medium text-white hover:bg-blue-700 transition-colors shadow-sm"
                            disabled={*loading}
                        >
                            { if *loading { "Creating account..." } else { "Create Account" } }
                        </button>
                    </form>

                    <div class="mt-6 text-center text-sm text-gray-500">
                        {"Already have an account? "}
                        <button
                            type="button"
                            onclick={props.on_switch.clone()}
                            class="font-medium text-blue-600 hover:text-blue-500"
                            disabled={*loading}
                        >
                            {"Sign in"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

// ── shared form helpers ───────────────────────────────────────

/// Updates a text field's state and clears that field's outstanding
/// validation error, so the message disappears as soon as the user starts
/// correcting it.
fn text_input_handler(
    value: UseStateHandle<String>,
    errors: UseStateHandle<FieldErrors>,
    field: &'static str,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        value.set(input.value());
        if errors.contains_key(field) {
            let mut next = (*errors).clone();
            next.remove(field);
            errors.set(next);
        }
    })
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="mt-1 text-sm text-red-500">{ message.clone() }</p> },
        None => html! {},
    }
}

fn input_class(errors: &FieldErrors, field: &str) -> &'static str {
    if errors.contains_key(field) {
        "block w-full rounded-md border border-red-500 px-4 py-3 text-gray-900 shadow-sm"
    } else {
        "block w-full rounded-md border border-gray-300 px-4 py-3 text-gray-900 shadow-sm"
    }
}

// ── formatting ────────────────────────────────────────────────

fn format_with_commas(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents_total = (amount.abs() * 100.0).round() as i64;
    format!(
        "{}${}.{:02}",
        sign,
        format_with_commas(cents_total / 100),
        cents_total % 100
    )
}

// ── app root ──────────────────────────────────────────────────

#[function_component(App)]
fn app() -> Html {
    let authenticated =
        use_state(|| BrowserTokenStore.get().is_some_and(|token| !token.is_empty()));
    let active_page = use_state(|| Page::Dashboard);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let on_logout = {
        let authenticated = authenticated.clone();
        let active_page = active_page.clone();
        Callback::from(move |_: MouseEvent| {
            BrowserTokenStore.clear();
            active_page.set(Page::Dashboard);
            authenticated.set(false);
        })
    };

    if !*authenticated {
        let authenticated = authenticated.clone();
        return html! {
            <AuthScreen on_authenticated={Callback::from(move |_| authenticated.set(true))} />
        };
    }

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage on_navigate={on_select.clone()} /> },
        Page::Transactions => html! { <TransactionsPage /> },
        Page::NewTransaction => {
            let active_page = active_page.clone();
            html! { <NewTransactionPage on_done={Callback::from(move |_| active_page.set(Page::Dashboard))} /> }
        }
    };

    html! {
        <Layout active_page={*active_page} on_select={on_select} on_logout={on_logout}>
            { content }
        </Layout>
    }
}

// ── icons ─────────────────────────────────────────────────────

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}
fn icon_pencil() -> Html {
    icon_base("M17 3a2.85 2.83 0 114 4L7.5 20.5 2 22l1.5-5.5z")
}
fn icon_x() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}

fn main() {
    yew::Renderer::<App>::new().render();
}
