use crate::components::{
    DailyChart, FilterBar, FormEdit, SummaryPanel, TransactionForm, TransactionTable,
};
use crate::services::api::api_client;
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::ApiClient;
use chrono::NaiveDate;
use shared::demo::demo_drafts;
use shared::{
    daily_series, RefreshState, RefreshToken, RefreshTrigger, SubmitOutcome, Summary, Transaction,
    TransactionForm as FormValues, TransactionId, TransactionQuery, TypeFilter,
};
use std::rc::Rc;
use yew::prelude::*;

const COMPONENT: &str = "app";

pub enum Msg {
    Refresh(RefreshTrigger),
    Loaded {
        token: RefreshToken,
        transactions: Vec<Transaction>,
        summary: Summary,
    },
    FormEdited(FormEdit),
    Submit,
    Created(Option<Transaction>),
    DeleteRequested(TransactionId),
    Deleted(bool),
    ViewDateChanged(NaiveDate),
    FilterChanged(TypeFilter),
    SearchChanged(String),
    SeedDemo,
    Seeded(usize),
}

pub struct App {
    gateway: Rc<ApiClient>,
    data: RefreshState,
    view_date: NaiveDate,
    query: TransactionQuery,
    form: FormValues,
    form_error: Option<String>,
    submitting: bool,
    seeding: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = crate::app_config();
        Logger::info_with_component(
            COMPONENT,
            &format!("Using API at {}", config.api_base_url),
        );

        let today = today();
        ctx.link().send_message(Msg::Refresh(RefreshTrigger::Startup));

        Self {
            gateway: Rc::new(api_client(&config)),
            data: RefreshState::new(),
            view_date: today,
            query: TransactionQuery::default(),
            form: FormValues::new(today),
            form_error: None,
            submitting: false,
            seeding: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh(trigger) => {
                self.refresh(ctx, trigger);
                true
            }
            Msg::Loaded {
                token,
                transactions,
                summary,
            } => self.data.finish(token, transactions, summary),
            Msg::FormEdited(edit) => {
                edit.apply(&mut self.form);
                self.form_error = None;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let draft = match self.form.validate(today()) {
                    Ok(draft) => draft,
                    Err(e) => {
                        self.form_error = Some(e.to_string());
                        return true;
                    }
                };
                self.form_error = None;
                self.submitting = true;

                let gateway = self.gateway.clone();
                ctx.link().send_future(async move {
                    Msg::Created(gateway.create_transaction(&draft).await)
                });
                true
            }
            Msg::Created(created) => {
                self.submitting = false;
                match self.form.settle(created.as_ref(), today()) {
                    SubmitOutcome::Saved => self.refresh(ctx, RefreshTrigger::FormSubmitted),
                    SubmitOutcome::Failed => gloo::dialogs::alert("Failed to add transaction"),
                }
                true
            }
            Msg::DeleteRequested(id) => {
                if !gloo::dialogs::confirm("Delete this transaction?") {
                    return false;
                }
                let gateway = self.gateway.clone();
                ctx.link().send_future(async move {
                    Msg::Deleted(gateway.delete_transaction(&id).await.is_some())
                });
                false
            }
            Msg::Deleted(acknowledged) => {
                if !acknowledged {
                    gloo::dialogs::alert("Failed to delete transaction");
                    return false;
                }
                self.refresh(ctx, RefreshTrigger::TransactionDeleted);
                true
            }
            Msg::ViewDateChanged(date) => {
                if date == self.view_date {
                    return false;
                }
                self.view_date = date;
                self.refresh(ctx, RefreshTrigger::DateChanged);
                true
            }
            Msg::FilterChanged(type_filter) => {
                self.query.type_filter = type_filter;
                self.refresh(ctx, RefreshTrigger::FilterChanged);
                true
            }
            Msg::SearchChanged(search) => {
                self.query.search = search;
                self.refresh(ctx, RefreshTrigger::SearchChanged);
                true
            }
            Msg::SeedDemo => {
                if self.seeding {
                    return false;
                }
                self.seeding = true;

                let gateway = self.gateway.clone();
                let drafts = demo_drafts(today());
                ctx.link().send_future(async move {
                    let mut created = 0;
                    for draft in &drafts {
                        if gateway.create_transaction(draft).await.is_some() {
                            created += 1;
                        } else {
                            log::warn!("Skipping demo transaction '{}'", draft.category);
                        }
                    }
                    Msg::Seeded(created)
                });
                true
            }
            Msg::Seeded(created) => {
                self.seeding = false;
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Seeded {} demo transactions", created),
                );
                self.refresh(ctx, RefreshTrigger::DemoSeeded);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let rows = self.query.apply(&self.data.transactions);
        let series = daily_series(&self.data.transactions, self.view_date);

        html! {
            <div class="app">
                <header class="app-header">
                    <h1>{"PocketPulse"}</h1>
                </header>

                <main class="main-content">
                    <FilterBar
                        view_date={self.view_date}
                        type_filter={self.query.type_filter}
                        search={self.query.search.clone()}
                        seeding={self.seeding}
                        on_date_change={link.callback(Msg::ViewDateChanged)}
                        on_filter_change={link.callback(Msg::FilterChanged)}
                        on_search_input={link.callback(Msg::SearchChanged)}
                        on_seed_demo={link.callback(|_| Msg::SeedDemo)}
                    />

                    <SummaryPanel summary={self.data.summary} view_date={self.view_date} />

                    <TransactionForm
                        values={self.form.clone()}
                        submitting={self.submitting}
                        form_error={self.form_error.clone()}
                        on_edit={link.callback(Msg::FormEdited)}
                        on_submit={link.callback(|_| Msg::Submit)}
                    />

                    <DailyChart {series} loading={self.data.loading} />

                    <TransactionTable
                        {rows}
                        loading={self.data.loading}
                        on_delete={link.callback(Msg::DeleteRequested)}
                    />
                </main>
            </div>
        }
    }
}

impl App {
    /// Single entry point for every reload. Only the response to the most
    /// recently issued token is applied.
    fn refresh(&mut self, ctx: &Context<Self>, trigger: RefreshTrigger) {
        let token = self.data.begin();
        Logger::debug_with_component(
            COMPONENT,
            &format!("Refresh #{} ({})", token.value(), trigger),
        );

        let gateway = self.gateway.clone();
        let view_date = self.view_date;
        ctx.link().send_future(async move {
            let transactions = gateway.list_transactions(None).await;
            let summary = gateway.fetch_summary(view_date).await;
            Msg::Loaded {
                token,
                transactions,
                summary,
            }
        });
    }
}
