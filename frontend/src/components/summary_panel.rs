use crate::services::currency::format_currency;
use chrono::NaiveDate;
use shared::Summary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: Summary,
    pub view_date: NaiveDate,
}

/// Server totals for the viewed date. A failed fetch shows up as zeros.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let summary = &props.summary;
    let field = |id: &'static str, label: &'static str, amount: f64| {
        html! {
            <div class="summary-item">
                <span class="summary-label">{label}</span>
                <span class="summary-value" id={id}>{format_currency(amount)}</span>
            </div>
        }
    };

    html! {
        <section class="card summary-panel">
            <h2>{format!("Summary for {}", props.view_date.format("%Y-%m-%d"))}</h2>
            <div class="summary-grid">
                {field("dailyIncome", "Income", summary.daily.income)}
                {field("dailyExpense", "Expense", summary.daily.expense)}
                {field("dailyBalance", "Day balance", summary.daily.balance)}
                {field("monthBalance", "Month balance", summary.month.balance)}
                {field("lifetimeBalance", "Lifetime balance", summary.lifetime.balance)}
            </div>
        </section>
    }
}
