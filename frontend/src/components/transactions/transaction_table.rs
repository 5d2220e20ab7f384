use crate::services::currency::format_currency;
use shared::{Transaction, TransactionId, TransactionType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Rows already filtered and ordered for display
    pub rows: Vec<Transaction>,
    pub loading: bool,
    pub on_delete: Callback<TransactionId>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let body = if props.rows.is_empty() {
        html! {
            <tr><td colspan="5" class="muted">{"No transactions yet."}</td></tr>
        }
    } else {
        html! { <>{for props.rows.iter().map(|tx| row(tx, &props.on_delete))}</> }
    };

    html! {
        <section class="card transactions-section">
            <h2>{"Transactions"}</h2>

            {if props.loading && props.rows.is_empty() {
                html! { <div class="loading">{"Loading transactions..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Amount"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody id="txTableBody">{body}</tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}

fn row(tx: &Transaction, on_delete: &Callback<TransactionId>) -> Html {
    let amount_class = match tx.kind {
        TransactionType::Income => "amount positive",
        TransactionType::Expense => "amount negative",
    };
    let onclick = {
        let on_delete = on_delete.clone();
        let id = tx.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <tr key={tx.id.to_string()}>
            <td class="date">{tx.date.format("%Y-%m-%d").to_string()}</td>
            <td>{tx.kind.label()}</td>
            <td class="category">
                {&tx.category}
                {if tx.description.is_empty() {
                    html! {}
                } else {
                    html! { <div class="muted description">{&tx.description}</div> }
                }}
            </td>
            <td class={amount_class}>
                {format!("{} {}", tx.kind.sign(), format_currency(tx.amount))}
            </td>
            <td>
                <button class="small-btn delete" {onclick}>{"Delete"}</button>
            </td>
        </tr>
    }
}
