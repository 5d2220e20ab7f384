use shared::{TransactionForm as FormValues, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A single edited field of the transaction form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Kind(TransactionType),
    Amount(String),
    Category(String),
    Date(String),
    Description(String),
}

impl FormEdit {
    pub fn apply(self, form: &mut FormValues) {
        match self {
            FormEdit::Kind(kind) => form.kind = kind,
            FormEdit::Amount(amount) => form.amount = amount,
            FormEdit::Category(category) => form.category = category,
            FormEdit::Date(date) => form.date = date,
            FormEdit::Description(description) => form.description = description,
        }
    }
}

const KINDS: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub values: FormValues,
    pub submitting: bool,
    pub form_error: Option<String>,

    pub on_edit: Callback<FormEdit>,
    pub on_submit: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let text_input = |make: fn(String) -> FormEdit| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(make(input.value()));
        })
    };

    let on_kind_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<TransactionType>() {
                on_edit.emit(FormEdit::Kind(kind));
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let values = &props.values;

    html! {
        <section class="card tx-form-section">
            <h2>{"Add Transaction"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="tx-form" {onsubmit}>
                <div class="form-group">
                    <label for="txType">{"Type"}</label>
                    <select id="txType" onchange={on_kind_change} disabled={props.submitting}>
                        {for KINDS.iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={*kind == values.kind}>
                                {kind.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="txAmount">{"Amount"}</label>
                    <input
                        type="number"
                        id="txAmount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={values.amount.clone()}
                        onchange={text_input(FormEdit::Amount)}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="txCategory">{"Category"}</label>
                    <input
                        type="text"
                        id="txCategory"
                        placeholder={values.kind.label()}
                        value={values.category.clone()}
                        onchange={text_input(FormEdit::Category)}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="txDate">{"Date"}</label>
                    <input
                        type="date"
                        id="txDate"
                        value={values.date.clone()}
                        onchange={text_input(FormEdit::Date)}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="txDesc">{"Description"}</label>
                    <input
                        type="text"
                        id="txDesc"
                        placeholder="Optional"
                        value={values.description.clone()}
                        onchange={text_input(FormEdit::Description)}
                        disabled={props.submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Saving..." } else { "Add" }}
                </button>
            </form>
        </section>
    }
}
