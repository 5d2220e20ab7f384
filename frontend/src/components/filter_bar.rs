use crate::services::date_utils::{parse_input_value, to_input_value};
use chrono::NaiveDate;
use shared::TypeFilter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub view_date: NaiveDate,
    pub type_filter: TypeFilter,
    pub search: String,
    pub seeding: bool,

    pub on_date_change: Callback<NaiveDate>,
    pub on_filter_change: Callback<TypeFilter>,
    pub on_search_input: Callback<String>,
    pub on_seed_demo: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_date_change = {
        let on_date_change = props.on_date_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Cleared or half-typed dates keep the current view
            if let Some(date) = parse_input_value(&input.value()) {
                on_date_change.emit(date);
            }
        })
    };

    let on_filter_change = {
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TypeFilter>() {
                Ok(filter) => on_filter_change.emit(filter),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_search_input = {
        let on_search_input = props.on_search_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_input.emit(input.value());
        })
    };

    let on_seed_click = {
        let on_seed_demo = props.on_seed_demo.clone();
        Callback::from(move |_: MouseEvent| on_seed_demo.emit(()))
    };

    html! {
        <section class="card filter-bar">
            <div class="form-group">
                <label for="viewDate">{"View date"}</label>
                <input
                    type="date"
                    id="viewDate"
                    value={to_input_value(props.view_date)}
                    onchange={on_date_change}
                />
            </div>

            <div class="form-group">
                <label for="filterType">{"Show"}</label>
                <select id="filterType" onchange={on_filter_change}>
                    {for TypeFilter::ALL.iter().map(|filter| html! {
                        <option value={filter.as_str()} selected={*filter == props.type_filter}>
                            {filter.label()}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="searchText">{"Search"}</label>
                <input
                    type="search"
                    id="searchText"
                    placeholder="Description or category"
                    value={props.search.clone()}
                    oninput={on_search_input}
                />
            </div>

            <button class="btn btn-secondary" onclick={on_seed_click} disabled={props.seeding}>
                {if props.seeding { "Seeding..." } else { "Seed demo data" }}
            </button>
        </section>
    }
}
