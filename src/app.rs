use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::config::ViewerConfig;
use crate::domain::entities::filter::{
    AgeFilter, CountryFilter, EducationFilter, Facet, FilterValue,
};
use crate::infra::http::census_client::HttpCensusSource;
use crate::ui::state::app_state::{AppState, CensusQueryService};
use crate::ui::state::view_model::{
    filter_options, pager_view, status_label, table_view, FilterOption, TableView, TABLE_COLUMNS,
};
use crate::usecase::services::query_service::QueryService;
use crate::usecase::state_machine::Action;

fn dropdown_label(options: &[FilterOption], selected: &str) -> String {
    options
        .iter()
        .find(|opt| opt.value == selected)
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "Any".to_string())
}

fn connect_census_service() -> Result<Rc<CensusQueryService>, String> {
    let config = ViewerConfig::from_env();
    HttpCensusSource::new(&config)
        .map(|source| Rc::new(QueryService::new(source)))
        .map_err(|err| format!("{err:#}"))
}

#[component]
fn FilterDropdown(
    facet: Facet,
    options: Vec<FilterOption>,
    selected: String,
    mut open_dropdown: Signal<Option<Facet>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_select: EventHandler<String>,
) -> Element {
    let is_open = open_dropdown() == Some(facet);
    let label = facet.label();
    let selected_label = dropdown_label(&options, &selected);
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));

    rsx! {
        div {
            class: "form-group",
            style: "position: relative; display: flex; align-items: center; gap: 6px; margin-bottom: 8px;",
            label { "{label}" }
            button {
                r#type: "button",
                class: "form-control",
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown() == Some(facet) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(facet));
                },
                "{selected_label}"
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 220px; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let background = if value == selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            key: "{value}",
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                open_dropdown.set(None);
                                on_select.call(value.clone());
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn Pager(
    label: String,
    has_next: bool,
    at_floor: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let prev_opacity = if at_floor { "0.5" } else { "1" };
    let next_opacity = if has_next { "1" } else { "0.5" };

    rsx! {
        nav {
            ul {
                class: "align pagination",
                style: "display: flex; gap: 4px; list-style: none; padding: 0;",
                li {
                    class: "page-item",
                    button {
                        r#type: "button",
                        class: "page-link",
                        style: "opacity: {prev_opacity};",
                        title: "Previous",
                        onclick: move |_| on_prev.call(()),
                        "«"
                    }
                }
                li {
                    class: "page-item",
                    button { r#type: "button", class: "page-link", "{label}" }
                }
                li {
                    class: "page-item",
                    button {
                        r#type: "button",
                        class: "page-link",
                        style: "opacity: {next_opacity};",
                        title: "Next",
                        onclick: move |_| on_next.call(()),
                        "»"
                    }
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let service = match use_hook(connect_census_service) {
        Ok(service) => service,
        Err(err) => {
            return rsx! {
                div {
                    p { "Census service is not configured: {err}" }
                }
            };
        }
    };

    let state = AppState::new(service);

    let state_for_start = state.clone();
    use_effect(move || state_for_start.dispatch(Action::Start));

    let mut open_dropdown = state.open_dropdown;
    let viewer = state.viewer.read().clone();
    let pager = pager_view(&viewer);
    let status = status_label(&viewer);

    let state_for_age = state.clone();
    let state_for_education = state.clone();
    let state_for_country = state.clone();
    let state_for_prev = state.clone();
    let state_for_next = state.clone();

    let body = match table_view(&viewer) {
        TableView::Unavailable { message } => rsx! {
            div {
                class: "no-data-error",
                style: "margin-top: 12px; padding: 12px; color: #842029; background: #f8d7da; border-radius: 6px;",
                "{message}"
            }
        },
        TableView::Table { rows } => rsx! {
            div {
                class: "table-responsive",
                table {
                    class: "adjust table",
                    style: "border-collapse: collapse; width: 100%; margin-top: 12px;",
                    thead {
                        class: "thead-dark",
                        tr {
                            for column in TABLE_COLUMNS {
                                th {
                                    style: "text-align: left; padding: 6px 10px; background: #212529; color: #fff;",
                                    "{column}"
                                }
                            }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.key}",
                                for cell in row.cells {
                                    td {
                                        style: "padding: 6px 10px; border-bottom: 1px solid #dee2e6;",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
                Pager {
                    label: pager.label.clone(),
                    has_next: pager.has_next,
                    at_floor: pager.at_floor,
                    on_prev: move |_| state_for_prev.dispatch(Action::PreviousPage),
                    on_next: move |_| state_for_next.dispatch(Action::NextPage),
                }
            }
        },
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: sans-serif;",
            onclick: move |_| open_dropdown.set(None),
            div {
                class: "filters",
                FilterDropdown {
                    facet: Facet::Age,
                    options: filter_options::<AgeFilter>(),
                    selected: viewer.filters.age.token().to_string(),
                    open_dropdown: state.open_dropdown,
                    dropdown_pos: state.dropdown_pos,
                    on_select: move |token: String| match token.parse::<AgeFilter>() {
                        Ok(age) => state_for_age.dispatch(Action::SelectAge(age)),
                        Err(err) => warn!(error = %err, "ignoring filter selection"),
                    },
                }
                FilterDropdown {
                    facet: Facet::Education,
                    options: filter_options::<EducationFilter>(),
                    selected: viewer.filters.education.token().to_string(),
                    open_dropdown: state.open_dropdown,
                    dropdown_pos: state.dropdown_pos,
                    on_select: move |token: String| match token.parse::<EducationFilter>() {
                        Ok(education) => state_for_education.dispatch(Action::SelectEducation(education)),
                        Err(err) => warn!(error = %err, "ignoring filter selection"),
                    },
                }
                FilterDropdown {
                    facet: Facet::Country,
                    options: filter_options::<CountryFilter>(),
                    selected: viewer.filters.country.token().to_string(),
                    open_dropdown: state.open_dropdown,
                    dropdown_pos: state.dropdown_pos,
                    on_select: move |token: String| match token.parse::<CountryFilter>() {
                        Ok(country) => state_for_country.dispatch(Action::SelectCountry(country)),
                        Err(err) => warn!(error = %err, "ignoring filter selection"),
                    },
                }
            }
            p {
                style: "margin: 4px 0; color: #666; font-size: 12px;",
                "{status}"
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn age_dropdown() -> Element {
        let open_dropdown = use_signal(|| None::<Facet>);
        let dropdown_pos = use_signal(|| None::<(f64, f64)>);

        rsx! {
            FilterDropdown {
                facet: Facet::Age,
                options: filter_options::<AgeFilter>(),
                selected: "over50".to_string(),
                open_dropdown,
                dropdown_pos,
                on_select: move |_: String| {},
            }
        }
    }

    fn first_page_pager() -> Element {
        rsx! {
            Pager {
                label: "1".to_string(),
                has_next: true,
                at_floor: true,
                on_prev: move |_| {},
                on_next: move |_| {},
            }
        }
    }

    #[test]
    fn filter_toggle_does_not_submit() {
        let html = render(age_dropdown);

        assert!(html.contains("Select Age"), "{html}");
        assert!(html.contains("Older than 50 years old"), "{html}");
        assert_eq!(html.matches("<button").count(), 1, "{html}");
        assert!(html.contains("type=\"button\""), "toggle should be a plain button: {html}");
    }

    #[test]
    fn pager_buttons_do_not_submit() {
        let html = render(first_page_pager);

        assert_eq!(html.matches("<button").count(), 3, "{html}");
        assert_eq!(html.matches("type=\"button\"").count(), 3, "{html}");
    }
}
