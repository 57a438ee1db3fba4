use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::domain::entities::filter::Facet;
use crate::infra::http::census_client::HttpCensusSource;
use crate::usecase::services::query_service::QueryService;
use crate::usecase::state_machine::{reduce, Action, Effect, ViewerState};

pub type CensusQueryService = QueryService<HttpCensusSource>;

#[derive(Clone)]
pub struct AppState {
    pub viewer: Signal<ViewerState>,
    pub open_dropdown: Signal<Option<Facet>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
    service: Rc<CensusQueryService>,
}

impl AppState {
    pub fn new(service: Rc<CensusQueryService>) -> Self {
        Self {
            viewer: use_signal(ViewerState::default),
            open_dropdown: use_signal(|| None::<Facet>),
            dropdown_pos: use_signal(|| None::<(f64, f64)>),
            service,
        }
    }

    /// Applies `action` to the current snapshot and runs the fetch it asks
    /// for. The fetch outcome is dispatched back when it resolves; responses
    /// are applied in arrival order.
    pub fn dispatch(&self, action: Action) {
        let mut viewer = self.viewer;
        let (next, effect) = reduce(&viewer.peek(), action);
        viewer.set(next);

        if let Some(Effect::Fetch(query)) = effect {
            debug!(rank = query.rank, "dispatching census fetch");
            let state = self.clone();
            spawn(async move {
                let outcome = state.service.resolve(query).await;
                state.dispatch(outcome);
            });
        }
    }
}
