use crate::shared::list_utils::SortOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ListingsState {
    pub sort_option: SortOption,
}

pub fn create_state() -> RwSignal<ListingsState> {
    RwSignal::new(ListingsState::default())
}
