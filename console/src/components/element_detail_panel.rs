//! Detail panel for the selected table, with the gated booking action.

#[cfg(test)]
#[path = "element_detail_panel_test.rs"]
mod element_detail_panel_test;

use leptos::prelude::*;

use floorplan::booking::BookingForm;
use floorplan::doc::{ElementId, TableStatus};
use floorplan::engine::EditorCore;
use floorplan::panel::{DetailPanelModel, detail_panel, format_price};

use crate::state::session::SessionState;
use crate::util::category_icon::get_category_icon;

/// Detail panel for the selected table.
///
/// Renders nothing when no table is selected or the selected id is no longer
/// on the floor. `on_book` is invoked with the table id only when the booking
/// gate is open.
#[component]
pub fn ElementDetailPanel(on_book: Callback<ElementId>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let form = expect_context::<RwSignal<BookingForm>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let model = Memo::new(move |_| {
        form.with(|f| editor.with(|core| detail_panel(&core.floor, core.selection(), &f.customer)))
    });
    let booking_pending = move || session.with(|s| s.booking_in_flight.is_some());

    move || {
        model
            .get()
            .map(|m| render_detail(m, on_book, booking_pending))
    }
}

fn render_detail(
    model: DetailPanelModel,
    on_book: Callback<ElementId>,
    booking_pending: impl Fn() -> bool + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let id = model.id;
    let enabled = model.book_enabled();
    let label = model.book_label();
    let on_click = move |_| {
        if enabled && !booking_pending() {
            on_book.run(id);
        }
    };

    view! {
        <aside class="detail-panel">
            <h3 class="detail-panel__title">
                <span class="detail-panel__icon">{get_category_icon(&model.category)}</span>
                {model.name.clone()}
            </h3>
            <dl class="detail-panel__fields">
                <dt>"Category"</dt>
                <dd>{model.category.clone()}</dd>
                <dt>"Capacity"</dt>
                <dd>{format!("{} guests", model.capacity)}</dd>
                <dt>"Price"</dt>
                <dd>{format_price(model.price)}</dd>
                <dt>"Status"</dt>
                <dd class=status_class(model.status)>{model.status.label()}</dd>
                {model.special_features.clone().map(|features| view! {
                    <dt>"Special Features"</dt>
                    <dd>{features}</dd>
                })}
            </dl>
            <button
                class="btn btn--primary detail-panel__book"
                disabled=move || !enabled || booking_pending()
                on:click=on_click
            >
                {move || if booking_pending() { "Booking…" } else { label }}
            </button>
        </aside>
    }
}

fn status_class(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Available => "detail-panel__status detail-panel__status--available",
        TableStatus::Booked => "detail-panel__status detail-panel__status--booked",
        TableStatus::Reserved => "detail-panel__status detail-panel__status--reserved",
        TableStatus::Unavailable => "detail-panel__status detail-panel__status--unavailable",
    }
}
