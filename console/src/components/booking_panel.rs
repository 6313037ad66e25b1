//! Booking form: date, arrival slot, party size, and customer contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is a controlled view over the shared `BookingForm` signal. The
//! detail panel's booking button reads the contact fields from the same
//! signal; date and slot problems are shown here as hints only.

use leptos::prelude::*;

use chrono::Local;
use floorplan::booking::BookingForm;
use floorplan::engine::EditorCore;
use floorplan::panel::booking_panel;

use crate::util::form_input::{
    format_date_input, parse_date_input, parse_guests_input, parse_time_slot_input,
};

/// Booking form panel.
#[component]
pub fn BookingPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let form = expect_context::<RwSignal<BookingForm>>();
    let model = Memo::new(move |_| {
        let today = Local::now().date_naive();
        form.with(|f| editor.with(|core| booking_panel(&core.floor, f, today, &core.config)))
    });

    let available_label = move || {
        let count = model.with(|m| m.available_tables);
        if count == 1 { "1 table available".to_owned() } else { format!("{count} tables available") }
    };

    let slot_options = move || {
        let selected = form.with(|f| f.time_slot);
        model
            .get()
            .time_slots
            .into_iter()
            .map(|slot| {
                let value = slot.to_string();
                view! {
                    <option value=value.clone() selected=selected == Some(slot)>
                        {value.clone()}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    let error_hints = move || {
        model
            .get()
            .errors
            .into_iter()
            .map(|e| view! { <li class="booking-panel__hint">{e.to_string()}</li> })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="booking-panel">
            <h3 class="booking-panel__title">"Booking"</h3>
            <p class="booking-panel__available">{available_label}</p>

            <label class="booking-panel__field">
                "Date"
                <input
                    type="date"
                    min=move || format_date_input(Some(model.with(|m| m.min_date)))
                    prop:value=move || form.with(|f| format_date_input(f.date))
                    on:input=move |ev| {
                        let date = parse_date_input(&event_target_value(&ev));
                        form.update(|f| f.date = date);
                    }
                />
            </label>

            <label class="booking-panel__field">
                "Time"
                <select on:change=move |ev| {
                    let slot = parse_time_slot_input(&event_target_value(&ev));
                    form.update(|f| f.time_slot = slot);
                }>
                    <option value="" selected=move || form.with(|f| f.time_slot.is_none())>
                        "Select a time"
                    </option>
                    {slot_options}
                </select>
            </label>

            <label class="booking-panel__field">
                "Guests"
                <input
                    type="number"
                    min=move || model.with(|m| m.min_guests.to_string())
                    max=move || model.with(|m| m.max_guests.to_string())
                    prop:value=move || form.with(|f| f.guests.to_string())
                    on:input=move |ev| {
                        if let Some(guests) = parse_guests_input(&event_target_value(&ev)) {
                            let config = editor.with_untracked(|core| core.config.clone());
                            form.update(|f| f.set_guests(guests, &config));
                        }
                    }
                />
            </label>

            <label class="booking-panel__field">
                "Name"
                <input
                    type="text"
                    autocomplete="name"
                    prop:value=move || form.with(|f| f.customer.name.clone())
                    on:input=move |ev| form.update(|f| f.customer.name = event_target_value(&ev))
                />
            </label>

            <label class="booking-panel__field">
                "Phone"
                <input
                    type="tel"
                    autocomplete="tel"
                    prop:value=move || form.with(|f| f.customer.phone.clone())
                    on:input=move |ev| form.update(|f| f.customer.phone = event_target_value(&ev))
                />
            </label>

            <ul class="booking-panel__hints">{error_hints}</ul>
        </section>
    }
}
