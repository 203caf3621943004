//! Leptos application: selectors, product grid, status line.

use leptos::*;

use techstore_products::{DiscountBand, SortOrder, ViewOption};

use crate::frontend::api;
use crate::types::{Column, GridCell, GridRow, GridView, IMAGE_SIZE_PX, ROW_HEIGHT_PX, SelectorOption};

/// Main application component.
///
/// Holds only the two selector values; every change re-requests a full render.
#[component]
pub fn App() -> impl IntoView {
    let (band, set_band) = create_signal(DiscountBand::default());
    let (order, set_order) = create_signal(SortOrder::default());

    let options = create_resource(|| (), |_| async move { api::view_options().await.ok() });

    let grid = create_resource(
        move || (band.get(), order.get()),
        |(band, order)| async move { api::catalog_view(band, order).await },
    );

    // Startup load warning, shown once.
    spawn_local(async move {
        if let Ok(Some(warning)) = api::load_warning().await {
            if let Some(w) = web_sys::window() {
                let _ = w.alert_with_message(&warning.to_string());
            }
        }
    });

    view! {
        <div class="app">
            <header class="filter-panel">
                <label>"Фильтр по скидке:"</label>
                <select on:change=move |ev| {
                    if let Some(selected) = selected_option::<DiscountBand>(&event_target_value(&ev)) {
                        set_band.set(selected);
                    }
                }>
                    {move || {
                        options
                            .get()
                            .flatten()
                            .map(|o| option_list(o.discount_bands))
                    }}
                </select>

                <label>"Сортировка:"</label>
                <select on:change=move |ev| {
                    if let Some(selected) = selected_option::<SortOrder>(&event_target_value(&ev)) {
                        set_order.set(selected);
                    }
                }>
                    {move || {
                        options
                            .get()
                            .flatten()
                            .map(|o| option_list(o.sort_orders))
                    }}
                </select>
            </header>

            <main>
                {move || {
                    grid.get().map(|result| match result {
                        Ok(grid) => grid_table(grid).into_view(),
                        Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                    })
                }}
            </main>
        </div>
    }
}

fn selected_option<T: ViewOption>(value: &str) -> Option<T> {
    value.parse::<usize>().ok().and_then(|index| T::from_index(index).ok())
}

fn option_list(options: Vec<SelectorOption>) -> impl IntoView {
    options
        .into_iter()
        .map(|o| view! { <option value=o.index.to_string()>{o.label}</option> })
        .collect_view()
}

fn grid_table(grid: GridView) -> impl IntoView {
    let GridView {
        columns,
        rows,
        status,
        ..
    } = grid;

    view! {
        <table class="products">
            <thead>
                <tr>
                    {columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(grid_row).collect_view()}
            </tbody>
        </table>
        <div class="status" style="text-align: right">{status}</div>
    }
}

fn grid_row(row: GridRow) -> impl IntoView {
    view! {
        <tr style=format!("height: {}px", ROW_HEIGHT_PX)>
            {row.cells.into_iter().map(grid_cell).collect_view()}
        </tr>
    }
}

fn grid_cell(cell: GridCell) -> impl IntoView {
    let style = cell
        .background
        .map(|color| format!("background-color: {}", color))
        .unwrap_or_default();
    let title = cell.tooltip.unwrap_or_default();

    let content = if cell.column == Column::Image {
        view! {
            <div
                class="image-placeholder"
                style=format!("width: {0}px; height: {0}px", IMAGE_SIZE_PX)
            ></div>
        }
        .into_view()
    } else {
        cell.text.into_view()
    };

    view! { <td style=style title=title>{content}</td> }
}
