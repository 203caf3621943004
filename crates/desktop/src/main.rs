//! Desktop application entry point.
//!
//! Native builds run the Tauri app (feature `tauri`) or print the grid as
//! text. On wasm32 the same binary is the Trunk-built frontend.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(all(feature = "tauri", not(target_arch = "wasm32")))]
fn main() -> anyhow::Result<()> {
    use techstore_desktop::CatalogService;
    use techstore_desktop::commands::*;
    use techstore_infra::CatalogConfig;

    techstore_observability::init();

    let service = CatalogService::load(&CatalogConfig::from_env());

    tauri::Builder::default()
        .manage(service)
        .invoke_handler(tauri::generate_handler![
            view_options,
            catalog_view,
            catalog_view_by_index,
            load_warning,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}

#[cfg(all(not(feature = "tauri"), not(target_arch = "wasm32")))]
fn main() -> anyhow::Result<()> {
    use std::io::Write;

    use techstore_desktop::CatalogService;
    use techstore_desktop::text::render_text;
    use techstore_infra::CatalogConfig;
    use techstore_products::ViewQuery;

    techstore_observability::init();

    let service = CatalogService::load(&CatalogConfig::from_env());
    if let Some(warning) = service.load_warning() {
        eprintln!("{warning}");
    }

    let grid = service.view(ViewQuery::default());
    std::io::stdout().write_all(render_text(&grid).as_bytes())?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    techstore_desktop::frontend::mount();
}
