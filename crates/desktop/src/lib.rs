//! `techstore-desktop`
//!
//! **Responsibility:** desktop inventory browser over the product catalog.
//!
//! This crate provides:
//! - the grid model (rows, cells, highlight, status line)
//! - the catalog service that re-renders on every selection change
//! - Tauri commands (feature `tauri`) and the Leptos frontend (wasm32)
//! - a plain-text renderer for headless runs

pub mod grid;
pub mod service;
pub mod text;
pub mod types;

#[cfg(feature = "tauri")]
pub mod commands;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use service::CatalogService;
pub use types::{Column, GridCell, GridRow, GridView, HIGHLIGHT_COLOR, ViewOptions};
