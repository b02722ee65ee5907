//! The components module contains all shared components for the app. Components are the building blocks of dioxus apps.
pub mod calculator;
pub mod pico;
pub mod rates_panel;
