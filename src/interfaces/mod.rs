pub mod app;
pub mod components;
pub mod dashboard_components;
pub mod design_system;
pub mod ui;
pub mod ui_components;
pub mod view_models;
