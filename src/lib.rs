// ============================================================================
// SAFETRAVEL AI - CLIENTE WEB (Yew + WASM)
// ============================================================================
// - Views: pantallas por ruta
// - ViewModels: lógica de cada pantalla, sin DOM
// - Stores: sesión, ubicación, tema, contactos, notificaciones
// - Services: llamadas al backend y APIs del navegador
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use app::App;
