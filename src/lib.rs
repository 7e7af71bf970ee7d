//! odb, an interactive terminal browser for paginated OData-style REST
//! resources.
//!
//! Two cores: the [`ui`] module is a screen/interaction engine (composable
//! renderable elements, exactly one input handler per screen, a synchronous
//! keyboard loop with selective full/partial repaints); the [`client`]
//! module is a generic paginated resource client (cursor-based page chain,
//! generic filter/select query construction, uniform CRUD over an injected
//! transport). The [`app`] module wires both to concrete resource types.

pub mod app;
pub mod client;
pub mod config;
pub mod ui;
