//! uigen: prompt-to-component generation with a sandboxed live preview.
//!
//! DESIGN
//! ======
//! `preview` is the pure core: it turns raw model output into component
//! source plus a self-contained HTML document. `llm` and `services` reach the
//! model; `routes` exposes both over HTTP.

pub mod config;
pub mod error;
pub mod llm;
pub mod preview;
pub mod routes;
pub mod services;
pub mod state;
