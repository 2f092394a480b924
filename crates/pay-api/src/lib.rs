//! # pay-api
//!
//! HTTP API layer for mode-checkout.
//!
//! Every request is handled independently; the only shared state is the
//! read-only dispatcher.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/modes` | Supported payment modes |
//! | POST | `/api/v1/checkout` | `{"mode": "paypal", "amount": 150.75}` → payment result |
//! | POST | `/api/v1/checkout/batch` | `{"payments": [...]}` → results and summary |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
