//! Demo-state synchronization: the selection store, the loop-free URL
//! binding and the two history lists.
//!
//! ```text
//!   URL ──navigated()──▶ SelectionStore ──▶ views (read-only)
//!    ▲                        │
//!    └──── sync_to_url ◀──────┴── update(patch) ◀── views
//! ```

pub mod catalog;
pub mod config;
pub mod instances;
pub mod location;
pub mod lookup;
pub mod panel;
pub mod recent;
pub mod routes;
pub mod session;
pub mod store;
pub mod url_sync;

pub use config::{ConfigError, DemoConfig, MAX_RECENT_CAPACITY};
pub use instances::{Instance, InstanceHistory};
pub use location::{Location, LocationError, MemoryLocation};
pub use panel::PanelState;
pub use recent::RecentHistory;
pub use session::DemoSession;
pub use store::{Change, SelectionStore, SubscriptionId, Transition};
