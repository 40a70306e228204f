//! Static lookups consumed by the store's derived values.

pub mod clients;
pub mod users;

pub use clients::{ClientProfile, client_name, clients, find_client, lookup_theme};
pub use users::lookup_user_profile;
