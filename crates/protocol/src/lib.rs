pub mod profile;
pub mod selection;
pub mod theme;
pub mod types;

pub use profile::{TechProficiency, UserProfile};
pub use selection::{Selection, SelectionPatch, ThemeMode, UnknownValue, Version};
pub use theme::{ThemeColors, ThemeToken};
pub use types::Color;
