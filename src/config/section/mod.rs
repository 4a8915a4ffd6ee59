//! Configuration section definitions.
//!
//! | Module    | TOML Section | Purpose                                 |
//! |-----------|--------------|-----------------------------------------|
//! | `build`   | `[build]`    | Content root, site root, registry path  |
//! | `extract` | `[extract]`  | Metadata defaulting rules               |
//! | `search`  | `[search]`   | Fuzzy matching parameters               |

pub mod build;
mod extract;
mod search;

pub use build::{BuildSectionConfig, DEFAULT_URL_PREFIX};
pub use extract::ExtractConfig;
pub use search::SearchConfig;
