//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blogmeta.toml`:
//!
//! | Module       | TOML Section     | Purpose                              |
//! |--------------|------------------|--------------------------------------|
//! | `appearance` | `[appearance]`   | Color theme, sticky navbar           |
//! | `assets`     | `[assets]`       | Logo and social banner paths         |
//! | `links`      | `[links]`        | Site, repository and profile URLs    |
//! | `search`     | `[search]`       | Search provider (kbar or algolia)    |
//! | `site`       | `[site]`         | Title, author, language, contact     |

mod appearance;
mod assets;
mod links;
mod search;
mod site;

pub use appearance::{AppearanceSection, Theme};
pub use assets::AssetsSection;
pub use links::LinksSection;
pub use search::{
    AlgoliaConfig, AlgoliaSection, KbarConfig, KbarSection, SearchConfig, SearchProvider,
    SearchSection,
};
pub use site::SiteSection;
