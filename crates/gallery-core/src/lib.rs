pub mod builder;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod gallery;
pub mod interaction;
pub mod layout;
pub mod lifecycle;
pub mod scene;
pub mod wrap;

pub use builder::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use error::{GalleryError, Result};
pub use events::*;
pub use gallery::*;
pub use interaction::*;
pub use layout::*;
pub use lifecycle::*;
pub use scene::*;
pub use wrap::*;
