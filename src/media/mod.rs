//! Media module for favorite item representation and parsing.

pub mod item;
pub mod parser;

pub use item::{Asset, AssetKind, AssetSet, DownloadTarget, FavoriteItem, Tag};
pub use parser::{parse_coub, parse_coubs};
