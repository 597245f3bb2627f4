//! # roadsigns
//!
//! Extract road sign and road marking illustrations from the Latvian road
//! traffic regulations published on likumi.lv.
//!
//! The page lists every sign and marking in HTML tables that merge cells
//! with `rowspan` and `colspan`. This crate parses the page into a tree,
//! finds the sign and marking sections, rebuilds the logical grid of each
//! table and pairs every number with its images. Each pair can then be
//! rendered as a small standalone HTML page.
//!
//! ## Quick Start
//!
//! ```
//! use roadsigns::{Config, extract_from_html, render_page};
//!
//! let markup = r#"<div class="doc-body">
//!   <div>Ceļa zīmes</div>
//!   <div><table><tbody>
//!     <tr><td>101</td><td><img src="/101.png"></td><td>Bīstams pagrieziens</td></tr>
//!   </tbody></table></div>
//!   <div>Ceļa apzīmējumi</div>
//!   <div><table><tbody>
//!     <tr><td><img src="/a.png"></td><td><img src="/b.png"></td></tr>
//!     <tr><td colspan="2">920</td></tr>
//!   </tbody></table></div>
//! </div>"#;
//!
//! let config = Config::default();
//! let entries = extract_from_html(markup, &config).unwrap();
//! assert_eq!(entries[0].title(), "101. Bīstams pagrieziens");
//! assert_eq!(entries[1].label, "920");
//! assert_eq!(entries[1].images.len(), 2);
//!
//! let page = render_page(&entries[1], &config.base_url);
//! assert!(page.contains("https://likumi.lv/b.png"));
//! ```

pub mod associate;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod output;
pub mod render;
pub mod sections;
pub mod table;
pub mod util;

pub use associate::{SignEntry, associate};
pub use config::Config;
pub use dom::{Document, parse_html};
pub use error::{Error, Result};
pub use extract::{extract_entries, extract_from_html};
pub use render::render_page;
pub use table::{CellKind, CellRange, Grid, LogicalCell, ResolveOptions};
