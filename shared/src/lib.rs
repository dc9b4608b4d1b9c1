pub mod colors;
pub mod contact;
pub mod counter;
pub mod dataset;
pub mod filter;
pub mod lightbox;
pub mod reveal;
pub mod scroll;
pub mod selection;
pub mod site;
pub mod upload;

pub use dataset::{SiteData, site};
pub use filter::{Facet, FacetValue, FilterState, FilteredPage, MemberFacets, PhotoFacets, apply_filters};
pub use lightbox::{Lightbox, NavKey};
pub use selection::Selection;
pub use site::*;
