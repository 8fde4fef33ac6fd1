mod breakpoint;
mod ids;
mod layout;
mod manager;
mod module;
mod style;
mod track;

pub use breakpoint::Breakpoint;
pub use ids::{ModuleId, TrackId};
pub use layout::{LayoutSet, PlacementRect};
pub use manager::{Extent, ManagerPosition};
pub use module::ModuleConfig;
pub use style::{
    ModuleSizeConfig, ModuleStyleConfig, SizeDimension, SizeMap, StyleField, StyleMap,
};
pub use track::Track;
