mod builder;
mod region;

pub use builder::build_region;
pub use region::Region;
