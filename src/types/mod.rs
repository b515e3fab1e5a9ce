mod tract;
mod tract_id;

pub use tract::Tract;
pub use tract_id::TractId;
