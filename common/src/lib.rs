mod nal_unit;
mod nal_unit_type;
mod start_code;

pub use nal_unit::{NalUnit, NalUnitHeader, RefPriority};
pub use nal_unit_type::NalUnitType;
pub use start_code::StartCode;
