pub mod leader;
pub mod point_value;
pub mod recruit;
pub mod recruitment_type;
pub mod setting;
pub mod window;

pub use leader::Leader;
pub use point_value::PointValue;
pub use recruit::{Recruit, RecruitStatus};
pub use recruitment_type::{RecruitmentType, TypeWithPoints};
pub use setting::Setting;
pub use window::Window;
