pub mod common;
pub mod leader;
pub mod recruit;
pub mod recruitment_type;
pub mod scorecard;
pub mod settings;
