pub mod leader;
pub mod points;
pub mod recruit;
pub mod recruitment_type;
pub mod settings;
