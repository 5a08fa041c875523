pub mod age;
pub mod gender;
pub mod gun_count;
pub mod gun_type;

pub use age::age_distribution;
pub use gender::gender_table;
pub use gun_count::gun_count_table;
pub use gun_type::gun_type_counts;
