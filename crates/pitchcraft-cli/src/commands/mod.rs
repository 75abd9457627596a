pub mod competitors;
pub mod dispatch;
pub mod generate;
pub mod industry;
pub mod revenue_models;
pub mod schema;
pub mod shared;
