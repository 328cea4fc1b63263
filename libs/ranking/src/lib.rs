pub mod insights;
pub mod metrics;
pub mod recommend;
pub mod search;
pub mod text;
