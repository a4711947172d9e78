pub mod brand_rules;
pub mod campaigns;
pub mod dashboard;
pub mod specifications;
