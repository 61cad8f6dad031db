pub mod blog_post;
pub mod contact;
pub mod option_fields;
pub mod project;
pub mod site_config;
pub mod skill;
pub mod validation;
