pub mod attendee;
pub mod catalog;
pub mod location;
pub mod meeting;
pub mod member;
pub mod resource;
pub mod series;
pub mod style;
pub mod tags;
pub mod user;
