//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendee_repo;
pub mod location_repo;
pub mod meeting_repo;
pub mod member_repo;
pub mod resource_repo;
pub mod series_repo;
pub mod series_resource_repo;
pub mod style_repo;
pub mod style_resource_repo;
pub mod tag_repo;
pub mod user_repo;

mod slug_hook;

pub use attendee_repo::AttendeeRepo;
pub use location_repo::LocationRepo;
pub use meeting_repo::MeetingRepo;
pub use member_repo::MemberRepo;
pub use resource_repo::ResourceRepo;
pub use series_repo::SeriesRepo;
pub use series_resource_repo::SeriesResourceRepo;
pub use style_repo::StyleRepo;
pub use style_resource_repo::StyleResourceRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
