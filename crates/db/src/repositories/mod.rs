//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod blog_category_repo;
pub mod blog_comment_repo;
pub mod blog_post_repo;
pub mod certification_repo;
pub mod contact_message_repo;
pub mod like_repo;
pub mod project_image_repo;
pub mod project_repo;
pub mod service_repo;
pub mod session_repo;
pub mod site_section_repo;
pub mod skill_repo;
pub mod social_link_repo;
pub mod user_repo;

pub use about_repo::AboutRepo;
pub use blog_category_repo::BlogCategoryRepo;
pub use blog_comment_repo::BlogCommentRepo;
pub use blog_post_repo::BlogPostRepo;
pub use certification_repo::CertificationRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use like_repo::LikeRepo;
pub use project_image_repo::ProjectImageRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use site_section_repo::SiteSectionRepo;
pub use skill_repo::SkillRepo;
pub use social_link_repo::SocialLinkRepo;
pub use user_repo::UserRepo;
