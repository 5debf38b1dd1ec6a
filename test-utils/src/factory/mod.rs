//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` builder where customization is
//! useful and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (level, questions) = factory::helpers::create_level_with_questions(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod community;
pub mod contact;
pub mod event;
pub mod helpers;
pub mod letter;
pub mod level;
pub mod message;
pub mod news;
pub mod question;
pub mod user;
pub mod user_answer;
pub mod user_progress;
pub mod word;

pub use community::create_community;
pub use contact::create_contact;
pub use event::create_event;
pub use letter::create_letter;
pub use level::create_level;
pub use message::create_message;
pub use news::create_news;
pub use question::create_question;
pub use user::{create_admin, create_user};
pub use word::create_word;
