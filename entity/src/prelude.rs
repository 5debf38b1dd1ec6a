pub use super::community::Entity as Community;
pub use super::contact::Entity as Contact;
pub use super::event::Entity as Event;
pub use super::letter::Entity as Letter;
pub use super::level::Entity as Level;
pub use super::message::Entity as Message;
pub use super::news::Entity as News;
pub use super::question::Entity as Question;
pub use super::user::Entity as User;
pub use super::user_answer::Entity as UserAnswer;
pub use super::user_progress::Entity as UserProgress;
pub use super::word::Entity as Word;
