//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Methods
//! that run a single statement accept any `PgExecutor` (a pool or an open
//! transaction); methods that span several statements take `&PgPool`.

pub mod course_repo;
pub mod language_repo;
pub mod lesson_repo;
pub mod progress_repo;
pub mod question_repo;
pub mod user_repo;
pub mod vocabulary_repo;

pub use course_repo::CourseRepo;
pub use language_repo::LanguageRepo;
pub use lesson_repo::LessonRepo;
pub use progress_repo::ProgressRepo;
pub use question_repo::QuestionRepo;
pub use user_repo::UserRepo;
pub use vocabulary_repo::VocabularyRepo;
