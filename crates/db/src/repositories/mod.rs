pub mod client_repo;
pub mod note_repo;
pub mod project_repo;
pub mod summary_repo;

pub use client_repo::ClientRepo;
pub use note_repo::NoteRepo;
pub use project_repo::ProjectRepo;
pub use summary_repo::SummaryRepo;
