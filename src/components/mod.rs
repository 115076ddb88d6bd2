//! UI Components
//!
//! Leptos components for the checklist page.

mod checklist_row;
mod progress_status;
mod submit_button;
mod checklist_progress;
mod seed_picker;

pub use checklist_row::ChecklistRow;
pub use progress_status::ProgressStatus;
pub use submit_button::SubmitButton;
pub use checklist_progress::ChecklistProgress;
pub use seed_picker::SeedPicker;
