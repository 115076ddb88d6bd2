//! Progress Checklist Entry Point

fn main() {
    checklist_progress_ui::run();
}
