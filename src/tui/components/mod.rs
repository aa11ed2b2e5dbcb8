//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Every component here is stateless and props-based: it borrows the
//! slice of the `ViewModel` it draws and implements `Component`. Nothing
//! reads `App` directly, so each one is testable against a `TestBackend`
//! with hand-built props.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── filter_bar.rs     (Filter + sort indicator line)
//! ├── task_table.rs     (Responsive task list)
//! ├── task_preview.rs   (Selected task summary panel)
//! ├── task_detail.rs    (Full-screen task view)
//! ├── task_form.rs      (Create/edit form)
//! ├── confirm_delete.rs (Delete confirmation overlay)
//! ├── toast.rs          (Transient status line)
//! └── help_footer.rs    (Key hints)
//! ```

pub mod confirm_delete;
pub mod filter_bar;
pub mod help_footer;
pub mod task_detail;
pub mod task_form;
pub mod task_preview;
pub mod task_table;
pub mod toast;

pub use confirm_delete::ConfirmDelete;
pub use filter_bar::FilterBar;
pub use help_footer::HelpFooter;
pub use task_detail::TaskDetail;
pub use task_form::TaskFormView;
pub use task_preview::{PREVIEW_HEIGHT, TaskPreview};
pub use task_table::TaskTable;
pub use toast::Toast;
