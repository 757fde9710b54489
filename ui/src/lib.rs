//! Shared UI for the administration console.

mod session_ctx;
pub use session_ctx::{clear_session, store_session, use_session, SessionProvider, SessionState};

mod header;
pub use header::{Header, NAV_ITEMS};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod error_alert;
pub use error_alert::ErrorAlert;

mod users_table;
pub use users_table::{Column, UsersTable, USER_COLUMNS};

mod add_user_modal;
pub use add_user_modal::AddUserModal;

mod edit_user_modal;
pub use edit_user_modal::EditUserModal;

mod confirm_modal;
pub use confirm_modal::ConfirmModal;
