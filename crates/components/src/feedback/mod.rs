mod alert;
mod error_dialog;
mod error_page;
mod install_prompt;
mod modal;
mod notifications;
mod toast;

pub use alert::Alert;
pub use error_dialog::ErrorDialog;
pub use error_page::{error_defaults, ErrorDefaults, ErrorPage};
pub use install_prompt::InstallPrompt;
pub use modal::Modal;
pub use notifications::{
    error_toast, info_toast, notice_alert, notice_toast, success_toast, warning_toast,
};
pub use toast::{SimpleToast, Toast, ToastContainer, ToastPosition, DEFAULT_TOAST_CONTAINER_ID};
