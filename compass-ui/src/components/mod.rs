//! Shared UI components

pub mod button;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use modal::{
    press_action, request_close, run_then_close, use_toolkit, ActionButtonProps, ActionPlan,
    ActionRowProps, ContainerProps, Dismissal, Modal, ModalAction, ModalToolkit, NativeToolkit,
    SurfaceProps, Toolkit, ToolkitProvider, TransitionProps, DIALOG_DESCRIPTION_ID, MODAL_CSS,
};
