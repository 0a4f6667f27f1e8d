//! Component mocks with interactive controls

mod modal;
pub mod url_state;

pub use modal::ModalMock;
