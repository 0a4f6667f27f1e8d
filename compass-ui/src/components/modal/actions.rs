//! Action row planning and the action-then-close chain

/// A control in the modal's action row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Cancel,
    Confirm,
}

impl ModalAction {
    pub fn default_label(self) -> &'static str {
        match self {
            ModalAction::Cancel => "Cancel",
            ModalAction::Confirm => "Confirm",
        }
    }
}

/// Which action controls a modal shows, derived from the callbacks it was given
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionPlan {
    confirm: bool,
    cancel: bool,
}

impl ActionPlan {
    pub fn new(has_confirm: bool, has_cancel: bool) -> Self {
        Self {
            confirm: has_confirm,
            cancel: has_cancel,
        }
    }

    /// Whether an action row is rendered at all. `on_close` alone never adds one.
    pub fn has_actions(&self) -> bool {
        self.confirm || self.cancel
    }

    /// Present actions in render order: Cancel, then Confirm
    pub fn actions(&self) -> impl Iterator<Item = ModalAction> {
        let cancel = self.cancel.then_some(ModalAction::Cancel);
        let confirm = self.confirm.then_some(ModalAction::Confirm);
        cancel.into_iter().chain(confirm)
    }
}

struct CloseOnDrop<C: FnOnce()>(Option<C>);

impl<C: FnOnce()> Drop for CloseOnDrop<C> {
    fn drop(&mut self) {
        if let Some(close) = self.0.take() {
            close();
        }
    }
}

/// Run `action`, then `close`. `close` also runs if `action` unwinds.
pub fn run_then_close(action: impl FnOnce(), close: impl FnOnce()) {
    let _guard = CloseOnDrop(Some(close));
    action();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_no_callbacks_no_actions() {
        let plan = ActionPlan::new(false, false);
        assert!(!plan.has_actions());
        assert_eq!(plan.actions().count(), 0);
    }

    #[test]
    fn test_action_order_is_cancel_then_confirm() {
        let plan = ActionPlan::new(true, true);
        assert!(plan.has_actions());
        assert_eq!(
            plan.actions().collect::<Vec<_>>(),
            vec![ModalAction::Cancel, ModalAction::Confirm]
        );
    }

    #[test]
    fn test_single_action() {
        assert_eq!(
            ActionPlan::new(false, true).actions().collect::<Vec<_>>(),
            vec![ModalAction::Cancel]
        );
        assert_eq!(
            ActionPlan::new(true, false).actions().collect::<Vec<_>>(),
            vec![ModalAction::Confirm]
        );
    }

    #[test]
    fn test_run_then_close_order() {
        let log = RefCell::new(Vec::new());
        run_then_close(|| log.borrow_mut().push("action"), || log.borrow_mut().push("close"));
        assert_eq!(*log.borrow(), vec!["action", "close"]);
    }

    #[test]
    fn test_close_runs_when_action_panics() {
        let log = RefCell::new(Vec::new());
        let result = catch_unwind(AssertUnwindSafe(|| {
            run_then_close(
                || {
                    log.borrow_mut().push("action");
                    panic!("confirm handler failed");
                },
                || log.borrow_mut().push("close"),
            );
        }));
        assert!(result.is_err());
        assert_eq!(*log.borrow(), vec!["action", "close"]);
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(ModalAction::Confirm.default_label(), "Confirm");
        assert_eq!(ModalAction::Cancel.default_label(), "Cancel");
    }
}
