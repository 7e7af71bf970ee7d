//! The outcome of a single keypress.

/// Result of one keypress, produced by an interactive element and consumed
/// by the screen and then the controller.
///
/// `continue_loop` keeps the input loop running; when it is false the
/// controller returns the signal to the caller. `value` carries whatever the
/// element emitted (menu choice, entered text, action id) and `target_id`
/// identifies the record an action applies to, where relevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSignal {
    pub continue_loop: bool,
    pub needs_full_refresh: bool,
    pub value: String,
    pub target_id: String,
}

impl UpdateSignal {
    /// Keep the input loop running.
    pub fn proceed() -> Self {
        Self {
            continue_loop: true,
            ..Self::default()
        }
    }

    /// End the loop without emitting anything.
    pub fn done() -> Self {
        Self::default()
    }

    /// End the loop, emitting `value`.
    pub fn emit(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Mark the signal as requiring a full clear-and-redraw.
    pub fn with_full_refresh(mut self) -> Self {
        self.needs_full_refresh = true;
        self
    }

    /// Attach the id of the record the emitted action targets.
    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proceed_continues_without_output() {
        let signal = UpdateSignal::proceed();
        assert!(signal.continue_loop);
        assert!(!signal.needs_full_refresh);
        assert!(signal.value.is_empty());
        assert!(signal.target_id.is_empty());
    }

    #[test]
    fn emit_with_target_ends_loop() {
        let signal = UpdateSignal::emit("delete").with_target("42");
        assert!(!signal.continue_loop);
        assert_eq!(signal.value, "delete");
        assert_eq!(signal.target_id, "42");
    }
}
