//! Checkout Initiation State Machine
//!
//! Idle -> Requesting -> (Redirecting | back to Idle on failure).
//!
//! Kept separate from the product page component so the transitions stay
//! testable without a browser: the component owns a `CheckoutState` signal
//! and performs whatever [`CheckoutOutcome`] says.

/// Generic notice shown when checkout initiation fails
pub const CHECKOUT_FAILED_NOTICE: &str = "Failed to redirect to checkout!";

/// State of the purchase control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// Nothing outstanding; the control is clickable
    #[default]
    Idle,
    /// A session request is in flight; the control is disabled
    Requesting,
    /// A checkout URL arrived; navigation replaces the page
    Redirecting,
}

/// What the component must do after a request settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Navigate the browser to this exact URL
    Navigate(String),
    /// Show the failure notice and allow a retry
    Alert(&'static str),
}

impl CheckoutState {
    /// Attempt to start a checkout request
    ///
    /// Returns `None` while a request is outstanding (or a redirect is
    /// underway), so a second click never produces a second request.
    pub fn try_begin(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Requesting),
            Self::Requesting | Self::Redirecting => None,
        }
    }

    /// Settle an in-flight request with the endpoint's result
    pub fn settle(self, result: Result<String, String>) -> (Self, CheckoutOutcome) {
        match result {
            Ok(url) => (Self::Redirecting, CheckoutOutcome::Navigate(url)),
            Err(_) => (Self::Idle, CheckoutOutcome::Alert(CHECKOUT_FAILED_NOTICE)),
        }
    }

    /// Whether the purchase control should be disabled
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reentry_while_requesting() {
        let state = CheckoutState::Idle.try_begin().unwrap();
        assert_eq!(state, CheckoutState::Requesting);
        assert!(state.is_busy());

        // A second click while a request is outstanding does nothing
        assert_eq!(state.try_begin(), None);
    }

    #[test]
    fn test_success_navigates_to_exact_url() {
        let state = CheckoutState::Idle.try_begin().unwrap();
        let (state, outcome) = state.settle(Ok("https://pay.example/cs_1".into()));

        assert_eq!(state, CheckoutState::Redirecting);
        assert_eq!(
            outcome,
            CheckoutOutcome::Navigate("https://pay.example/cs_1".into())
        );
        // Redirecting is terminal for the page; no further clicks
        assert_eq!(state.try_begin(), None);
    }

    #[test]
    fn test_failure_clears_busy_and_alerts() {
        let state = CheckoutState::Idle.try_begin().unwrap();
        let (state, outcome) = state.settle(Err("endpoint rejected".into()));

        assert_eq!(state, CheckoutState::Idle);
        assert!(!state.is_busy());
        assert_eq!(outcome, CheckoutOutcome::Alert(CHECKOUT_FAILED_NOTICE));

        // The control is re-triggerable after a failure
        assert!(state.try_begin().is_some());
    }
}
