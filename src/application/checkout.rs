use crate::domain::money::Money;
use crate::domain::navigation::Destination;
use crate::domain::order::{CommitRequest, PayMethod};
use crate::domain::ports::{ClientStorageBox, NavigatorBox, NotifierBox, OrdersApiBox, StorageScope};
use crate::domain::settlement::SettlementSummary;
use crate::error::{CheckoutError, ErrorKind, Result};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Local storage key holding the signed-in user's display name.
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Everything the checkout page renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutState {
    pub username: Option<String>,
    pub summary: Option<SettlementSummary>,
    pub selected_address: usize,
    pub pay_method: PayMethod,
    pub phase: SubmitPhase,
}

impl CheckoutState {
    /// Amount carried to the confirmation page; zero until a settlement is loaded.
    pub fn payment_amount(&self) -> Money {
        self.summary
            .as_ref()
            .map(|s| s.payment_amount)
            .unwrap_or(Money::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    RedirectedToLogin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed { order_id: String },
    /// Another submission was in flight; nothing was sent.
    AlreadySubmitting,
}

/// View-model behind the checkout page.
///
/// `CheckoutController` owns the page state and drives the order endpoints,
/// navigation, client storage and alerts through their ports. It is
/// `Send + Sync`, so a single controller can be shared between tasks; the
/// submit guard holds across them.
pub struct CheckoutController {
    api: OrdersApiBox,
    navigator: NavigatorBox,
    storage: ClientStorageBox,
    notifier: NotifierBox,
    state: RwLock<CheckoutState>,
}

impl CheckoutController {
    pub fn new(
        api: OrdersApiBox,
        navigator: NavigatorBox,
        storage: ClientStorageBox,
        notifier: NotifierBox,
    ) -> Self {
        Self {
            api,
            navigator,
            storage,
            notifier,
            state: RwLock::new(CheckoutState::default()),
        }
    }

    /// Clone of the current state.
    pub async fn snapshot(&self) -> CheckoutState {
        self.state.read().await.clone()
    }

    /// Hands the current state to a rendering function without cloning it.
    pub async fn render<R>(&self, f: impl FnOnce(&CheckoutState) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    /// Fetches the settlement and derives the page totals.
    ///
    /// A 401 sends the user to the login page and leaves the state as it was.
    /// Any other failure is logged and returned; the state is not touched.
    pub async fn load(&self) -> Result<LoadOutcome> {
        let context = match self.api.fetch_settlement().await {
            Ok(context) => context,
            Err(e) if e.kind() == ErrorKind::Unauthenticated => {
                warn!("settlement requires login, redirecting");
                self.navigator.navigate(Destination::login_then_cart()).await?;
                return Ok(LoadOutcome::RedirectedToLogin);
            }
            Err(e) => {
                error!(error = %e, "failed to load settlement");
                return Err(e);
            }
        };

        let summary = SettlementSummary::from_context(context);
        // header display only; a storage failure leaves it unset
        let username = self
            .storage
            .get(StorageScope::Local, USERNAME_KEY)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "could not read username from local storage");
                None
            });

        info!(
            skus = summary.skus.len(),
            total_count = summary.total_count,
            payment_amount = %summary.payment_amount,
            "settlement loaded"
        );

        let mut state = self.state.write().await;
        state.summary = Some(summary);
        state.username = username;
        Ok(LoadOutcome::Loaded)
    }

    pub async fn select_address(&self, index: usize) -> Result<()> {
        let mut state = self.state.write().await;
        if state.phase == SubmitPhase::Submitting {
            return Err(CheckoutError::SubmitInFlight);
        }
        if let Some(summary) = &state.summary
            && index >= summary.addresses.len()
        {
            return Err(CheckoutError::InvalidSelection {
                index,
                available: summary.addresses.len(),
            });
        }
        state.selected_address = index;
        Ok(())
    }

    pub async fn select_pay_method(&self, pay_method: PayMethod) -> Result<()> {
        let mut state = self.state.write().await;
        if state.phase == SubmitPhase::Submitting {
            return Err(CheckoutError::SubmitInFlight);
        }
        state.pay_method = pay_method;
        Ok(())
    }

    /// Commits the order for the selected address and payment method.
    ///
    /// Only one submission may be in flight. On success the user is sent to
    /// the confirmation page and the phase stays `Submitting`, since the page
    /// is left. On failure, including a failed navigation after a successful
    /// commit, the phase returns to `Idle` and the error is shown to the user.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let (request, amount) = {
            let mut state = self.state.write().await;
            if state.phase == SubmitPhase::Submitting {
                debug!("submit ignored, order already in flight");
                return Ok(SubmitOutcome::AlreadySubmitting);
            }
            state.phase = SubmitPhase::Submitting;
            let request = CommitRequest {
                address: state.selected_address,
                pay_method: state.pay_method,
            };
            (request, state.payment_amount())
        };

        let pay_method = request.pay_method;
        match self.api.commit_order(request).await {
            Ok(response) => {
                info!(order_id = %response.order_id, amount = %amount, "order committed");
                let navigated = self
                    .navigator
                    .navigate(Destination::OrderSuccess {
                        order_id: response.order_id.clone(),
                        amount,
                        pay_method,
                    })
                    .await;
                if let Err(e) = navigated {
                    // the page stays, so the user must be able to act again
                    self.state.write().await.phase = SubmitPhase::Idle;
                    error!(order_id = %response.order_id, error = %e, "order committed but navigation failed");
                    self.notifier.alert(&e.to_string()).await;
                    return Err(e);
                }
                Ok(SubmitOutcome::Committed {
                    order_id: response.order_id,
                })
            }
            Err(e) => {
                self.state.write().await.phase = SubmitPhase::Idle;
                warn!(error = %e, "order commit failed");
                self.notifier.alert(&e.to_string()).await;
                Err(e)
            }
        }
    }

    /// Drops all client-held session data and goes to the login page.
    pub async fn logout(&self) -> Result<()> {
        self.storage.clear(StorageScope::Session).await?;
        self.storage.clear(StorageScope::Local).await?;
        info!("logged out");
        self.navigator.navigate(Destination::login()).await
    }
}
