//! Order processing services for the egg storefront.
//!
//! This module contains the cart/order state machine: it owns the picked
//! quantities and the order log, moves a submitted cart through a timed
//! processing step, and builds the message handed to the SMS collaborator.

use super::errors::{DomainError, DomainResult};
use super::models::{OrderLog, QuantitySet, Sku};
use std::time::{Duration, Instant};

/// Prefix of every order log entry.
pub const ORDER_LOG_PREFIX: &str = "Comanda se procesează… Găinile sunt motivate! ➜ ";

/// Prefix of the SMS body sent at checkout.
pub const SMS_BODY_PREFIX: &str = "Comanda ouă Bobiță: ";

/// How long a submitted cart stays in processing unless configured otherwise.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2200);

/// An outbound SMS ready to be handed to the platform's compose surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
}

/// Opens a message-composition surface pre-filled with a recipient and body.
///
/// Implementations do not report whether the message was actually sent;
/// sending always needs an explicit user action outside this crate.
pub trait SmsComposer {
    fn compose(&self, message: &SmsMessage);
}

/// Current phase of the order state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderPhase {
    /// Quantities are being edited
    Shopping,
    /// A cart was submitted and waits for its processing delay to elapse
    Processing {
        /// Summary captured at submission time
        snapshot: String,
        due_at: Instant,
    },
}

/// The cart/order state machine.
///
/// Time is passed in explicitly: [`OrderMachine::submit`] schedules the
/// completion and [`OrderMachine::tick`] fires it once the given instant has
/// reached the deadline. Callers can therefore drive it with a wall clock or
/// with any instant they like.
///
/// # Examples
///
/// ```
/// use bobita::domain::{OrderMachine, Sku};
/// use std::time::{Duration, Instant};
///
/// let mut machine = OrderMachine::default();
/// machine.increment(Sku::Single);
///
/// let start = Instant::now();
/// machine.submit(start);
/// assert!(machine.tick(start + Duration::from_secs(3)));
/// assert_eq!(
///     machine.orders().entries(),
///     ["Comanda se procesează… Găinile sunt motivate! ➜ 1 x 1 ou"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OrderMachine {
    quantities: QuantitySet,
    orders: OrderLog,
    phase: OrderPhase,
    processing_delay: Duration,
}

impl Default for OrderMachine {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_DELAY)
    }
}

impl OrderMachine {
    /// Creates an empty machine in the shopping phase.
    ///
    /// # Arguments
    ///
    /// * `processing_delay` - How long a submitted cart waits before it is logged
    pub fn new(processing_delay: Duration) -> Self {
        Self {
            quantities: QuantitySet::default(),
            orders: OrderLog::default(),
            phase: OrderPhase::Shopping,
            processing_delay,
        }
    }

    /// Current cart contents.
    pub fn quantities(&self) -> &QuantitySet {
        &self.quantities
    }

    /// Orders completed so far in this session, oldest first.
    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    pub fn phase(&self) -> &OrderPhase {
        &self.phase
    }

    /// Whether a submitted cart is waiting for its delay to elapse.
    pub fn is_processing(&self) -> bool {
        matches!(self.phase, OrderPhase::Processing { .. })
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Adds one unit of `sku` to the cart. There is no upper limit.
    ///
    /// # Arguments
    ///
    /// * `sku` - Product to add
    ///
    /// # Examples
    ///
    /// ```
    /// use bobita::domain::{OrderMachine, Sku};
    ///
    /// let mut machine = OrderMachine::default();
    /// machine.increment(Sku::Pair);
    /// machine.increment(Sku::Pair);
    /// assert_eq!(machine.summary(), "2 x 2 ouă");
    /// ```
    pub fn increment(&mut self, sku: Sku) {
        self.quantities.increment(sku);
    }

    /// Removes one unit of `sku` from the cart.
    ///
    /// Already-zero quantities stay at zero.
    ///
    /// # Arguments
    ///
    /// * `sku` - Product to remove
    ///
    /// # Examples
    ///
    /// ```
    /// use bobita::domain::{OrderMachine, Sku};
    ///
    /// let mut machine = OrderMachine::default();
    /// machine.decrement(Sku::Carton10);
    /// assert_eq!(machine.quantities().get(Sku::Carton10), 0);
    /// ```
    pub fn decrement(&mut self, sku: Sku) {
        self.quantities.decrement(sku);
    }

    /// Empties the cart. The order log is left alone.
    pub fn clear(&mut self) {
        self.quantities.clear();
        tracing::info!("cart cleared");
    }

    /// Order summary of the current cart, recomputed on every call.
    ///
    /// See [`QuantitySet::summary`] for the format.
    pub fn summary(&self) -> String {
        self.quantities.summary()
    }

    /// Submits the current cart for processing.
    ///
    /// The summary is captured now; later quantity changes do not affect the
    /// logged entry. A blank cart is accepted and completes without logging
    /// anything. Quantities are kept as they are.
    ///
    /// Returns `false` without doing anything if an order is already
    /// processing.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.is_processing() {
            tracing::warn!("submit ignored, an order is already processing");
            return false;
        }

        let snapshot = self.summary();
        let due_at = now + self.processing_delay;
        tracing::info!(summary = %snapshot, delay = ?self.processing_delay, "order submitted");
        self.phase = OrderPhase::Processing { snapshot, due_at };
        true
    }

    /// Completes a pending submission whose deadline has passed.
    ///
    /// Returns `true` when a submission completed during this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match &self.phase {
            OrderPhase::Processing { due_at, .. } => now >= *due_at,
            OrderPhase::Shopping => false,
        };
        if !due {
            return false;
        }

        if let OrderPhase::Processing { snapshot, .. } =
            std::mem::replace(&mut self.phase, OrderPhase::Shopping)
        {
            if snapshot.trim().is_empty() {
                tracing::info!("processing finished for an empty cart, nothing logged");
            } else {
                self.orders.push(format!("{ORDER_LOG_PREFIX}{snapshot}"));
                tracing::info!(orders = self.orders.len(), "order logged");
            }
        }
        true
    }

    /// Drops a pending submission without logging it.
    ///
    /// Returns `true` if there was something to cancel.
    pub fn cancel_processing(&mut self) -> bool {
        if !self.is_processing() {
            return false;
        }
        self.phase = OrderPhase::Shopping;
        tracing::info!("processing cancelled");
        true
    }

    /// Time left before the pending submission completes, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.phase {
            OrderPhase::Processing { due_at, .. } => Some(due_at.saturating_duration_since(now)),
            OrderPhase::Shopping => None,
        }
    }

    /// Builds the checkout message for `destination` without sending it.
    pub fn checkout_message(&self, destination: &str) -> DomainResult<SmsMessage> {
        let summary = self.summary();
        if summary.trim().is_empty() {
            return Err(DomainError::EmptyCart);
        }
        Ok(SmsMessage {
            to: destination.to_string(),
            body: format!("{SMS_BODY_PREFIX}{summary}"),
        })
    }

    /// Hands the current cart to the SMS collaborator.
    ///
    /// No state changes; the collaborator only opens a compose view.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCart`] when there is nothing to order. The
    /// composer is not invoked in that case.
    pub fn checkout(&self, destination: &str, composer: &dyn SmsComposer) -> DomainResult<SmsMessage> {
        let message = self.checkout_message(destination)?;
        tracing::info!(to = %message.to, "handing order to SMS composer");
        composer.compose(&message);
        Ok(message)
    }
}
