//! Ticket lifecycle service.
//!
//! Orchestrates the desk operations over the injected collaborators:
//! issue a ticket against capacity, quote the duration price, take a
//! payment, and decide exit requests against the grace window.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::foundation::{Barcode, Money};
use crate::domain::ticket::{
    pricing, validity, CapacityReport, ExitDecision, IssuedTicket, PaymentKind, PaymentMethod,
    PaymentReceipt, PriceQuote, Receipt, Tariff, Ticket, TicketError, TicketPatch,
};
use crate::ports::{BarcodeGenerator, Clock, TicketRepository};

/// Lifecycle service for spa tickets.
///
/// The service is the single write path to the repository. Mutating
/// operations serialize on an internal lock so the capacity check and the
/// read-then-update sequences stay atomic under concurrent desks; read
/// operations take no lock.
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
    barcodes: Arc<dyn BarcodeGenerator>,
    clock: Arc<dyn Clock>,
    tariff: Tariff,
    write_lock: Mutex<()>,
}

impl TicketService {
    pub fn new(
        repository: Arc<dyn TicketRepository>,
        barcodes: Arc<dyn BarcodeGenerator>,
        clock: Arc<dyn Clock>,
        tariff: Tariff,
    ) -> Self {
        Self {
            repository,
            barcodes,
            clock,
            tariff,
            write_lock: Mutex::new(()),
        }
    }

    /// Issues a ticket at the entrance gate.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if every space is occupied
    /// - `Repository` if storage fails
    pub async fn issue_ticket(&self, customer_name: &str) -> Result<IssuedTicket, TicketError> {
        let _guard = self.write_lock.lock().await;

        // 1. Refuse when every space is occupied
        let occupied = self.repository.count_active().await?;
        if occupied >= self.tariff.total_capacity {
            warn!(
                occupied,
                total = self.tariff.total_capacity,
                "Issuance refused, spa is full"
            );
            return Err(TicketError::capacity_exceeded(self.tariff.total_capacity));
        }

        // 2. Create the ticket under a fresh barcode
        let ticket = Ticket::issue(self.barcodes.generate(), customer_name, self.clock.now());
        self.repository.add(&ticket).await?;

        // 3. Report the spaces left after this issuance
        let free_spaces = self.tariff.total_capacity - occupied - 1;
        debug!(barcode = %ticket.barcode, free_spaces, "Ticket issued");

        Ok(IssuedTicket {
            ticket,
            free_spaces,
        })
    }

    /// Quotes what the ticket costs right now. Read-only.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no ticket carries the barcode
    /// - `Repository` if storage fails
    pub async fn quote_price(&self, barcode: &Barcode) -> Result<PriceQuote, TicketError> {
        let ticket = self.find_ticket(barcode).await?;

        // 1. Settled tickets show a receipt instead of a price
        if ticket.is_paid {
            if let (Some(paid_at), Some(method)) = (ticket.paid_at, ticket.payment_method) {
                let stay = pricing::stay_price(&self.tariff, &ticket.entry_time, &paid_at);
                let total_paid = stay + ticket.total_penalties();
                return Ok(PriceQuote::Paid {
                    receipt: Receipt {
                        barcode: ticket.barcode,
                        customer_name: ticket.customer_name,
                        entry_time: ticket.entry_time,
                        paid_at,
                        payment_method: method,
                        total_paid,
                    },
                });
            }
        }

        // 2. A lapsed grace window leaves the latest penalty due
        if let Some(penalty) = ticket.current_penalty() {
            return Ok(PriceQuote::PenaltyDue { amount: penalty });
        }

        // 3. Otherwise the stay price for the hours elapsed so far
        let now = self.clock.now();
        Ok(PriceQuote::Due {
            amount: pricing::stay_price(&self.tariff, &ticket.entry_time, &now),
            hours: pricing::billable_hours(&ticket.entry_time, &now),
        })
    }

    /// Takes a payment for the ticket: the outstanding penalty if one is
    /// owed, the stay price otherwise.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no ticket carries the barcode
    /// - `InvalidPaymentMethod` if the method is not credit, debit or cash
    /// - `AlreadyExited` if the ticket already left
    /// - `AlreadyPaid` if the ticket is already settled
    /// - `Repository` if storage fails
    pub async fn pay_ticket(
        &self,
        barcode: &Barcode,
        method: &str,
    ) -> Result<PaymentReceipt, TicketError> {
        let _guard = self.write_lock.lock().await;
        let ticket = self.find_ticket(barcode).await?;

        // 1. Reject inputs outside the accepted methods
        let method: PaymentMethod = method
            .parse()
            .map_err(|_| TicketError::invalid_payment_method(method))?;

        // 2. Exit is terminal; exited tickets accept no payment
        if let Some(exited_at) = ticket.returned_at {
            return Err(TicketError::already_exited(ticket.barcode, exited_at));
        }

        // 3. A settled ticket cannot be charged twice
        if ticket.is_paid {
            return Err(TicketError::already_paid(ticket.barcode));
        }

        // 4. Charge the outstanding penalty, or the stay price
        let now = self.clock.now();
        let (amount, kind) = match ticket.current_penalty() {
            Some(penalty) => (penalty, PaymentKind::Penalty),
            None => (
                pricing::stay_price(&self.tariff, &ticket.entry_time, &now),
                PaymentKind::Stay,
            ),
        };

        self.repository
            .update(barcode, TicketPatch::payment(method, now))
            .await?;
        debug!(barcode = %ticket.barcode, amount = %amount, "Payment accepted");

        Ok(PaymentReceipt {
            barcode: ticket.barcode,
            amount_paid: amount,
            new_balance: Money::ZERO,
            payment_method: method,
            paid_at: now,
            grace_expires_at: now.plus_minutes(self.tariff.grace_period_minutes),
            kind,
        })
    }

    /// Decides whether a visitor may leave.
    ///
    /// Approves and closes the ticket when its payment is inside the grace
    /// window. A payment that lapsed records a penalty on the spot; other
    /// deny decisions leave the ticket untouched.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no ticket carries the barcode
    /// - `AlreadyExited` if the ticket already left
    /// - `Repository` if storage fails
    pub async fn request_exit(&self, barcode: &Barcode) -> Result<ExitDecision, TicketError> {
        let _guard = self.write_lock.lock().await;
        let ticket = self.find_ticket(barcode).await?;

        // 1. Exit is terminal
        if let Some(exited_at) = ticket.returned_at {
            return Err(TicketError::already_exited(ticket.barcode, exited_at));
        }

        let now = self.clock.now();

        // 2. Paid inside the grace window: open the gate
        if ticket.is_paid && validity::has_valid_payment(&self.tariff, &ticket, &now) {
            self.repository
                .update(barcode, TicketPatch::exit(now))
                .await?;
            debug!(barcode = %ticket.barcode, "Exit approved");
            return Ok(ExitDecision::Approved { exit_time: now });
        }

        // 3. Paid but lapsed: record the penalty and send back to the desk
        if ticket.is_paid {
            if let Some(paid_at) = ticket.paid_at {
                let penalty = pricing::overstay_penalty(&self.tariff, &paid_at, &now);
                self.repository
                    .update(barcode, TicketPatch::grace_lapsed(penalty))
                    .await?;
                let minutes_expired =
                    now.duration_since(&paid_at).num_minutes() - self.tariff.grace_period_minutes;
                warn!(barcode = %ticket.barcode, penalty = %penalty, minutes_expired, "Grace window lapsed");
                return Ok(ExitDecision::GraceExpired {
                    penalty,
                    minutes_expired,
                });
            }
        }

        // 4. An earlier penalty is still unpaid
        if let Some(penalty) = ticket.current_penalty() {
            return Ok(ExitDecision::PenaltyOwed { penalty });
        }

        // 5. Never paid: the full stay price is due
        Ok(ExitDecision::PaymentRequired {
            amount_due: pricing::stay_price(&self.tariff, &ticket.entry_time, &now),
        })
    }

    /// Occupancy snapshot for the desk display. Read-only.
    ///
    /// # Errors
    ///
    /// - `Repository` if storage fails
    pub async fn capacity(&self) -> Result<CapacityReport, TicketError> {
        let occupied = self.repository.count_active().await?;
        Ok(CapacityReport::new(self.tariff.total_capacity, occupied))
    }

    /// Every ticket in issuance order. Read-only.
    ///
    /// # Errors
    ///
    /// - `Repository` if storage fails
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, TicketError> {
        Ok(self.repository.list_all().await?)
    }

    async fn find_ticket(&self, barcode: &Barcode) -> Result<Ticket, TicketError> {
        self.repository
            .find_by_barcode(barcode)
            .await?
            .ok_or_else(|| TicketError::not_found(barcode.clone()))
    }
}
