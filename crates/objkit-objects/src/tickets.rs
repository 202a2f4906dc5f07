//! A cashier sells tickets to a queue, strictly in order, starting with an
//! empty drawer. Each ticket costs [`TICKET_PRICE`] and customers pay with
//! 25, 50 or 100 bills. Change can only come from bills already collected.

use crate::error::TicketError;

/// Price of one ticket.
pub const TICKET_PRICE: u32 = 25;

/// A bill a customer can pay with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bill {
    /// Exact payment, no change owed.
    TwentyFive,
    /// 25 change owed.
    Fifty,
    /// 75 change owed.
    Hundred,
}

impl Bill {
    /// Face value of the bill.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for Bill {
    type Error = TicketError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            25 => Ok(Self::TwentyFive),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            other => Err(TicketError::InvalidDenomination(other)),
        }
    }
}

/// The cashier's drawer: how many bills of each kind it holds.
///
/// # Example
///
/// ```
/// use objkit_objects::{Bill, TicketSeller};
///
/// let mut seller = TicketSeller::new();
/// assert!(seller.serve(Bill::TwentyFive));
/// assert!(seller.serve(Bill::Fifty));
/// assert!(!seller.serve(Bill::Fifty)); // no 25 left to give back
/// assert_eq!(seller.fifties(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketSeller {
    count_25: u32,
    count_50: u32,
    count_100: u32,
}

impl TicketSeller {
    /// A seller with an empty drawer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count_25: 0,
            count_50: 0,
            count_100: 0,
        }
    }

    /// Sell one ticket to a customer paying with `bill`.
    ///
    /// Returns `false`, leaving the drawer untouched, when the drawer
    /// cannot make change. For a 100 bill, one 50 and one 25 are given
    /// back when possible, otherwise three 25s.
    pub const fn serve(&mut self, bill: Bill) -> bool {
        match bill {
            Bill::TwentyFive => {
                self.count_25 += 1;
            }
            Bill::Fifty => {
                if self.count_25 == 0 {
                    return false;
                }
                self.count_25 -= 1;
                self.count_50 += 1;
            }
            Bill::Hundred => {
                if self.count_50 >= 1 && self.count_25 >= 1 {
                    self.count_50 -= 1;
                    self.count_25 -= 1;
                } else if self.count_25 >= 3 {
                    self.count_25 -= 3;
                } else {
                    return false;
                }
                self.count_100 += 1;
            }
        }
        true
    }

    /// Number of 25 bills in the drawer.
    #[must_use]
    pub const fn twenty_fives(&self) -> u32 {
        self.count_25
    }

    /// Number of 50 bills in the drawer.
    #[must_use]
    pub const fn fifties(&self) -> u32 {
        self.count_50
    }

    /// Number of 100 bills in the drawer.
    #[must_use]
    pub const fn hundreds(&self) -> u32 {
        self.count_100
    }

    /// Total value held.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.count_25) * 25
            + u64::from(self.count_50) * 50
            + u64::from(self.count_100) * 100
    }
}

/// Whether every customer in `queue` can buy a ticket and get exact change.
///
/// Customers are served in arrival order. A first customer who does not
/// pay exactly fails at once, and serving stops at the first customer who
/// cannot be given change; bills after that point are never looked at.
///
/// ```
/// use objkit_objects::sell_tickets;
///
/// assert_eq!(sell_tickets(&[25, 25, 50]), Ok(true));
/// assert_eq!(sell_tickets(&[25, 100]), Ok(false));
/// ```
///
/// # Errors
///
/// [`TicketError::InvalidDenomination`] if a value other than 25, 50 or 100
/// is reached while serving.
pub fn sell_tickets(queue: &[u32]) -> Result<bool, TicketError> {
    match queue.first() {
        None => return Ok(true),
        Some(&first) if first != TICKET_PRICE => return Ok(false),
        Some(_) => {}
    }

    let mut seller = TicketSeller::new();
    for &value in queue {
        if !seller.serve(Bill::try_from(value)?) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_prefers_fifty_and_twenty_five() {
        let mut seller = TicketSeller::new();
        let bills = [
            Bill::TwentyFive,
            Bill::TwentyFive,
            Bill::TwentyFive,
            Bill::TwentyFive,
            Bill::Fifty,
        ];
        for bill in bills {
            assert!(seller.serve(bill));
        }
        assert!(seller.serve(Bill::Hundred));
        assert_eq!(seller.twenty_fives(), 2);
        assert_eq!(seller.fifties(), 0);
        assert_eq!(seller.hundreds(), 1);
    }

    #[test]
    fn test_failed_serve_keeps_drawer() {
        let mut seller = TicketSeller::new();
        assert!(seller.serve(Bill::TwentyFive));
        let before = seller;
        assert!(!seller.serve(Bill::Hundred));
        assert_eq!(seller, before);
    }

    #[test]
    fn test_total_does_not_overflow_u32() {
        let seller = TicketSeller {
            count_25: u32::MAX,
            count_50: u32::MAX,
            count_100: u32::MAX,
        };
        assert_eq!(seller.total(), u64::from(u32::MAX) * 175);
    }

    #[test]
    fn test_bill_values() {
        for value in [25, 50, 100] {
            assert_eq!(Bill::try_from(value).map(Bill::value), Ok(value));
        }
        assert_eq!(Bill::try_from(0), Err(TicketError::InvalidDenomination(0)));
    }
}
