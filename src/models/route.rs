//! Route stop type.

use serde::{Deserialize, Serialize};

use super::Customer;

/// One entry in a vehicle's route.
///
/// Routes are closed with a [`Stop::Depot`] marker. Depot markers carry no
/// location of their own; they resolve to the instance depot and contribute
/// no length wherever they appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stop {
    /// A visit to a customer.
    Customer(Customer),
    /// Return to the depot.
    Depot,
}

impl Stop {
    /// The visited customer, or `None` for a depot marker.
    pub fn customer(&self) -> Option<&Customer> {
        match self {
            Stop::Customer(c) => Some(c),
            Stop::Depot => None,
        }
    }

    /// Returns `true` for a depot marker.
    pub fn is_depot(&self) -> bool {
        matches!(self, Stop::Depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_customer() {
        let s = Stop::Customer(Customer::new(3, 0.0, 0.0, 1.0, 0.0));
        assert!(!s.is_depot());
        assert_eq!(s.customer().map(|c| c.id()), Some(3));
    }

    #[test]
    fn test_stop_depot() {
        assert!(Stop::Depot.is_depot());
        assert!(Stop::Depot.customer().is_none());
    }
}
