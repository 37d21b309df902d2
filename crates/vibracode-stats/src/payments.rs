// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Revenue and refund aggregation over the payment ledger.

use vibracode_core::PaymentTransaction;

/// Headline counters for the payments screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentOverview {
    pub total: usize,
    /// Number of succeeded payment-type transactions.
    pub succeeded: usize,
    /// Sum of succeeded payment amounts. Pending payments are excluded.
    pub revenue: f64,
    /// Sum of absolute refund/chargeback amounts, regardless of status.
    /// Stored amounts may be negative; the magnitude is what matters here.
    pub refunds: f64,
}

pub fn payment_overview(payments: &[PaymentTransaction]) -> PaymentOverview {
    let mut overview = PaymentOverview {
        total: payments.len(),
        ..Default::default()
    };
    for payment in payments {
        if payment.counts_as_revenue() {
            overview.succeeded += 1;
            overview.revenue += payment.amount;
        }
        if payment.transaction_type.is_money_returned() {
            overview.refunds += payment.amount.abs();
        }
    }
    overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::payment_with;
    use vibracode_core::{PaymentStatus, PaymentType};

    #[test]
    fn revenue_excludes_pending_and_refunds_use_magnitude() {
        let payments = vec![
            payment_with(PaymentType::Payment, PaymentStatus::Succeeded, 100.0),
            payment_with(PaymentType::Refund, PaymentStatus::Refunded, -30.0),
            payment_with(PaymentType::Payment, PaymentStatus::Pending, 50.0),
        ];
        let overview = payment_overview(&payments);
        assert_eq!(overview.total, 3);
        assert_eq!(overview.succeeded, 1);
        assert!((overview.revenue - 100.0).abs() < 1e-9);
        assert!((overview.refunds - 30.0).abs() < 1e-9);
    }

    #[test]
    fn chargebacks_count_toward_refunds() {
        let payments = vec![
            payment_with(PaymentType::Chargeback, PaymentStatus::Disputed, -25.0),
            payment_with(PaymentType::Chargeback, PaymentStatus::Succeeded, 15.0),
        ];
        let overview = payment_overview(&payments);
        assert!((overview.refunds - 40.0).abs() < 1e-9);
        assert_eq!(overview.succeeded, 0);
    }

    #[test]
    fn adjustments_touch_neither_total() {
        let payments = vec![payment_with(
            PaymentType::Adjustment,
            PaymentStatus::Succeeded,
            5.0,
        )];
        let overview = payment_overview(&payments);
        assert_eq!(overview.revenue, 0.0);
        assert_eq!(overview.refunds, 0.0);
    }
}
