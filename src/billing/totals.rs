//! Invoice totals calculator
//!
//! Pure function turning a list of line items into subtotal, tax, and
//! total. GST is applied at a fixed combined rate; the CGST/SGST halves
//! exist for display only and always sum exactly to the tax amount.

use serde::{Deserialize, Serialize};

use crate::models::{LineItem, Money};

/// Combined GST rate (9% CGST + 9% SGST)
pub const GST_RATE_PCT: i64 = 18;

/// Computed invoice totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of quantity × unit price over all line items
    pub subtotal: Money,

    /// GST at the combined rate
    pub tax: Money,

    /// subtotal + tax
    pub total: Money,
}

impl InvoiceTotals {
    /// The CGST/SGST display split
    ///
    /// The halves sum exactly to `tax`; when the tax has an odd paisa the
    /// SGST half carries it.
    pub fn tax_split(&self) -> (Money, Money) {
        self.tax.split_half()
    }
}

/// Compute subtotal, tax, and total for an ordered sequence of line items
///
/// Accumulates exactly in paise; an empty item list yields all zeroes.
/// Negative quantities or prices pass through untouched; rejecting them,
/// if desired, is the calling layer's responsibility.
pub fn compute_totals(items: &[LineItem]) -> InvoiceTotals {
    let subtotal: Money = items.iter().map(LineItem::amount).sum();
    let tax = subtotal.percent(GST_RATE_PCT);

    InvoiceTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_items_all_zero() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.tax, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_two_item_scenario() {
        // 2 × ₹100 + 1 × ₹50 = ₹250, 18% GST = ₹45, total ₹295
        let items = vec![
            LineItem::new("Item A", 2.0, Money::from_rupees(100)),
            LineItem::new("Item B", 1.0, Money::from_rupees(50)),
        ];
        let totals = compute_totals(&items);
        assert_eq!(totals.subtotal, Money::from_rupees(250));
        assert_eq!(totals.tax, Money::from_rupees(45));
        assert_eq!(totals.total, Money::from_rupees(295));
    }

    #[test]
    fn test_subtotal_is_sum_of_line_amounts() {
        let items = vec![
            LineItem::new("A", 3.0, Money::from_paise(3333)),
            LineItem::new("B", 0.5, Money::from_paise(101)),
            LineItem::new("C", 1.0, Money::from_paise(1)),
        ];
        let totals = compute_totals(&items);
        let expected: Money = items.iter().map(LineItem::amount).sum();
        assert_eq!(totals.subtotal, expected);
        assert_eq!(totals.total, totals.subtotal + totals.tax);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let items = vec![LineItem::new("Credit", -1.0, Money::from_rupees(100))];
        let totals = compute_totals(&items);
        assert_eq!(totals.subtotal, Money::from_rupees(-100));
        assert_eq!(totals.tax, Money::from_rupees(-18));
        assert_eq!(totals.total, Money::from_rupees(-118));
    }

    #[test]
    fn test_tax_split_sums_exactly() {
        // ₹0.03 subtotal → 1 paisa tax, which cannot split evenly
        let items = vec![LineItem::new("Tiny", 1.0, Money::from_paise(3))];
        let totals = compute_totals(&items);
        let (cgst, sgst) = totals.tax_split();
        assert_eq!(cgst + sgst, totals.tax);

        let items = vec![LineItem::new("Even", 1.0, Money::from_rupees(250))];
        let (cgst, sgst) = compute_totals(&items).tax_split();
        assert_eq!(cgst, Money::from_paise(2250));
        assert_eq!(sgst, Money::from_paise(2250));
    }
}
