//! Checkout bookkeeping across the POS session and the store.

use chrono::Utc;
use officine_core::{PaymentMethod, PosSession};
use officine_store::Pharmacy;
use proptest::prelude::*;

fn checkout(pharmacy: &mut Pharmacy, picks: &[(&str, usize)], method: PaymentMethod) {
    let mut pos = PosSession::new();
    for (id, presses) in picks {
        let medicine = pharmacy.catalog().get(id).cloned().unwrap();
        for _ in 0..*presses {
            pos.add_item(&medicine).unwrap();
        }
    }
    pos.begin_checkout().unwrap();
    let sale = pos.complete(method, Utc::now()).unwrap();
    pharmacy.record_sale(sale).unwrap();
}

#[test]
fn sale_total_and_stock_follow_the_cart() {
    let now = Utc::now();
    let mut pharmacy = Pharmacy::with_fixtures(now);

    // 2 × Paracétamol (200) + 1 × Amoxicilline (1500)
    checkout(&mut pharmacy, &[("1", 2), ("2", 1)], PaymentMethod::Cash);

    let sale = pharmacy.sales().all().last().unwrap();
    assert_eq!(sale.total.units(), 1_900);
    assert_eq!(sale.cashier_id, "current-user");
    assert_eq!(sale.payment_method, PaymentMethod::Cash);
    assert!(sale.tax.is_zero() && sale.discount.is_zero());

    assert_eq!(pharmacy.catalog().get("1").unwrap().stock, 318);
    assert_eq!(pharmacy.catalog().get("2").unwrap().stock, 44);
    // Untouched
    assert_eq!(pharmacy.catalog().get("3").unwrap().stock, 120);
    assert_eq!(pharmacy.sales().count(), 3);
}

#[test]
fn selling_whole_stock_empties_the_shelf() {
    let mut pharmacy = Pharmacy::with_fixtures(Utc::now());

    // Bronchokod has 8 units; extra presses are ignored by the cart
    checkout(&mut pharmacy, &[("5", 12)], PaymentMethod::MobileMoney);

    let sale = pharmacy.sales().all().last().unwrap();
    assert_eq!(sale.unit_count(), 8);
    assert_eq!(sale.total.units(), 8 * 2_900);

    let syrup = pharmacy.catalog().get("5").unwrap();
    assert_eq!(syrup.stock, 0);
    assert!(syrup.is_out_of_stock());
}

#[test]
fn sale_snapshot_survives_catalog_edits() {
    let mut pharmacy = Pharmacy::with_fixtures(Utc::now());
    checkout(&mut pharmacy, &[("6", 1)], PaymentMethod::Card);

    let mut edited = pharmacy.catalog().get("6").cloned().unwrap();
    edited.sale_price = officine_core::Money::from_units(9_999);
    assert!(pharmacy.catalog_mut().update(edited));
    assert!(pharmacy.catalog_mut().delete("6"));

    let sale = pharmacy.sales().all().last().unwrap();
    assert_eq!(sale.items[0].medicine.sale_price.units(), 1_700);
    assert_eq!(sale.total.units(), 1_700);
}

proptest! {
    #[test]
    fn stock_drops_by_exactly_the_sold_quantity(presses in 1usize..400) {
        let mut pharmacy = Pharmacy::with_fixtures(Utc::now());
        let before = pharmacy.catalog().get("1").unwrap().stock;

        checkout(&mut pharmacy, &[("1", presses)], PaymentMethod::Cash);

        let sold = pharmacy.sales().all().last().unwrap().unit_count();
        let after = pharmacy.catalog().get("1").unwrap().stock;

        prop_assert_eq!(sold, (presses as i64).min(before));
        prop_assert_eq!(after, before - sold);
        prop_assert!(after >= 0);
    }
}
