mod common;

use common::machine_with;
use rand::Rng;
use rand::seq::SliceRandom;
use vending::domain::coin::Denominations;
use vending::domain::dispenser::dispense;
use vending::domain::product::Product;
use vending::error::VendingError;

const COINS: [i64; 2] = [2000, 5000];
const ROUNDS: usize = 500;

fn random_coins<R: Rng>(rng: &mut R, max_len: usize) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| *COINS.choose(rng).unwrap()).collect()
}

fn random_catalog<R: Rng>(rng: &mut R) -> Vec<Product> {
    let len = rng.gen_range(1..8);
    (0..len)
        .map(|i| Product::new(format!("P{}", i), rng.gen_range(1..30) * 500))
        .collect()
}

#[test]
fn test_never_spends_more_than_inserted() {
    let mut rng = rand::thread_rng();
    let denominations = Denominations::default();

    for _ in 0..ROUNDS {
        let coins = random_coins(&mut rng, 12);
        let catalog = random_catalog(&mut rng);
        let total = denominations.validate(&coins).unwrap();

        match dispense(total, &catalog) {
            Ok(purchase) => {
                let spent: i64 = purchase
                    .lines
                    .iter()
                    .map(|line| {
                        let price = catalog.iter().find(|p| p.name == line.name).unwrap().price;
                        price * i64::try_from(line.quantity).unwrap()
                    })
                    .sum();
                assert!(spent <= total);
                assert_eq!(spent, purchase.spent);
                assert_eq!(purchase.spent + purchase.change, total);
            }
            Err(VendingError::InsufficientFunds) => {
                let cheapest = catalog.iter().map(|p| p.price).min().unwrap();
                assert!(total < cheapest);
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
}

#[test]
fn test_selection_order_is_price_descending() {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let catalog = random_catalog(&mut rng);
        let total = rng.gen_range(0..40) * 1000;

        if let Ok(purchase) = dispense(total, &catalog) {
            let prices: Vec<i64> = purchase
                .lines
                .iter()
                .map(|line| catalog.iter().find(|p| p.name == line.name).unwrap().price)
                .collect();
            assert!(prices.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

#[test]
fn test_below_cheapest_price_is_insufficient() {
    let mut rng = rand::thread_rng();
    let denominations = Denominations::default();

    for _ in 0..ROUNDS {
        let coins = random_coins(&mut rng, 6);
        let total = denominations.validate(&coins).unwrap();
        let catalog: Vec<Product> = (0..rng.gen_range(1..5))
            .map(|i| Product::new(format!("P{}", i), total + rng.gen_range(1..10_000)))
            .collect();

        assert!(matches!(
            dispense(total, &catalog),
            Err(VendingError::InsufficientFunds)
        ));
    }
}

#[test]
fn test_reports_first_invalid_denomination() {
    let mut rng = rand::thread_rng();
    let denominations = Denominations::default();

    for _ in 0..ROUNDS {
        let mut coins = random_coins(&mut rng, 8);
        let invalid = loop {
            let candidate = rng.gen_range(-10_000..10_000);
            if !COINS.contains(&candidate) {
                break candidate;
            }
        };
        let at = rng.gen_range(0..=coins.len());
        coins.insert(at, invalid);
        // Anything after the first invalid value must not be reported.
        coins.push(1);

        match denominations.validate(&coins) {
            Err(VendingError::InvalidDenomination(value)) => assert_eq!(value, invalid),
            other => panic!("expected invalid denomination, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let machine = machine_with(&[("Coffee", 12000), ("Sosro", 5000), ("Aqua", 2000)]).await;

    let first = machine.list_products().await.unwrap();
    let second = machine.list_products().await.unwrap();
    assert_eq!(first, second);

    machine.buy(&[5000]).await.unwrap();
    let after_buy = machine.list_products().await.unwrap();
    assert_eq!(first, after_buy);
}
