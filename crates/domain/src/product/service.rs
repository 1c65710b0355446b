use super::{Product, ProductError};

/// Operations spanning several products.
pub struct ProductService;

impl ProductService {
    /// Raises the price of every product by `percentage` percent.
    ///
    /// Negative percentages lower prices. A product whose new price would
    /// be negative or overflow rejects the change and stops the batch.
    pub fn increase_price(products: &mut [Product], percentage: i64) -> Result<(), ProductError> {
        for product in products.iter_mut() {
            let price = product.price();
            let new_price = price
                .percentage(percentage)
                .and_then(|increase| price.checked_add(increase))
                .ok_or_else(|| ProductError::PriceOverflow {
                    product_id: product.id().to_string(),
                })?;
            product.change_price(new_price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", Money::from_cents(1000)).unwrap(),
            Product::new("p2", "Product 2", Money::from_cents(2000)).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100).unwrap();

        assert_eq!(products[0].price().cents(), 2000);
        assert_eq!(products[1].price().cents(), 4000);
    }

    #[test]
    fn test_increase_price_rounds_to_cents() {
        let mut products = vec![Product::new("p1", "Product 1", Money::from_cents(985)).unwrap()];
        ProductService::increase_price(&mut products, 10).unwrap();
        assert_eq!(products[0].price().cents(), 1084);
    }

    #[test]
    fn test_decrease_below_zero_is_rejected() {
        let mut products = vec![Product::new("p1", "Product 1", Money::from_cents(100)).unwrap()];
        let err = ProductService::increase_price(&mut products, -150).unwrap_err();
        assert!(matches!(err, ProductError::NegativePrice { .. }));
        assert_eq!(products[0].price().cents(), 100);
    }

    #[test]
    fn test_huge_percentage_is_rejected() {
        let mut products = vec![
            Product::new("p1", "Product 1", Money::from_cents(1000)).unwrap(),
            Product::new("p2", "Product 2", Money::from_cents(2000)).unwrap(),
        ];

        let err = ProductService::increase_price(&mut products, i64::MAX / 100).unwrap_err();

        assert_eq!(
            err,
            ProductError::PriceOverflow {
                product_id: "p1".to_string()
            }
        );
        assert_eq!(err.to_string(), "Price of p1 is out of range");
        assert_eq!(products[0].price().cents(), 1000);
        assert_eq!(products[1].price().cents(), 2000);
    }

    #[test]
    fn test_increase_that_overflows_on_addition_is_rejected() {
        let mut products =
            vec![Product::new("p1", "Product 1", Money::from_cents(i64::MAX - 10)).unwrap()];

        let err = ProductService::increase_price(&mut products, 1).unwrap_err();

        assert!(matches!(err, ProductError::PriceOverflow { .. }));
        assert_eq!(products[0].price().cents(), i64::MAX - 10);
    }
}
