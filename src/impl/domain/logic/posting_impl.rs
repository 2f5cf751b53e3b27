use crate::entities::{Amount, Posting};

impl Posting {
    /// A posting held at cost or converted at a price contributes a weight
    /// that differs from its units.
    pub fn has_nontrivial_balance(&self) -> bool {
        self.cost.is_some() || self.price.is_some()
    }

    /// Balancing contribution of the posting: units × cost in the cost
    /// currency, else units × price in the price currency, else the units.
    ///
    /// `None` if the units were elided or the product overflows.
    pub fn weight(&self) -> Option<Amount> {
        let units = self.units.as_ref()?;
        if let Some(cost) = &self.cost {
            return units
                .number
                .checked_mul(cost.number)
                .map(|n| Amount::new(n, cost.currency.clone()));
        }
        if let Some(price) = &self.price {
            return units
                .number
                .checked_mul(price.number)
                .map(|n| Amount::new(n, price.currency.clone()));
        }
        Some(units.clone())
    }
}
