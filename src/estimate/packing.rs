/// Packing line item with a resolved price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedItem {
    pub unit_price: f64,
    pub quantity: u32,
}

impl PricedItem {
    pub fn cost(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Sum of unit price times quantity. An empty list means no packing was requested.
pub fn packing_cost(items: &[PricedItem]) -> f64 {
    items.iter().map(PricedItem::cost).sum()
}
