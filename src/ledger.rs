//! Append-only order ledger.

use crate::domain::Order;

#[derive(Debug)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_id: u32,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Records a pending order under the next sequential id.
    pub fn append(&mut self, user_id: u32, product_id: u32, quantity: u32) -> Order {
        let order = Order::new(self.next_id, user_id, product_id, quantity);
        self.next_id += 1;
        self.orders.push(order.clone());
        order
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;

    #[test]
    fn append_keeps_order_and_numbers_sequentially() {
        let mut ledger = OrderLedger::new();
        assert!(ledger.is_empty());

        let first = ledger.append(3, 1, 40);
        let second = ledger.append(3, 2, 5);

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.orders()[1].product_id, 2);
    }
}
