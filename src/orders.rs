use std::fmt;

use serde::{Deserialize, Serialize};

/// A single line-item purchase: one item, its nominal price and the discount
/// applied to it.
///
/// Fields are set once by [`Order::new`] and never change afterwards.
/// No validation happens on construction:
/// - prices and discounts may be negative
/// - the discount may exceed the price, in which case
///   [`Order::calculate_price`] is negative
///
/// # Example
/// ```
/// use order_pricing::orders::Order;
///
/// let order = Order::new(Some(1), "itemA", 10000, 1000);
/// assert_eq!(order.calculate_price(), 9000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: Option<i64>,
    item_name: String,
    item_price: i32,
    discount_price: i32,
}

impl Order {
    /// Creates an order from its four fields, stored verbatim.
    pub fn new(
        id: Option<i64>,
        item_name: impl Into<String>,
        item_price: i32,
        discount_price: i32,
    ) -> Self {
        Self {
            id,
            item_name: item_name.into(),
            item_price,
            discount_price,
        }
    }

    /// Final price: `item_price - discount_price`.
    ///
    /// Never fails. Overflow wraps around instead of panicking.
    pub fn calculate_price(&self) -> i32 {
        self.item_price.wrapping_sub(self.discount_price)
    }

    /// The order's own identifier.
    ///
    /// Despite the name this is not a reference to a separate member record.
    pub fn member_id(&self) -> Option<i64> {
        self.id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn item_price(&self) -> i32 {
        self.item_price
    }

    pub fn discount_price(&self) -> i32 {
        self.discount_price
    }
}

/// Renders `Order{id=1, itemName='itemA', itemPrice=10000, discountPrice=1000}`.
/// A missing id prints as `null`.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order{{id=")?;
        match self.id {
            Some(id) => write!(f, "{}", id)?,
            None => write!(f, "null")?,
        }
        write!(
            f,
            ", itemName='{}', itemPrice={}, discountPrice={}}}",
            self.item_name, self.item_price, self.discount_price
        )
    }
}

/// Serialized form of an [`Order`] together with its calculated price.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView<'a> {
    #[serde(flatten)]
    pub order: &'a Order,
    pub calculated_price: i32,
}

impl<'a> From<&'a Order> for OrderView<'a> {
    fn from(order: &'a Order) -> Self {
        OrderView {
            order,
            calculated_price: order.calculate_price(),
        }
    }
}
