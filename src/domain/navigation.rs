use super::money::Money;
use super::order::PayMethod;
use std::fmt;

pub const LOGIN_PAGE: &str = "/login.html";
pub const CART_PAGE: &str = "/cart.html";
pub const ORDER_SUCCESS_PAGE: &str = "/order_success.html";

/// Pages the checkout page can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Login {
        next: Option<String>,
    },
    OrderSuccess {
        order_id: String,
        amount: Money,
        pay_method: PayMethod,
    },
}

impl Destination {
    /// Login page that returns to the cart once signed in.
    pub fn login_then_cart() -> Self {
        Destination::Login {
            next: Some(CART_PAGE.to_string()),
        }
    }

    pub fn login() -> Self {
        Destination::Login { next: None }
    }

    pub fn path(&self) -> String {
        match self {
            Destination::Login { next: Some(next) } => format!("{}?next={}", LOGIN_PAGE, next),
            Destination::Login { next: None } => LOGIN_PAGE.to_string(),
            Destination::OrderSuccess {
                order_id,
                amount,
                pay_method,
            } => format!(
                "{}?order_id={}&amount={}&pay={}",
                ORDER_SUCCESS_PAGE, order_id, amount, pay_method
            ),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
