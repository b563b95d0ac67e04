// Behavioural Pattern: Strategy
// The shopping cart pays through whichever payment strategy is currently
// installed; the strategy can be swapped between checkouts.

use design_patterns::console;

// ============================================================================
// Strategies
// ============================================================================

trait PaymentStrategy {
    /// Pays `amount` and returns the confirmation line.
    fn pay(&self, amount: u64) -> String;
}

struct PaypalStrategy;

impl PaymentStrategy for PaypalStrategy {
    fn pay(&self, amount: u64) -> String {
        format!("Paid {} using PayPal", amount)
    }
}

struct CreditCardStrategy;

impl PaymentStrategy for CreditCardStrategy {
    fn pay(&self, amount: u64) -> String {
        format!("Paid {} using credit card", amount)
    }
}

struct BitcoinStrategy;

impl PaymentStrategy for BitcoinStrategy {
    fn pay(&self, amount: u64) -> String {
        format!("Paid {} using Bitcoin", amount)
    }
}

// ============================================================================
// Context
// ============================================================================

struct ShoppingCart {
    amount: u64,
    strategy: Box<dyn PaymentStrategy>,
}

impl ShoppingCart {
    fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self {
            amount: 0,
            strategy,
        }
    }

    fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    fn add_to_cart(&mut self, value: u64) {
        self.amount += value;
    }

    /// Pays the running total with the current strategy and empties the cart.
    fn checkout(&mut self) -> String {
        let receipt = self.strategy.pay(self.amount);
        self.amount = 0;
        receipt
    }

    fn amount(&self) -> u64 {
        self.amount
    }
}


fn main() {
    console::banner("Strategy Pattern");

    let mut cart = ShoppingCart::new(Box::new(PaypalStrategy));
    cart.add_to_cart(100);
    cart.add_to_cart(50);
    console::step(format!("Cart total: {}", cart.amount()));
    console::outcome(cart.checkout());

    console::step("Switching to credit card");
    cart.set_payment_strategy(Box::new(CreditCardStrategy));
    cart.add_to_cart(100);
    console::outcome(cart.checkout());

    console::step("Switching to Bitcoin");
    cart.set_payment_strategy(Box::new(BitcoinStrategy));
    cart.add_to_cart(25);
    console::outcome(cart.checkout());

    console::when_to_use("strategy");
}
