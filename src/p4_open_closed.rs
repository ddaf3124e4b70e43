// Open/Closed Principle: PaymentMethod variants
// The string-dispatching processor must be edited for every new channel;
// the trait version is extended by adding a type.

// =============================================================================
// Milestone 1: The problem - dispatch that grows by modification
// =============================================================================

pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn pay(&self, channel: &str, amount: f64) -> String {
        // every new channel forces another arm here
        match channel {
            "credit" => format!("making payment via credit card {amount:.2}"),
            "debit" => format!("paying via debit card {amount:.2}"),
            other => format!("no handler for payment channel '{other}'"),
        }
    }
}

// =============================================================================
// Milestone 2: The solution - closed for modification, open for extension
// =============================================================================

pub trait PaymentMethod {
    fn pay(&self, amount: f64) -> String;
}

pub struct CreditCard;

impl PaymentMethod for CreditCard {
    fn pay(&self, amount: f64) -> String {
        format!("making payment via credit card {amount:.2}")
    }
}

pub struct DebitCard;

impl PaymentMethod for DebitCard {
    fn pay(&self, amount: f64) -> String {
        format!("paying via debit card {amount:.2}")
    }
}

pub fn checkout(method: &dyn PaymentMethod, amount: f64) {
    println!("{}", method.pay(amount));
}

// =============================================================================
// Milestone 3: Extension without modification
// =============================================================================

/// A new channel is a new type; `checkout` and the existing variants
/// stay untouched.
pub struct Upi;

impl PaymentMethod for Upi {
    fn pay(&self, amount: f64) -> String {
        format!("paying via UPI {amount:.2}")
    }
}

fn main() {
    println!("=== Open/Closed Principle ===\n");

    println!("=== Problem: string dispatch ===");
    let processor = PaymentProcessor;
    println!("{}", processor.pay("credit", 100.0));
    println!("{}", processor.pay("debit", 100.0));
    println!("{}", processor.pay("upi", 100.0));
    println!();

    println!("=== Solution: trait dispatch ===");
    checkout(&CreditCard, 100.0);
    checkout(&DebitCard, 100.0);
    checkout(&Upi, 100.0);
}

// =============================================================================
// Tests
// =============================================================================
