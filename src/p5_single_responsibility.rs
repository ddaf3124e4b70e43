// Single Responsibility Principle: the Invoice that does too much
// One struct couples billing data with generation, persistence, and
// notification; the refactor gives each behavior its own home.

// =============================================================================
// Milestone 1: The problem - three responsibilities on one entity
// =============================================================================

/// Anti-pattern on purpose: holds the amount AND generates AND persists
/// AND notifies.
pub struct CoupledInvoice {
    amount: u32,
}

impl CoupledInvoice {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn generate(&self) -> String {
        "invoice is generated".to_string()
    }

    pub fn save_to_db(&self) -> String {
        "invoice is saved to db".to_string()
    }

    pub fn send_email(&self) -> String {
        "email is sent".to_string()
    }
}

// =============================================================================
// Milestone 2: The refactor - one responsibility each
// =============================================================================

/// Just the billing data.
pub struct Invoice {
    amount: u32,
}

impl Invoice {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

pub struct InvoiceGenerator;

impl InvoiceGenerator {
    pub fn generate(&self, _invoice: &Invoice) -> String {
        "invoice is generated".to_string()
    }
}

/// Persistence is simulated; only the message is observable.
pub struct InvoiceRepository;

impl InvoiceRepository {
    pub fn save(&self, _invoice: &Invoice) -> String {
        "invoice is saved to db".to_string()
    }
}

pub struct EmailNotifier;

impl EmailNotifier {
    pub fn send(&self, _invoice: &Invoice) -> String {
        "email is sent".to_string()
    }
}

fn main() {
    println!("=== Single Responsibility Principle ===\n");

    println!("=== Problem: coupled invoice ===");
    let coupled = CoupledInvoice::new(250);
    println!("amount: {}", coupled.amount());
    println!("{}", coupled.generate());
    println!("{}", coupled.save_to_db());
    println!("{}", coupled.send_email());
    println!();

    println!("=== Solution: one job per type ===");
    let invoice = Invoice::new(250);
    println!("amount: {}", invoice.amount());
    println!("{}", InvoiceGenerator.generate(&invoice));
    println!("{}", InvoiceRepository.save(&invoice));
    println!("{}", EmailNotifier.send(&invoice));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupled_invoice_holds_amount() {
        let invoice = CoupledInvoice::new(250);
        assert_eq!(invoice.amount(), 250);
    }

    #[test]
    fn test_coupled_invoice_messages() {
        let invoice = CoupledInvoice::new(250);
        assert_eq!(invoice.generate(), "invoice is generated");
        assert_eq!(invoice.save_to_db(), "invoice is saved to db");
        assert_eq!(invoice.send_email(), "email is sent");
    }

    #[test]
    fn test_refactor_preserves_observable_messages() {
        let coupled = CoupledInvoice::new(100);
        let invoice = Invoice::new(100);

        assert_eq!(InvoiceGenerator.generate(&invoice), coupled.generate());
        assert_eq!(InvoiceRepository.save(&invoice), coupled.save_to_db());
        assert_eq!(EmailNotifier.send(&invoice), coupled.send_email());
    }

    #[test]
    fn test_refactored_invoice_is_data_only() {
        let invoice = Invoice::new(42);
        assert_eq!(invoice.amount(), 42);
    }

    #[test]
    fn test_actions_are_idempotent() {
        let invoice = Invoice::new(10);
        assert_eq!(
            InvoiceRepository.save(&invoice),
            InvoiceRepository.save(&invoice)
        );
        assert_eq!(EmailNotifier.send(&invoice), EmailNotifier.send(&invoice));
    }
}
