// Singleton Pattern: process-wide AppSettings
// The naive check-then-create sequence races under concurrent first access;
// OnceLock and lazy_static both give at-most-once construction instead.

use lazy_static::lazy_static;
use std::sync::OnceLock;

// =============================================================================
// Milestone 1: Singleton with OnceLock
// =============================================================================

/// Process-wide configuration, constructed once on first access.
/// Both fields are fixed at construction and never mutated.
pub struct AppSettings {
    database_url: String,
    api_key: String,
}

impl AppSettings {
    fn load() -> Self {
        Self {
            database_url: "mysql://localhost:3306".to_string(),
            api_key: "12345-abcde".to_string(),
        }
    }

    /// Every call returns the same instance; concurrent first access still
    /// constructs exactly one.
    pub fn global() -> &'static AppSettings {
        static SETTINGS: OnceLock<AppSettings> = OnceLock::new();
        SETTINGS.get_or_init(Self::load)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

fn singleton_example() {
    let settings = AppSettings::global();
    let copy = AppSettings::global();

    println!("Singleton AppSettings:");
    println!("  database_url: {}", settings.database_url());
    println!("  api_key: {}", settings.api_key());
    println!("  same instance: {}", std::ptr::eq(settings, copy));
}

// =============================================================================
// Milestone 2: lazy_static form of the same guarantee
// =============================================================================

lazy_static! {
    static ref LEGACY_SETTINGS: AppSettings = AppSettings::load();
}

pub fn legacy_global() -> &'static AppSettings {
    &LEGACY_SETTINGS
}

fn lazy_static_example() {
    let a = legacy_global();
    let b = legacy_global();
    println!("lazy_static AppSettings:");
    println!("  database_url: {}", a.database_url());
    println!("  same instance: {}", std::ptr::eq(a, b));
}

// =============================================================================
// Milestone 3: Dependency injection instead of reaching for the global
// =============================================================================

/// Borrows its configuration explicitly, so tests can hand it a local
/// AppSettings instead of the process-wide one.
pub struct ReportService<'a> {
    settings: &'a AppSettings,
}

impl<'a> ReportService<'a> {
    pub fn new(settings: &'a AppSettings) -> Self {
        Self { settings }
    }

    pub fn connection_target(&self) -> &str {
        self.settings.database_url()
    }
}

fn dependency_injection_example() {
    let service = ReportService::new(AppSettings::global());
    println!("DI example - reporting against: {}", service.connection_target());
}

// =============================================================================
// Tests
// =============================================================================


fn main() {
    println!("=== Singleton Pattern ===\n");

    println!("=== OnceLock ===");
    singleton_example();
    println!();

    println!("=== lazy_static ===");
    lazy_static_example();
    println!();

    println!("=== Dependency injection ===");
    dependency_injection_example();
}
