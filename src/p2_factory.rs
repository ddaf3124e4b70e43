// Factory Pattern: string key to Transport variant dispatch
// Demonstrates a trait-object factory and the zero-cost enum form, both
// sharing one case-insensitive key parser.

use colored::Colorize;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Milestone 1: Transport capability and its variants
// =============================================================================

pub trait Transport: std::fmt::Debug {
    fn deliver(&self) -> String;
}

#[derive(Debug)]
pub struct Bike;

impl Transport for Bike {
    fn deliver(&self) -> String {
        "delivering by bike".to_string()
    }
}

#[derive(Debug)]
pub struct Car;

impl Transport for Car {
    fn deliver(&self) -> String {
        "delivering by car".to_string()
    }
}

#[derive(Debug)]
pub struct Bus;

impl Transport for Bus {
    fn deliver(&self) -> String {
        "delivering by bus".to_string()
    }
}

// =============================================================================
// Milestone 2: Key parsing and the trait-object factory
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("unsupported transport type: '{0}'")]
    UnsupportedType(String),
}

/// The fixed set of recognized transport keys. Parsing is the single
/// normalization path for both factory forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Bike,
    Car,
    Bus,
}

impl FromStr for TransportKind {
    type Err = TransportError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.to_lowercase().as_str() {
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "bus" => Ok(Self::Bus),
            other => Err(TransportError::UnsupportedType(other.to_string())),
        }
    }
}

pub fn create_transport(key: &str) -> Result<Box<dyn Transport>, TransportError> {
    Ok(match key.parse::<TransportKind>()? {
        TransportKind::Bike => Box::new(Bike),
        TransportKind::Car => Box::new(Car),
        TransportKind::Bus => Box::new(Bus),
    })
}

// =============================================================================
// Milestone 3: Enum-based factory (no heap allocation, no dynamic dispatch)
// =============================================================================

pub enum Vehicle {
    Bike(Bike),
    Car(Car),
    Bus(Bus),
}

impl Vehicle {
    pub fn new(kind: TransportKind) -> Self {
        match kind {
            TransportKind::Bike => Vehicle::Bike(Bike),
            TransportKind::Car => Vehicle::Car(Car),
            TransportKind::Bus => Vehicle::Bus(Bus),
        }
    }

    pub fn deliver(&self) -> String {
        match self {
            Vehicle::Bike(v) => v.deliver(),
            Vehicle::Car(v) => v.deliver(),
            Vehicle::Bus(v) => v.deliver(),
        }
    }
}

fn dispatch_example(key: &str) {
    match create_transport(key) {
        Ok(vehicle) => println!("{} {}", "[ok]".green(), vehicle.deliver()),
        Err(err) => println!("{} {err}", "[err]".red()),
    }
}

fn main() {
    println!("=== Factory Pattern ===\n");

    println!("=== Trait-object factory ===");
    dispatch_example("car");
    dispatch_example("BIKE");
    dispatch_example("Bus");
    dispatch_example("plane");
    println!();

    println!("=== Enum factory ===");
    let vehicle = Vehicle::new("bus".parse().expect("bus is a recognized key"));
    println!("{}", vehicle.deliver());
}

// =============================================================================
// Tests
// =============================================================================
