// Builder Pattern: step-wise construction of a House
// Demonstrates fluent owned-self chaining and a typestate variant that
// enforces the mandatory fields at compile time.

use std::marker::PhantomData;

// =============================================================================
// Milestone 1: Fluent builder with mandatory and optional fields
// =============================================================================

/// Immutable once built; construction goes through [`HouseBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    roof: String,
    bathroom: String,
    balcony: Option<String>,
    has_garden: bool,
    has_swimming_pool: bool,
}

impl House {
    /// Entry point for the fluent API. Roof and bathroom are mandatory,
    /// everything else defaults to "absent".
    pub fn builder(roof: impl Into<String>, bathroom: impl Into<String>) -> HouseBuilder {
        HouseBuilder::new(roof, bathroom)
    }

    pub fn roof(&self) -> &str {
        &self.roof
    }

    pub fn bathroom(&self) -> &str {
        &self.bathroom
    }

    pub fn balcony(&self) -> Option<&str> {
        self.balcony.as_deref()
    }

    pub fn has_garden(&self) -> bool {
        self.has_garden
    }

    pub fn has_swimming_pool(&self) -> bool {
        self.has_swimming_pool
    }
}

/// Accumulates construction parameters; `build` transfers every
/// accumulated field into the finished [`House`].
pub struct HouseBuilder {
    roof: String,
    bathroom: String,
    balcony: Option<String>,
    has_garden: bool,
    has_swimming_pool: bool,
}

impl HouseBuilder {
    fn new(roof: impl Into<String>, bathroom: impl Into<String>) -> Self {
        Self {
            roof: roof.into(),
            bathroom: bathroom.into(),
            balcony: None,
            has_garden: false,
            has_swimming_pool: false,
        }
    }

    pub fn balcony(mut self, material: impl Into<String>) -> Self {
        self.balcony = Some(material.into());
        self
    }

    pub fn garden(mut self, has_garden: bool) -> Self {
        self.has_garden = has_garden;
        self
    }

    pub fn swimming_pool(mut self, has_swimming_pool: bool) -> Self {
        self.has_swimming_pool = has_swimming_pool;
        self
    }

    pub fn build(self) -> House {
        House {
            roof: self.roof,
            bathroom: self.bathroom,
            balcony: self.balcony,
            has_garden: self.has_garden,
            has_swimming_pool: self.has_swimming_pool,
        }
    }
}

fn fluent_builder_example() {
    let house = House::builder("Tile", "Marble")
        .balcony("Teak")
        .garden(true)
        .swimming_pool(true)
        .build();

    println!("Built house:");
    println!("  roof: {}", house.roof());
    println!("  bathroom: {}", house.bathroom());
    println!("  balcony: {:?}", house.balcony());
    println!("  garden: {}", house.has_garden());
    println!("  swimming pool: {}", house.has_swimming_pool());

    let minimal = House::builder("Slate", "Ceramic").build();
    println!("Minimal house: {:?}", minimal);
}

// =============================================================================
// Milestone 2: Typestate builder - mandatory fields checked at compile time
// =============================================================================

pub struct NeedsBathroom;
pub struct Ready;

/// Same accumulation as [`HouseBuilder`], but `build` only exists once
/// both mandatory fields have been supplied.
pub struct HousePlan<S> {
    roof: String,
    bathroom: Option<String>,
    balcony: Option<String>,
    has_garden: bool,
    has_swimming_pool: bool,
    _state: PhantomData<S>,
}

impl HousePlan<NeedsBathroom> {
    pub fn with_roof(roof: impl Into<String>) -> Self {
        Self {
            roof: roof.into(),
            bathroom: None,
            balcony: None,
            has_garden: false,
            has_swimming_pool: false,
            _state: PhantomData,
        }
    }

    pub fn bathroom(self, material: impl Into<String>) -> HousePlan<Ready> {
        HousePlan {
            roof: self.roof,
            bathroom: Some(material.into()),
            balcony: self.balcony,
            has_garden: self.has_garden,
            has_swimming_pool: self.has_swimming_pool,
            _state: PhantomData,
        }
    }
}

impl HousePlan<Ready> {
    pub fn balcony(mut self, material: impl Into<String>) -> Self {
        self.balcony = Some(material.into());
        self
    }

    pub fn garden(mut self, has_garden: bool) -> Self {
        self.has_garden = has_garden;
        self
    }

    pub fn swimming_pool(mut self, has_swimming_pool: bool) -> Self {
        self.has_swimming_pool = has_swimming_pool;
        self
    }

    pub fn build(self) -> House {
        House {
            roof: self.roof,
            bathroom: self.bathroom.unwrap(),
            balcony: self.balcony,
            has_garden: self.has_garden,
            has_swimming_pool: self.has_swimming_pool,
        }
    }
}

fn typestate_example() {
    // Compile-time error if the bathroom step is skipped:
    // let house = HousePlan::with_roof("Tile").build(); // no method `build`
    let house = HousePlan::with_roof("Thatch")
        .bathroom("Granite")
        .garden(true)
        .build();

    println!("Planned house: {:?}", house);
}

fn main() {
    println!("=== Builder Pattern ===\n");

    println!("=== Fluent builder ===");
    fluent_builder_example();
    println!();

    println!("=== Typestate builder ===");
    typestate_example();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_transfers_every_field() {
        let house = House::builder("Tile", "Marble")
            .garden(true)
            .swimming_pool(true)
            .build();

        assert_eq!(house.roof(), "Tile");
        assert_eq!(house.bathroom(), "Marble");
        assert!(house.has_garden());
        assert!(house.has_swimming_pool());
        assert_eq!(house.balcony(), None);
    }

    #[test]
    fn test_minimal_house_defaults() {
        let house = House::builder("Slate", "Ceramic").build();

        assert_eq!(house.roof(), "Slate");
        assert_eq!(house.bathroom(), "Ceramic");
        assert_eq!(house.balcony(), None);
        assert!(!house.has_garden());
        assert!(!house.has_swimming_pool());
    }

    #[test]
    fn test_balcony_is_optional() {
        let house = House::builder("Tile", "Marble").balcony("Teak").build();
        assert_eq!(house.balcony(), Some("Teak"));
    }

    #[test]
    fn test_chaining_order_does_not_matter() {
        let a = House::builder("Tile", "Marble")
            .garden(true)
            .swimming_pool(false)
            .build();
        let b = House::builder("Tile", "Marble")
            .swimming_pool(false)
            .garden(true)
            .build();

        assert_eq!(a, b);
    }

    #[test]
    fn test_last_setter_wins() {
        let house = House::builder("Tile", "Marble")
            .garden(true)
            .garden(false)
            .build();
        assert!(!house.has_garden());
    }

    #[test]
    fn test_typestate_builder() {
        let house = HousePlan::with_roof("Thatch")
            .bathroom("Granite")
            .balcony("Pine")
            .swimming_pool(true)
            .build();

        assert_eq!(house.roof(), "Thatch");
        assert_eq!(house.bathroom(), "Granite");
        assert_eq!(house.balcony(), Some("Pine"));
        assert!(house.has_swimming_pool());
        assert!(!house.has_garden());
    }

    #[test]
    fn test_both_builders_agree() {
        let fluent = House::builder("Tile", "Marble").garden(true).build();
        let typestate = HousePlan::with_roof("Tile")
            .bathroom("Marble")
            .garden(true)
            .build();

        assert_eq!(fluent, typestate);
    }

    #[test]
    fn test_house_clone() {
        let house = House::builder("Tile", "Marble").build();
        let copy = house.clone();
        assert_eq!(house, copy);
    }
}
