//! The standard card set.
//!
//! Twelve programming-concept cards across the five card types. This is
//! content, not engine logic: any other `CardCatalog` works the same way.

use super::definition::{CardKind, CardTemplate};
use super::registry::CardCatalog;
use crate::effects::Effect;

/// Templates of the standard set, in deck order.
#[must_use]
pub fn standard_templates() -> Vec<CardTemplate> {
    use CardKind::*;

    vec![
        // Control structures
        CardTemplate::new("If Statement", ControlStructure)
            .with_code("if (condition) { }")
            .with_complexity(2)
            .with_energy_cost(2)
            .with_description("Conditional execution")
            .with_effect(Effect::modify_complexity(1))
            .with_effect(Effect::draw(1)),
        CardTemplate::new("While Loop", ControlStructure)
            .with_code("while (condition) { }")
            .with_complexity(2)
            .with_energy_cost(2)
            .with_description("Loop while condition is true")
            .with_effect(Effect::modify_complexity(2)),
        CardTemplate::new("For Loop", ControlStructure)
            .with_code("for(int i=0; i<n; i++)")
            .with_complexity(2)
            .with_energy_cost(3)
            .with_description("Iterate n times")
            .with_effect(Effect::modify_complexity(2))
            .with_effect(Effect::gain_energy(1)),
        CardTemplate::new("Try-Catch", ControlStructure)
            .with_code("try { } catch (Exception e) { }")
            .with_complexity(3)
            .with_energy_cost(3)
            .with_description("Error handling")
            .with_effect(Effect::heal(2))
            .with_effect(Effect::gain_energy(1)),
        // Functions
        CardTemplate::new("Print Function", Function)
            .with_code("System.out.println()")
            .with_complexity(1)
            .with_energy_cost(1)
            .with_description("Output text to console")
            .with_effect(Effect::damage(1)),
        CardTemplate::new("Custom Function", Function)
            .with_code("void customFunction() { }")
            .with_complexity(2)
            .with_energy_cost(2)
            .with_description("Create a custom function")
            .with_effect(Effect::modify_complexity(2))
            .with_effect(Effect::draw(1)),
        // Variables
        CardTemplate::new("Integer Variable", Variable)
            .with_code("int number = 0;")
            .with_complexity(1)
            .with_energy_cost(1)
            .with_description("Create an integer variable")
            .with_effect(Effect::modify_complexity(1)),
        CardTemplate::new("Array Declaration", Variable)
            .with_code("int[] array = new int[10];")
            .with_complexity(2)
            .with_energy_cost(2)
            .with_description("Create a new array")
            .with_effect(Effect::draw(1))
            .with_effect(Effect::modify_complexity(1)),
        // Operators
        CardTemplate::new("Addition", Operator)
            .with_code("+")
            .with_complexity(1)
            .with_energy_cost(1)
            .with_description("Add two values")
            .with_effect(Effect::modify_complexity(1)),
        CardTemplate::new("Multiplication", Operator)
            .with_code("*")
            .with_complexity(1)
            .with_energy_cost(2)
            .with_description("Multiply two values")
            .with_effect(Effect::modify_complexity(2))
            .with_effect(Effect::damage(1)),
        // Built-in functions
        CardTemplate::new("Math.random()", BuiltInFunction)
            .with_code("Math.random()")
            .with_complexity(1)
            .with_energy_cost(2)
            .with_description("Generate random number")
            .with_effect(Effect::draw(1)),
        CardTemplate::new("String.length()", BuiltInFunction)
            .with_code("string.length()")
            .with_complexity(1)
            .with_energy_cost(1)
            .with_description("Get string length")
            .with_effect(Effect::modify_complexity(1))
            .with_effect(Effect::gain_energy(1)),
    ]
}

impl CardCatalog {
    /// Catalog of the standard set.
    #[must_use]
    pub fn standard() -> Self {
        // The standard set has unique names and non-negative costs.
        match Self::new(standard_templates()) {
            Ok(catalog) => catalog,
            Err(err) => panic!("standard card set is malformed: {}", err),
        }
    }
}
