//! Handy model: a phone model record belonging to a brand.

use serde::{Deserialize, Serialize};

use crate::error::{HandyError, ValidationError};
use crate::id::{BrandId, HandyModelId};

/// A phone model (*Handymodell*).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandyModel {
    pub id: HandyModelId,
    pub name: String,
    pub battery_life: u32,
    pub serial_number: String,
    pub brand_id: BrandId,
}

/// Caller-supplied mutable fields of a [`HandyModel`].
///
/// Used both to create a new model and to overwrite an existing one. The id
/// and brand are never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandyModelChanges {
    pub name: String,
    pub battery_life: u32,
    pub serial_number: String,
}

impl HandyModelChanges {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

impl HandyModel {
    /// Create a builder for constructing a [`HandyModel`].
    #[must_use]
    pub fn builder() -> HandyModelBuilder {
        HandyModelBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HandyError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Return a copy with every mutable field overwritten; `id` is kept.
    #[must_use]
    pub fn apply(self, changes: HandyModelChanges, brand_id: BrandId) -> Self {
        Self {
            id: self.id,
            name: changes.name,
            battery_life: changes.battery_life,
            serial_number: changes.serial_number,
            brand_id,
        }
    }
}

/// Step-by-step builder for [`HandyModel`].
#[derive(Debug, Default)]
pub struct HandyModelBuilder {
    id: Option<HandyModelId>,
    name: Option<String>,
    battery_life: Option<u32>,
    serial_number: Option<String>,
    brand_id: Option<BrandId>,
}

impl HandyModelBuilder {
    #[must_use]
    pub fn id(mut self, id: HandyModelId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn battery_life(mut self, battery_life: u32) -> Self {
        self.battery_life = Some(battery_life);
        self
    }

    #[must_use]
    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    #[must_use]
    pub fn brand_id(mut self, brand_id: BrandId) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    /// Fill name, battery life and serial number from `changes`.
    #[must_use]
    pub fn changes(self, changes: HandyModelChanges) -> Self {
        self.name(changes.name)
            .battery_life(changes.battery_life)
            .serial_number(changes.serial_number)
    }

    /// Consume the builder, validate, and return a [`HandyModel`].
    ///
    /// A fresh id is generated when none was set.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<HandyModel, HandyError> {
        let model = HandyModel {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            battery_life: self.battery_life.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            brand_id: self.brand_id.unwrap_or_default(),
        };
        model.validate()?;
        Ok(model)
    }
}
