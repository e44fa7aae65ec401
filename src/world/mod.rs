//! The world context: catalog plus ledger
//!
//! `World` is the explicit context object presentation code holds instead
//! of a process-wide singleton. It owns the static catalog and the mutable
//! ledger, and keeps the two reconciled: any city a ledger references that
//! the catalog never declared gets a synthesized placeholder.

use std::path::Path;

use crate::FlashrError;
use crate::catalog::{Catalog, StatusFeed};
use crate::codec::{AliasTable, EncodeStyle};
use crate::ledger::Ledger;

/// Catalog and ledger, kept consistent
#[derive(Debug, Clone, Default)]
pub struct World {
    catalog: Catalog,
    ledger: Ledger,
    aliases: AliasTable,
}

impl World {
    /// A world with the given catalog and an empty ledger
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: Ledger::new(),
            aliases: AliasTable::default(),
        }
    }

    /// Replace the default legacy alias table
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Build a world from descriptor JSON, an optional status feed, and
    /// optional flash-file text
    ///
    /// # Errors
    /// Returns a [`FlashrError`] if the descriptor, feed, or ledger text
    /// fails to parse.
    pub fn build(
        descriptor_json: &str,
        status_json: Option<&str>,
        ledger_text: Option<&str>,
    ) -> Result<Self, FlashrError> {
        let mut catalog = Catalog::from_json(descriptor_json)?;
        if let Some(json) = status_json {
            let feed: StatusFeed =
                serde_json::from_str(json).map_err(crate::catalog::CatalogError::from)?;
            catalog.apply_status_feed(&feed);
        }

        let mut world = Self::new(catalog);
        if let Some(text) = ledger_text {
            world.reload_ledger(text)?;
        }
        Ok(world)
    }

    /// Build a world from files on disk
    ///
    /// The status feed and flash file are optional; a missing flash file
    /// means an empty ledger, not an error.
    ///
    /// # Errors
    /// Returns a [`FlashrError`] on I/O or parse failure.
    pub fn build_from_files(
        descriptor: &Path,
        status_feed: Option<&Path>,
        flash_file: Option<&Path>,
    ) -> Result<Self, FlashrError> {
        let descriptor_json = std::fs::read_to_string(descriptor)?;
        let status_json = status_feed
            .filter(|path| path.exists())
            .map(std::fs::read_to_string)
            .transpose()?;
        let ledger_text = flash_file
            .filter(|path| path.exists())
            .map(std::fs::read_to_string)
            .transpose()?;

        Self::build(
            &descriptor_json,
            status_json.as_deref(),
            ledger_text.as_deref(),
        )
    }

    /// Replace the ledger from flash-file text
    ///
    /// Atomic from the caller's point of view: the text decodes into a
    /// fresh ledger first, and only on success does it replace the old one
    /// and trigger reconciliation. A decode failure leaves everything as
    /// it was.
    ///
    /// # Errors
    /// Returns a [`FlashrError`] if the text fails to decode.
    pub fn reload_ledger(&mut self, text: &str) -> Result<(), FlashrError> {
        let ledger = Ledger::from_text(text, &self.aliases)?;
        self.ledger = ledger;
        self.reconcile();
        Ok(())
    }

    /// Synthesize placeholder cities for ledger-referenced prefixes the
    /// catalog does not declare
    fn reconcile(&mut self) {
        for (city_code, max_order) in self.ledger.referenced_cities() {
            if !self.catalog.contains(&city_code) {
                self.catalog.add_synthetic_city(&city_code, max_order);
            }
        }
    }

    /// Record a find, synthesizing the city if the catalog lacks it
    ///
    /// # Errors
    /// Returns a [`FlashrError`] if the code is malformed.
    pub fn mark(&mut self, code: &str) -> Result<bool, FlashrError> {
        let added = self.ledger.mark(code)?;
        if added {
            self.reconcile();
        }
        Ok(added)
    }

    /// Remove a find; a non-member is a no-op
    ///
    /// # Errors
    /// Returns a [`FlashrError`] if the code is malformed.
    pub fn unmark(&mut self, code: &str) -> Result<bool, FlashrError> {
        Ok(self.ledger.unmark(code)?)
    }

    /// Serialize the ledger back to flash-file text
    #[must_use]
    pub fn serialize_ledger(&self, style: EncodeStyle, emit_properties: bool) -> String {
        self.ledger.serialize(style, emit_properties)
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}
