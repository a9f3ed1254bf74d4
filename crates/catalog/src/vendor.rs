//! Vendor directory and invoice-name cleanup.

use serde::{Deserialize, Serialize};

use menucost_core::{DomainError, DomainResult, Entity, VendorId};

/// Entity: Vendor (invoice issuer).
///
/// `aliases` holds the raw spellings seen on invoices, OCR variants
/// included; `display_name` is what reports show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    id: VendorId,
    display_name: String,
    aliases: Vec<String>,
}

impl Vendor {
    pub fn new(
        id: VendorId,
        display_name: impl Into<String>,
        aliases: Vec<String>,
    ) -> DomainResult<Self> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(DomainError::validation("vendor display name cannot be empty"));
        }
        // A blank alias would substring-match every invoice name.
        if aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "vendor '{display_name}': aliases cannot be empty or blank"
            )));
        }
        Ok(Self {
            id,
            display_name,
            aliases,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl Entity for Vendor {
    type Id = VendorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only directory of known vendors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorDirectory {
    vendors: Vec<Vendor>,
}

impl VendorDirectory {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Resolve a raw invoice vendor name to a known vendor.
    ///
    /// Exact alias match first, then substring match either way (invoice
    /// names often carry branch suffixes or truncations).
    pub fn resolve(&self, raw_name: &str) -> Option<&Vendor> {
        let raw = raw_name.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(v) = self
            .vendors
            .iter()
            .find(|v| v.aliases.iter().any(|a| a == raw))
        {
            return Some(v);
        }
        self.vendors.iter().find(|v| {
            v.aliases
                .iter()
                .any(|a| raw.contains(a.as_str()) || a.contains(raw))
        })
    }

    /// Display name for a raw invoice vendor name.
    ///
    /// Falls back to the raw name itself when unknown (ASCII names are
    /// usually already readable), or `"Unknown"` when empty.
    pub fn clean_name(&self, raw_name: &str) -> String {
        let raw = raw_name.trim();
        if raw.is_empty() {
            return "Unknown".to_string();
        }
        match self.resolve(raw) {
            Some(v) => v.display_name.clone(),
            None => raw.to_string(),
        }
    }
}
