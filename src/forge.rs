use crate::checksum;
use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::debug;

/// A forged password together with the numbers it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgeReport {
    pub known: String,
    pub reference: i64,
    pub known_checksum: i64,
    pub difference: i64,
    pub forged: String,
}

impl ForgeReport {
    pub fn escaped_forged(&self) -> String {
        self.forged.escape_default().to_string()
    }

    pub fn hex_forged(&self) -> String {
        hex::encode(self.forged.as_bytes())
    }
}

pub fn target_difference(reference: i64, known: &str) -> Result<i64> {
    let known_checksum = checksum::compute_checksum(known);
    reference.checked_sub(known_checksum).ok_or_else(|| {
        anyhow!(
            "Difference between reference {} and checksum {} of '{}' overflows",
            reference,
            known_checksum,
            known
        )
    })
}

/// Forges the suffix that brings `checksum(known + suffix)` up to `reference`.
pub fn forge_password(known: &str, reference: i64) -> Result<ForgeReport> {
    let known_checksum = checksum::compute_checksum(known);
    let difference = target_difference(reference, known)?;
    debug!(known, known_checksum, reference, difference, "computed target difference");

    if difference < 0 {
        return Err(anyhow!(
            "Reference checksum {} is below checksum {} of '{}'",
            reference,
            known_checksum,
            known
        ));
    }

    let forged = checksum::minimal_string_for_checksum(difference)?;
    debug!(codes = %checksum::describe_codes(&forged), "forged password");

    // Sanity check
    let total = checksum::compute_checksum(&format!("{}{}", known, forged));
    if total != reference {
        return Err(anyhow!(
            "Forged checksum {} does not match reference {}",
            total,
            reference
        ));
    }

    Ok(ForgeReport {
        known: known.to_string(),
        reference,
        known_checksum,
        difference,
        forged,
    })
}
