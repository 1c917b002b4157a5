//! Launch site selection as driven by the dashboard dropdown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES_VALUE: &str = "ALL";

/// Label shown for [`ALL_SITES_VALUE`] in the dropdown.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The fixed set of launch sites offered by the dropdown.
pub const KNOWN_SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

/// A (label, value) dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Dropdown entries: "All Sites" first, then each known site labelled by its own name.
pub fn site_options() -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    })
    .chain(KNOWN_SITES.iter().map(|site| SiteOption {
        label: site.to_string(),
        value: site.to_string(),
    }))
    .collect()
}

/// The current dropdown selection.
///
/// Values other than [`ALL_SITES_VALUE`] are taken as a site name without
/// validation; a site that is not in the data simply matches no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(site) => site.as_str(),
        }
    }

    /// The site name to filter on, or `None` for every site.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site.as_str()),
        }
    }

    pub fn is_known(&self) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => KNOWN_SITES.contains(&site.as_str()),
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
