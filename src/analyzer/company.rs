//! Heuristic company classification.

use crate::data::{CompanyProfile, CompanyType};

/// Lower-case fragments of well-known enterprise employers.
pub const KNOWN_ENTERPRISES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "meta",
    "facebook",
    "apple",
    "netflix",
    "tcs",
    "infosys",
    "wipro",
    "accenture",
    "cognizant",
    "capgemini",
    "hcl",
    "ibm",
    "oracle",
    "cisco",
    "intel",
    "samsung",
    "adobe",
    "salesforce",
    "uber",
    "linkedin",
];

const ENTERPRISE_SIZE: &str = "2000+ Employees";
const ENTERPRISE_FOCUS: &str = "Data Structures, Algorithms, Core CS Fundamentals, and Aptitude.";
const STARTUP_SIZE: &str = "< 200 Employees";
const STARTUP_FOCUS: &str =
    "Practical problem solving, Development stack depth, and System Design.";

/// Resolves a profile for `company`, or `None` when the name is blank.
///
/// Any name containing a [`KNOWN_ENTERPRISES`] fragment is an enterprise;
/// everything else is treated as a startup or mid-size company.
pub fn company_profile(company: &str) -> Option<CompanyProfile> {
    if company.trim().is_empty() {
        return None;
    }

    let lowered = company.to_lowercase();
    let profile = if KNOWN_ENTERPRISES.iter().any(|giant| lowered.contains(giant)) {
        CompanyProfile {
            name: company.to_string(),
            company_type: CompanyType::Enterprise,
            size: ENTERPRISE_SIZE.to_string(),
            focus: ENTERPRISE_FOCUS.to_string(),
        }
    } else {
        CompanyProfile {
            name: company.to_string(),
            company_type: CompanyType::Startup,
            size: STARTUP_SIZE.to_string(),
            focus: STARTUP_FOCUS.to_string(),
        }
    };

    tracing::debug!(company, company_type = %profile.company_type, "Resolved company profile");
    Some(profile)
}
