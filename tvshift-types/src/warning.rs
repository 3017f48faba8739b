use serde::{Deserialize, Serialize};

/// One non-fatal advisory recorded while retargeting.
///
/// Advisories are display-oriented: hosts surface them to the developer at the end
/// of a configuration run. They never influence control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Fixed category tag, e.g. `"xcodeproject"`.
    pub category: String,

    pub message: String,
}
