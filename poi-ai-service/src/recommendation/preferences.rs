use serde::{Deserialize, Deserializer};

/// Spending preference. Anything unrecognized is treated as [`Budget::Medium`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

impl Budget {
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => Budget::Low,
            "high" => Budget::High,
            _ => Budget::Medium,
        }
    }

    /// The category this budget favours and its score multiplier.
    pub fn boost(self) -> Option<(&'static str, f64)> {
        match self {
            Budget::Low => Some(("fast_food", 1.2)),
            Budget::Medium => None,
            Budget::High => Some(("restaurant", 1.3)),
        }
    }
}

/// Caller preferences. Unknown keys are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient_budget")]
    pub budget: Budget,
}

fn lenient_budget<'de, D>(deserializer: D) -> Result<Budget, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(Budget::parse).unwrap_or_default())
}
