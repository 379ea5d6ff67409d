use serde::{Deserialize, Serialize};

use crate::outreach::profile_parser::ProfileMetadata;

/// Messaging preferences collected from the user. Substituted verbatim into prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutreachPreferences {
    pub relationship_goal: String,
    pub value_prop: String,
    pub tone: String,
    pub cta_type: String,
    pub interests: String,
    pub problem_solving: String,
    pub achievements: String,
    /// 1 (generic) to 5 (highly personalized).
    pub personalization_level: u8,
    pub mention_mutual: bool,
}

impl Default for OutreachPreferences {
    fn default() -> Self {
        Self {
            relationship_goal: "Network & Build Relationship".to_string(),
            value_prop: String::new(),
            tone: "Professional & Friendly".to_string(),
            cta_type: "Coffee/Chat Request".to_string(),
            interests: String::new(),
            problem_solving: String::new(),
            achievements: String::new(),
            personalization_level: 3,
            mention_mutual: true,
        }
    }
}

/// Extracted metadata plus the raw snippet it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    #[serde(flatten)]
    pub metadata: ProfileMetadata,
    pub snippet: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageVariant {
    Short,
    Medium,
    Ultra,
}

impl MessageVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageVariant::Short => "short",
            MessageVariant::Medium => "medium",
            MessageVariant::Ultra => "ultra",
        }
    }
}

/// Exactly one message per variant, always all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachVariants {
    pub short: String,
    pub medium: String,
    pub ultra: String,
}

impl OutreachVariants {
    pub fn get(&self, variant: MessageVariant) -> &str {
        match variant {
            MessageVariant::Short => &self.short,
            MessageVariant::Medium => &self.medium,
            MessageVariant::Ultra => &self.ultra,
        }
    }
}
