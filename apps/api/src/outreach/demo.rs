//! Offline demo data and quick-start presets. No search or generation calls.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub user_background: &'static str,
    pub value_prop: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Founder",
        user_background: "I'm building B2B SaaS to help teams move faster.",
        value_prop: "We help product teams launch faster with better analytics.",
    },
    Preset {
        name: "Job Seeker",
        user_background: "I'm a Product Manager with 5+ years of experience.",
        value_prop: "I design features that drive user growth and engagement.",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct DemoProfile {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub const DEMO_PROFILES: &[DemoProfile] = &[
    DemoProfile {
        name: "Jane Doe",
        role: "Senior PM",
        company: "TechCorp",
    },
    DemoProfile {
        name: "John Smith",
        role: "VP Engineering",
        company: "StartupXYZ",
    },
    DemoProfile {
        name: "Sarah Chen",
        role: "Product Lead",
        company: "DataCo",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct DemoCard {
    pub profile: DemoProfile,
    pub message: String,
}

pub fn demo_message(profile: &DemoProfile, value_prop: &str) -> String {
    let first_name = profile.name.split_whitespace().next().unwrap_or(profile.name);
    format!(
        "Hi {first_name},\n\nI noticed your work at {company}. {value_prop}\n\nWould love to connect and explore potential synergies.\n\nThanks!",
        company = profile.company,
    )
}

pub fn demo_cards(value_prop: &str) -> Vec<DemoCard> {
    DEMO_PROFILES
        .iter()
        .map(|profile| DemoCard {
            profile: profile.clone(),
            message: demo_message(profile, value_prop),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_message_uses_first_name_and_company() {
        let msg = demo_message(&DEMO_PROFILES[1], "We ship faster.");
        assert!(msg.starts_with("Hi John,"));
        assert!(msg.contains("your work at StartupXYZ. We ship faster."));
    }

    #[test]
    fn test_demo_cards_cover_every_profile() {
        let cards = demo_cards("");
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].profile.company, "DataCo");
        assert!(cards[2].message.starts_with("Hi Sarah,"));
    }

    #[test]
    fn test_presets() {
        let names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Founder", "Job Seeker"]);
        assert!(PRESETS.iter().all(|p| !p.value_prop.is_empty()));
    }
}
