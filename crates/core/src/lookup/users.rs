use demo_state_protocol::{TechProficiency, UserProfile};

use super::clients::{GENERIC_CLIENT_ID, find_client};

static MERCHANT_DEACONS: UserProfile = UserProfile {
    id: "marco-deacon",
    first_name: "Marco",
    last_name: "Deacon",
    title: "Owner",
    company: "Deacon's Pizza",
    avatar: "/avatars/marco-deacon.jpg",
    tech_proficiency: TechProficiency::Moderate,
    pain_points: &[
        "Limited time for marketing",
        "Competing with bigger chains",
        "Slow weekday dinner business",
    ],
    goals: &[
        "Increase weekday sales",
        "Build customer loyalty",
        "Target local families",
    ],
};

static MERCHANT_CVS: UserProfile = UserProfile {
    id: "jennifer-williams",
    first_name: "Jennifer",
    last_name: "Williams",
    title: "Regional Marketing Director",
    company: "CVS",
    avatar: "/avatars/jennifer-williams.jpg",
    tech_proficiency: TechProficiency::High,
    pain_points: &[
        "Coordinating campaigns across locations",
        "Maintaining brand consistency",
        "Tracking cross-channel ROI",
    ],
    goals: &[
        "Increase prescription refills",
        "Drive health service traffic",
        "Improve customer retention",
    ],
};

static MERCHANT_GENERIC: UserProfile = UserProfile {
    id: "taylor-wong",
    first_name: "Taylor",
    last_name: "Wong",
    title: "Marketing Manager",
    company: "Generic Business",
    avatar: "/avatars/taylor-wong.jpg",
    tech_proficiency: TechProficiency::Moderate,
    pain_points: &[
        "Limited marketing budget",
        "Inconsistent customer data",
        "Competition in local market",
    ],
    goals: &[
        "Generate new leads",
        "Increase customer value",
        "Optimize marketing spend",
    ],
};

static SUPPORT_GENERIC: UserProfile = UserProfile {
    id: "alex-chen",
    first_name: "Alex",
    last_name: "Chen",
    title: "Support Agent",
    company: "Kigo",
    avatar: "/avatars/alex-chen.jpg",
    tech_proficiency: TechProficiency::High,
    pain_points: &[
        "Switching between systems",
        "Limited visibility into customer journey",
        "Manual token management",
    ],
    goals: &[
        "Resolve issues quickly",
        "Improve customer satisfaction",
        "Reduce manual work",
    ],
};

static SUPPORT_TIER2: UserProfile = UserProfile {
    id: "sarah-johnson",
    first_name: "Sarah",
    last_name: "Johnson",
    title: "Senior Support Specialist",
    company: "Kigo",
    avatar: "/avatars/sarah-johnson.jpg",
    tech_proficiency: TechProficiency::VeryHigh,
    pain_points: &[
        "Limited technical logs",
        "Complex multi-party issues",
        "Limited admin capabilities",
    ],
    goals: &[
        "Resolve complex issues",
        "Create support documentation",
        "Improve technical systems",
    ],
};

static ADMIN_GENERIC: UserProfile = UserProfile {
    id: "david-garcia",
    first_name: "David",
    last_name: "Garcia",
    title: "Platform Operations Manager",
    company: "Kigo",
    avatar: "/avatars/david-garcia.jpg",
    tech_proficiency: TechProficiency::Expert,
    pain_points: &[
        "Lack of proactive monitoring",
        "Manual verification processes",
        "Limited bulk operations",
    ],
    goals: &[
        "Ensure platform health",
        "Streamline merchant management",
        "Automate routine tasks",
    ],
};

static ADMIN_ANALYTICS: UserProfile = UserProfile {
    id: "jane-foster",
    first_name: "Jane",
    last_name: "Foster",
    title: "Analytics Director",
    company: "Kigo",
    avatar: "/avatars/jane-foster.jpg",
    tech_proficiency: TechProficiency::Expert,
    pain_points: &[
        "Data inconsistency across sources",
        "Limited reporting customization",
        "Tracking customer journeys",
    ],
    goals: &[
        "Analyze platform metrics",
        "Identify growth opportunities",
        "Create executive reports",
    ],
};

/// Profiles keyed by `{role}-{client}`. `tier2` and `analytics` are
/// pseudo-clients reachable only through explicit links.
static USERS: [(&str, &UserProfile); 7] = [
    ("merchant-deacons-pizza", &MERCHANT_DEACONS),
    ("merchant-cvs", &MERCHANT_CVS),
    ("merchant-generic", &MERCHANT_GENERIC),
    ("support-generic", &SUPPORT_GENERIC),
    ("support-tier2", &SUPPORT_TIER2),
    ("admin-generic", &ADMIN_GENERIC),
    ("admin-analytics", &ADMIN_ANALYTICS),
];

fn find(key: &str) -> Option<&'static UserProfile> {
    USERS.iter().find(|(k, _)| *k == key).map(|(_, p)| *p)
}

/// Resolve the mock persona for a role/client pair.
///
/// Order: exact `{role}-{client}` (client aliases are canonicalized first),
/// then `{role}-generic`, then the generic merchant.
pub fn lookup_user_profile(role: &str, client_id: &str) -> &'static UserProfile {
    let client = find_client(client_id).map_or(client_id, |c| c.id);
    find(&format!("{role}-{client}"))
        .or_else(|| find(&format!("{role}-{GENERIC_CLIENT_ID}")))
        .unwrap_or(&MERCHANT_GENERIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(lookup_user_profile("merchant", "cvs").id, "jennifer-williams");
    }

    #[test]
    fn alias_client_finds_canonical_profile() {
        assert_eq!(lookup_user_profile("merchant", "deacons").id, "marco-deacon");
    }

    #[test]
    fn falls_back_to_role_generic() {
        assert_eq!(lookup_user_profile("support", "cvs").id, "alex-chen");
        assert_eq!(lookup_user_profile("admin", "schwab").id, "david-garcia");
    }

    #[test]
    fn unknown_role_gets_generic_merchant() {
        assert_eq!(lookup_user_profile("auditor", "cvs").id, "taylor-wong");
        assert_eq!(lookup_user_profile("", "").id, "taylor-wong");
    }

    #[test]
    fn admin_generic_is_deterministic() {
        let first = lookup_user_profile("admin", "generic");
        for _ in 0..10 {
            assert_eq!(lookup_user_profile("admin", "generic"), first);
        }
    }
}
