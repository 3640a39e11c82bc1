// Static copy for the about, speakers and footer blocks.

#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub image: &'static str,
}

pub const SPEAKERS: &[Speaker] = &[
    Speaker {
        name: "Maria Santos",
        title: "Global Innovation Leader",
        company: "TechGlobal Corporation",
        image: "/api/placeholder/300/300",
    },
    Speaker {
        name: "David Kim",
        title: "Digital Transformation Expert",
        company: "Future Innovations Inc.",
        image: "/api/placeholder/300/300",
    },
    Speaker {
        name: "Aisha Mohammed",
        title: "Sustainability & Strategy Advisor",
        company: "Global Impact Consulting",
        image: "/api/placeholder/300/300",
    },
];

pub const ABOUT: &str = "The Global Innovation Summit is a premier international conference \
bringing together leaders, innovators, and professionals from diverse industries to explore \
emerging trends, share breakthrough insights, and drive global collaboration.";

/// (icon, accent class, text)
pub const OBJECTIVES: &[(&str, &str, &str)] = &[
    ("🌐", "accent-blue", "Foster Global Networking"),
    ("🎤", "accent-green", "Share Cutting-Edge Insights"),
    ("👥", "accent-purple", "Promote Cross-Industry Collaboration"),
];

pub const HIGHLIGHTS: &[&str] = &[
    "100+ International Speakers",
    "50+ Countries Represented",
    "30+ Industry Sectors",
    "Interactive Workshops",
    "Networking Sessions",
    "Innovation Showcases",
];

pub const QUICK_LINKS: &[&str] = &[
    "Sponsorship Opportunities",
    "Past Conference Archives",
    "Travel Information",
];

/// (icon, aria label)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("👥", "Community"),
    ("🌐", "Website"),
    ("✉", "Newsletter"),
];
