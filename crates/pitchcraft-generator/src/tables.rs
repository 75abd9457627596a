//! Fixed lookup tables.
//!
//! Each table is an ordered association list. Order is significant: the
//! classifier returns the first industry whose keywords match, and competitor
//! samples are taken as a prefix.

use pitchcraft_core::enums::Industry;

/// Industry keywords, checked in this order.
pub const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Tech,
        &["software", "app", "platform", "digital", "cloud", "ai", "ml", "data"],
    ),
    (
        Industry::Health,
        &["health", "medical", "fitness", "wellness", "therapy", "mental"],
    ),
    (
        Industry::Education,
        &["education", "learning", "student", "course", "teacher", "school"],
    ),
    (
        Industry::Finance,
        &["finance", "payment", "money", "banking", "investment", "crypto"],
    ),
    (
        Industry::Social,
        &["social", "community", "networking", "connection", "sharing"],
    ),
    (
        Industry::Ecommerce,
        &["shop", "marketplace", "commerce", "retail", "buying", "selling"],
    ),
    (
        Industry::Sustainability,
        &["green", "eco", "sustainable", "environment", "carbon", "renewable"],
    ),
];

/// Candidate competitor names per industry.
pub const COMPETITORS: &[(Industry, [&str; 5])] = &[
    (
        Industry::Tech,
        [
            "TechCorp Inc.",
            "InnovateLabs",
            "CloudSync Solutions",
            "DataFlow Systems",
            "NextGen Analytics",
        ],
    ),
    (
        Industry::Health,
        [
            "HealthTech Pro",
            "WellnessWorks",
            "MedConnect",
            "FitLife Solutions",
            "CareLink Systems",
        ],
    ),
    (
        Industry::Education,
        [
            "EduTech Solutions",
            "LearnSmart",
            "StudyBuddy Pro",
            "ClassroomCloud",
            "SkillBuilder",
        ],
    ),
    (
        Industry::Finance,
        [
            "FinTech Forward",
            "PayEasy Systems",
            "MoneyMaster",
            "InvestSmart",
            "CryptoConnect",
        ],
    ),
    (
        Industry::Social,
        [
            "SocialSphere",
            "ConnectHub",
            "CommunityLink",
            "ShareSpace",
            "NetworkNow",
        ],
    ),
    (
        Industry::Ecommerce,
        [
            "ShopSmart",
            "MarketPlace Pro",
            "RetailRevolution",
            "BuyNow Solutions",
            "CommerceCloud",
        ],
    ),
    (
        Industry::Sustainability,
        [
            "GreenTech Solutions",
            "EcoInnovate",
            "SustainableSystems",
            "CarbonZero",
            "CleanTech Pro",
        ],
    ),
];

/// Revenue model catalog as `(name, description)` pairs.
pub const REVENUE_MODEL_CATALOG: [(&str, &str); 10] = [
    ("Freemium", "Free basic features with premium paid upgrades"),
    ("Subscription (SaaS)", "Monthly/yearly recurring revenue model"),
    (
        "Marketplace Commission",
        "Take a percentage of transactions between users",
    ),
    ("Advertising", "Revenue from targeted ads and sponsored content"),
    ("Enterprise Licensing", "Sell licenses to large organizations"),
    ("Pay-per-Use", "Charge based on usage or consumption"),
    ("Hardware + Software", "Combined product and service revenue"),
    (
        "Consulting & Services",
        "Professional services around your core product",
    ),
    (
        "White Label Licensing",
        "License your technology to other companies",
    ),
    (
        "Data Monetization",
        "Generate revenue from anonymized data insights",
    ),
];

/// Verbs a tagline can open with.
pub const ACTION_VERBS: [&str; 5] = [
    "Transform",
    "Revolutionize",
    "Simplify",
    "Empower",
    "Accelerate",
];

/// Slide lines 5 to 8, identical for every input.
pub const SLIDE_BOILERPLATE: [&str; 4] = [
    "Business Model: Multiple revenue streams with scalable growth potential",
    "Traction: Early validation and growing customer interest",
    "Team: Experienced founders with domain expertise",
    "Funding: Seeking investment to accelerate growth and market expansion",
];

/// Number of competitors in a generated pitch.
pub const COMPETITOR_COUNT: usize = 4;

/// Number of revenue models in a generated pitch.
pub const REVENUE_MODEL_COUNT: usize = 4;
