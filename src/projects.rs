/// One portfolio entry. `id` is only a render key; a card gets an outbound
/// action exactly when `link` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const COMPLETED_PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Mortuary Management System",
        description: "A system to manage mortuary records and operations efficiently.",
        tech: &["React", "Node.js", "MongoDB"],
        link: Some("https://github.com/james1478/mortuary-management-system"),
    },
    Project {
        id: 4,
        title: "DApp Blockchain Smart Contract with Ethereum and Solidity",
        description: "Blockchain Project that uses testnet to deploy smart contracts.",
        tech: &["React", "Node.js", "MongoDB"],
        link: Some("https://github.com/james1478/bit-kca-smartContract-and-frontend"),
    },
];

pub const ONGOING_PROJECTS: &[Project] = &[
    Project {
        id: 5,
        title: "DawaSphere",
        description: "AI-powered telemedicine and pharmacy management system. Currently in development phase.",
        tech: &["Next.js", "Solidity", "Gemini", "Postgres", "Node.js", "Tailwind"],
        link: Some("https://dawa-sphere.vercel.app"),
    },
    Project {
        id: 6,
        title: "AI Mental Health App",
        description: "An AI-powered wellness app to provide mental health support. 🚧 Work in Progress",
        tech: &["React Native", "Python", "TensorFlow"],
        link: None,
    },
    Project {
        id: 7,
        title: "AgriLink Platform",
        description: "Smart marketplace connecting farmers directly to buyers with real-time prices.",
        tech: &["React", "Express", "MySQL"],
        link: None,
    },
    Project {
        id: 8,
        title: "Fintech Micro-lending Platform",
        description: "Blockchain-based platform enabling micro-loans in Kenya.",
        tech: &["Next.js", "Solidity", "Tailwind"],
        link: None,
    },
];
