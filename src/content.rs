//! Page copy as plain data. The landing template iterates these tables so
//! no card or list is hand-duplicated in markup.

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Card {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SITE_NAME: &str = "Vaastu Acceleron";

pub const HERO_TITLE: &str = "Vaastu Acceleron — Expert Vastu Consultant";

pub const HERO_LEAD: &str = "Holistic, practical Vastu guidance for homes and businesses to \
harmonize spaces, optimize energy flow, and support wellbeing, prosperity, and growth.";

pub const NAV: &[NavLink] = &[
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Consultation",
        href: "#consultation",
    },
    NavLink {
        label: "About Vastu",
        href: "#about-vastu",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

pub const HERO_POINTS: &[&str] = &[
    "Personalized remedies and layout recommendations",
    "Non-destructive, practical solutions for existing spaces",
    "Transparent process and actionable reports",
];

pub const SERVICES: &[Card] = &[
    Card {
        title: "Industry / Factory",
        blurb: "Workflow, machinery placement, entry/exit, and utilities aligned for output and safety.",
    },
    Card {
        title: "Offices",
        blurb: "Cabin orientation, seating, departments and meeting zones for clarity and productivity.",
    },
    Card {
        title: "Shops",
        blurb: "Entrance, cash counter, product display and storage to enhance visibility and sales.",
    },
    Card {
        title: "House / Flat",
        blurb: "Room zoning, kitchen/bedroom orientation and remedies for comfort and harmony.",
    },
    Card {
        title: "Plots",
        blurb: "Plot selection, slope, roads, and ideal positioning before construction.",
    },
    Card {
        title: "Hospitals",
        blurb: "OT, ICU, reception and inpatient areas aligned for care, flow and hygiene.",
    },
    Card {
        title: "Hotels",
        blurb: "Entry, lobby, rooms and services designed for guest comfort and revenue.",
    },
];

pub const CHANNELS: &[Card] = &[
    Card {
        title: "Email Consultation",
        blurb: "Share layout, measurements and photos. Receive a detailed report with remedies.",
    },
    Card {
        title: "On-site Consultation",
        blurb: "A comprehensive visit with compass audit, discussion and on-the-spot guidance.",
    },
    Card {
        title: "Walk-in Consultation",
        blurb: "Meet at our office with your plan for quick guidance and next steps.",
    },
];

pub const ABOUT_VASTU: &str = "Vastu Shastra is a traditional Indian knowledge system that \
harmonizes the built environment with natural forces. It aligns layout, orientation and \
elements to support health, relationships and prosperity.";

pub const CORE_PRINCIPLES: &[&str] = &[
    "Directional balance of the five elements (earth, water, fire, air, space)",
    "Optimized entrances, room functions and energy flow",
    "Sun path and magnetic field alignment",
];

pub const WHY_CONSULTANT: &[&str] = &[
    "Translate principles into practical, non-structural remedies",
    "Prioritize fixes by impact and feasibility",
    "Support new builds with optimal planning from day one",
];
