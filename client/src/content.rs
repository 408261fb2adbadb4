//! Static page copy.

#[derive(Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", section_id: "about" },
    NavLink { label: "Services", section_id: "services" },
    NavLink { label: "Locations", section_id: "map" },
    NavLink { label: "Contact", section_id: "contact" },
];

pub const COMPANY_NAME: &str = "Afmerica Technology Inc.";
pub const BRAND_SHORT: &str = "Afmerica Tech";
pub const TAGLINE: &str = "Turning waste into high-performance carbon. Clean, green, Canadian.";

pub const HERO_TITLE: &str = "High-Performance Activated Carbon From Organic Waste";
pub const HERO_SUBTITLE: &str = "We turn agricultural and forestry residues into engineered carbon for \
     water treatment, air purification and energy storage, right here in Québec.";
pub const HERO_CTA: &str = "Request Your Custom Project Consultation";
pub const QUOTE_CTA: &str = "Get Your Free Quote";

pub const ABOUT_TITLE: &str = "The Afmerica Advantage";
pub const ABOUT_BODY: &str = "We combine decades of industrial fabrication know-how with modern \
     carbon activation to close the loop on organic waste.";

#[derive(Clone, Copy)]
pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_PILLARS: &[Pillar] = &[
    Pillar {
        title: "Circular by Design",
        body: "Every tonne of carbon we ship starts as a residue that would otherwise be burned or landfilled.",
    },
    Pillar {
        title: "Engineered to Spec",
        body: "Surface area, pore structure and particle size are tuned to each application and verified in our lab.",
    },
];

#[derive(Clone, Copy)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        title: "Activated Carbon Supply",
        description: "Bulk and custom-grade granular and powdered carbon for municipal and industrial buyers.",
    },
    ServiceCard {
        title: "Waste Valorization",
        description: "Partnerships that turn your organic by-products into a revenue stream instead of a disposal cost.",
    },
    ServiceCard {
        title: "Activation Technology Licensing",
        description: "License our activation process and equipment designs for on-site production.",
    },
    ServiceCard {
        title: "R&D and Material Testing",
        description: "Characterization, adsorption testing and pilot runs for new feedstocks and applications.",
    },
    ServiceCard {
        title: "Sustainability Consulting",
        description: "Circular-economy assessments and carbon accounting support for your operations.",
    },
    ServiceCard {
        title: "Custom Engineering",
        description: "Filtration media and adsorber systems designed around your process constraints.",
    },
];

pub const MAP_TITLE: &str = "Visit Our Facilities";
pub const MAP_BODY: &str = "Our production facility in Châteauguay is running today, and our Granby \
     expansion will double capacity by 2026.";

#[derive(Clone, Copy)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem { label: "Address", value: "250F Boul Ford, Chateauguay, QC J6J 4Z2" },
    ContactItem { label: "Phone", value: "(450) 555-0142" },
    ContactItem { label: "Email", value: "info@afmericatech.ca" },
    ContactItem { label: "Hours", value: "Monday - Friday: 8:00 AM - 5:00 PM" },
];

pub const CONTACT_EMAIL: &str = "info@afmericatech.ca";

pub const PARTNERS: &[&str] = &["Ecobec", "CanadaCustomMetal", "Stainless Nation"];
