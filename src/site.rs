//! Site Configuration
//!
//! The repository serves several near-identical clinic brochure sites from
//! one codebase. Branding, contact details and page content are resolved per
//! domain at startup and provided to the component tree via context.

use leptos::*;

/// A service advertised on the brochure pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub blurb: &'static str,
}

/// Static branding and contact configuration for one clinic site.
#[derive(Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Short identifier used in logs.
    pub key: &'static str,
    /// Apex domain this configuration answers for.
    pub host: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    /// External scheduler the booking page links out to.
    pub booking_url: &'static str,
    pub hours: &'static [(&'static str, &'static str)],
    pub services: &'static [Service],
    pub insurers: &'static [&'static str],
}

const LAKEVIEW_SERVICES: &[Service] = &[
    Service {
        name: "Cleanings & Exams",
        blurb: "Routine hygiene visits, digital x-rays and oral cancer screening.",
    },
    Service {
        name: "Fillings & Crowns",
        blurb: "Tooth-colored restorations, most crowns finished in two visits.",
    },
    Service {
        name: "Teeth Whitening",
        blurb: "In-office and take-home whitening options.",
    },
    Service {
        name: "Dental Implants",
        blurb: "Single-tooth implants placed and restored in house.",
    },
    Service {
        name: "Invisalign",
        blurb: "Clear aligner therapy for adults and teens.",
    },
    Service {
        name: "Emergency Care",
        blurb: "Same-day appointments for pain, swelling or a broken tooth.",
    },
];

const CEDAR_PARK_SERVICES: &[Service] = &[
    Service {
        name: "Cleanings & Exams",
        blurb: "Preventive care for the whole family, ages three and up.",
    },
    Service {
        name: "Pediatric Dentistry",
        blurb: "Gentle first visits, sealants and fluoride treatments.",
    },
    Service {
        name: "Root Canal Therapy",
        blurb: "Comfortable endodontic treatment, usually in one visit.",
    },
    Service {
        name: "Crowns & Bridges",
        blurb: "Durable porcelain restorations matched to your smile.",
    },
    Service {
        name: "Dentures & Partials",
        blurb: "Full and partial dentures, relines and repairs.",
    },
    Service {
        name: "Emergency Care",
        blurb: "Call before noon and we will see you the same day.",
    },
];

const WEEKDAY_HOURS: &[(&str, &str)] = &[
    ("Monday - Thursday", "8:00 am - 5:00 pm"),
    ("Friday", "8:00 am - 2:00 pm"),
    ("Saturday - Sunday", "Closed"),
];

const INSURERS: &[&str] = &[
    "Delta Dental",
    "Aetna",
    "Cigna",
    "MetLife",
    "Guardian",
    "UnitedHealthcare",
    "Humana",
    "Principal",
];

/// All clinic sites served by this build. The first entry is the flagship
/// and doubles as the fallback for unrecognized hosts.
pub const SITES: &[SiteConfig] = &[
    SiteConfig {
        key: "lakeview",
        host: "brightwaylakeview.com",
        name: "Brightway Dental Lakeview",
        tagline: "Modern dentistry on the lake, from checkups to implants.",
        phone: "(512) 555-0143",
        email: "hello@brightwaylakeview.com",
        address: "2200 Lakeshore Blvd, Suite 140, Austin, TX 78741",
        booking_url: "https://book.brightwaydental.app/lakeview",
        hours: WEEKDAY_HOURS,
        services: LAKEVIEW_SERVICES,
        insurers: INSURERS,
    },
    SiteConfig {
        key: "cedar-park",
        host: "brightwaycedarpark.com",
        name: "Brightway Dental Cedar Park",
        tagline: "Family and pediatric dentistry your kids will actually enjoy.",
        phone: "(512) 555-0178",
        email: "hello@brightwaycedarpark.com",
        address: "801 Cypress Creek Rd, Building B, Cedar Park, TX 78613",
        booking_url: "https://book.brightwaydental.app/cedar-park",
        hours: WEEKDAY_HOURS,
        services: CEDAR_PARK_SERVICES,
        insurers: INSURERS,
    },
];

impl SiteConfig {
    /// Resolve the site for a hostname. Matching ignores case and a leading
    /// `www.`; unknown hosts fall back to the flagship site.
    pub fn for_host(host: &str) -> &'static SiteConfig {
        let host = host.trim().to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);
        SITES
            .iter()
            .find(|site| site.host == host)
            .unwrap_or(&SITES[0])
    }

    /// Resolve the site for the current browser location.
    pub fn current() -> &'static SiteConfig {
        let host = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        Self::for_host(&host)
    }
}

/// Fetch the site configuration from context.
pub fn use_site() -> &'static SiteConfig {
    use_context::<&'static SiteConfig>().expect("SiteConfig not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_host_exact_match() {
        let site = SiteConfig::for_host("brightwaycedarpark.com");
        assert_eq!(site.key, "cedar-park");
    }

    #[test]
    fn test_for_host_strips_www_and_case() {
        let site = SiteConfig::for_host("WWW.BrightwayLakeview.com");
        assert_eq!(site.key, "lakeview");
    }

    #[test]
    fn test_for_host_falls_back_to_flagship() {
        let site = SiteConfig::for_host("localhost");
        assert_eq!(site.key, SITES[0].key);

        let site = SiteConfig::for_host("");
        assert_eq!(site.key, SITES[0].key);
    }
}
