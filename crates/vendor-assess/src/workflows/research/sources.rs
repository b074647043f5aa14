use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Official,
    Reviews,
    Security,
    Certifications,
    News,
}

impl SourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Official => "Official",
            Self::Reviews => "Reviews",
            Self::Security => "Security",
            Self::Certifications => "Certifications",
            Self::News => "News",
        }
    }
}

/// Where to look for one kind of evidence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourceGroup {
    pub kind: SourceKind,
    pub sources: &'static [&'static str],
}

const RESEARCH_SOURCES: [SourceGroup; 5] = [
    SourceGroup {
        kind: SourceKind::Official,
        sources: &[
            "vendor_website/trust",
            "vendor_website/security",
            "vendor_website/compliance",
            "vendor_website/privacy",
            "vendor_website/about",
        ],
    },
    SourceGroup {
        kind: SourceKind::Reviews,
        sources: &[
            "g2.com",
            "capterra.com",
            "trustpilot.com",
            "reddit.com/r/sysadmin",
            "reddit.com/r/msp",
        ],
    },
    SourceGroup {
        kind: SourceKind::Security,
        sources: &["cve.mitre.org", "haveibeenpwned.com", "shodan.io"],
    },
    SourceGroup {
        kind: SourceKind::Certifications,
        sources: &[
            "iso.org/certificates",
            "soc2.verification",
            "privacyshield.gov",
        ],
    },
    SourceGroup {
        kind: SourceKind::News,
        sources: &["google_news_search", "security_blogs", "tech_news_sites"],
    },
];

pub fn research_sources() -> &'static [SourceGroup] {
    &RESEARCH_SOURCES
}
