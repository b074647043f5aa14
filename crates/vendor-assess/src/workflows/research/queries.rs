use crate::workflows::category::Category;

const BASE_TOPICS: [&str; 4] = ["security", "GDPR", "reviews", "problems issues"];

const CONFIDENTIAL_TOPICS: [&str; 4] = ["ISO 27001", "SOC2", "data breach", "incident"];

const BUSINESS_CRITICAL_TOPICS: [&str; 4] = [
    r#"DPA "data processing""#,
    r#"MFA "multi-factor""#,
    "SSO SAML",
    "penetration test security audit",
];

const MISSION_CRITICAL_TOPICS: [&str; 4] = [
    r#"BCP "business continuity""#,
    r#"DPIA "privacy impact""#,
    "financial stability",
    "exit strategy data export",
];

/// Web search queries to run for a vendor; higher categories add deeper topics.
pub fn search_queries(vendor: &str, category: Category) -> Vec<String> {
    let tier = category.value();
    let mut topics: Vec<&str> = BASE_TOPICS.to_vec();

    if tier >= 3 {
        topics.extend(CONFIDENTIAL_TOPICS);
    }
    if tier >= 4 {
        topics.extend(BUSINESS_CRITICAL_TOPICS);
    }
    if tier == 5 {
        topics.extend(MISSION_CRITICAL_TOPICS);
    }

    topics
        .into_iter()
        .map(|topic| format!("\"{vendor}\" {topic}"))
        .collect()
}
