use crate::workflows::assessment::AttributeValue;

pub(crate) const VENDOR_COLUMN: &str = "vendor";
pub(crate) const CATEGORY_COLUMN: &str = "category";

/// Header layout resolved once per file.
#[derive(Debug)]
pub(crate) struct Columns {
    pub(crate) vendor: usize,
    pub(crate) category: usize,
    pub(crate) attributes: Vec<(usize, String)>,
}

impl Columns {
    pub(crate) fn resolve(headers: &csv::StringRecord) -> Result<Self, &'static str> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |wanted: &'static str| {
            names
                .iter()
                .position(|name| name == wanted)
                .ok_or(wanted)
        };

        let vendor = position(VENDOR_COLUMN)?;
        let category = position(CATEGORY_COLUMN)?;
        let attributes = names
            .into_iter()
            .enumerate()
            .filter(|(index, name)| *index != vendor && *index != category && !name.is_empty())
            .collect();

        Ok(Self {
            vendor,
            category,
            attributes,
        })
    }
}

/// Empty cells are absent; booleans and numbers are recognized before text.
pub(crate) fn parse_cell(raw: &str) -> Option<AttributeValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "yes" => return Some(AttributeValue::Boolean(true)),
        "false" | "no" => return Some(AttributeValue::Boolean(false)),
        _ => {}
    }

    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(AttributeValue::Number(number)),
        _ => Some(AttributeValue::Text(trimmed.to_string())),
    }
}

fn normalize_header(value: &str) -> String {
    value
        .replace(['\u{feff}', '\u{200b}'], "")
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_become_typed_attributes() {
        assert_eq!(parse_cell("  "), None);
        assert_eq!(parse_cell("Yes"), Some(AttributeValue::Boolean(true)));
        assert_eq!(parse_cell("FALSE"), Some(AttributeValue::Boolean(false)));
        assert_eq!(parse_cell("99.9"), Some(AttributeValue::Number(99.9)));
        assert_eq!(parse_cell("2"), Some(AttributeValue::Number(2.0)));
        assert_eq!(
            parse_cell("quarterly"),
            Some(AttributeValue::Text("quarterly".to_string()))
        );
        assert_eq!(parse_cell("NaN"), Some(AttributeValue::Text("NaN".to_string())));
    }

    #[test]
    fn headers_are_matched_case_insensitively() {
        let headers = csv::StringRecord::from(vec!["\u{feff}Vendor", " Category ", "mfa_available", ""]);
        let columns = Columns::resolve(&headers).expect("required columns present");
        assert_eq!(columns.vendor, 0);
        assert_eq!(columns.category, 1);
        assert_eq!(columns.attributes, vec![(2, "mfa_available".to_string())]);

        let headers = csv::StringRecord::from(vec!["vendor", "mfa_available"]);
        assert_eq!(Columns::resolve(&headers).unwrap_err(), "category");
    }
}
