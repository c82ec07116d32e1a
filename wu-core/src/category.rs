use std::{convert::TryFrom, fmt};

/// One kind of report the data feed can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Conditions,
    Forecast,
    Forecast10,
    Alerts,
    Almanac,
    History,
    Planner,
    Yesterday,
    Astronomy,
    Tide,
    Lookup,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conditions => "conditions",
            Category::Forecast => "forecast",
            Category::Forecast10 => "forecast10",
            Category::Alerts => "alerts",
            Category::Almanac => "almanac",
            Category::History => "history",
            Category::Planner => "planner",
            Category::Yesterday => "yesterday",
            Category::Astronomy => "astronomy",
            Category::Tide => "tide",
            Category::Lookup => "lookup",
        }
    }

    /// Path segment the API expects for this category.
    pub fn feature(&self) -> &'static str {
        match self {
            Category::Forecast10 => "forecast10day",
            Category::Lookup => "geolookup",
            other => other.as_str(),
        }
    }

    /// Whether requests for this category carry a date suffix.
    pub fn takes_date(&self) -> bool {
        matches!(self, Category::History | Category::Planner)
    }

    /// Every category, in the order an "all" run reports them.
    pub const fn all() -> &'static [Category] {
        &[
            Category::Conditions,
            Category::Forecast,
            Category::Forecast10,
            Category::Alerts,
            Category::Almanac,
            Category::History,
            Category::Planner,
            Category::Yesterday,
            Category::Astronomy,
            Category::Tide,
            Category::Lookup,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "conditions" => Ok(Category::Conditions),
            "forecast" => Ok(Category::Forecast),
            "forecast10" | "forecast10day" => Ok(Category::Forecast10),
            "alerts" => Ok(Category::Alerts),
            "almanac" => Ok(Category::Almanac),
            "history" => Ok(Category::History),
            "planner" => Ok(Category::Planner),
            "yesterday" => Ok(Category::Yesterday),
            "astronomy" | "astro" => Ok(Category::Astronomy),
            "tide" | "tides" => Ok(Category::Tide),
            "lookup" | "geolookup" => Ok(Category::Lookup),
            _ => Err(anyhow::anyhow!(
                "Unknown category '{value}'. Supported categories: {}.",
                Category::all()
                    .iter()
                    .map(Category::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_as_str_roundtrip() {
        for category in Category::all() {
            let parsed = Category::try_from(category.as_str()).expect("roundtrip should succeed");
            assert_eq!(*category, parsed);
        }
    }

    #[test]
    fn feature_names_parse_back() {
        for category in Category::all() {
            assert_eq!(Category::try_from(category.feature()).unwrap(), *category);
        }
    }

    #[test]
    fn api_feature_names() {
        assert_eq!(Category::Forecast10.feature(), "forecast10day");
        assert_eq!(Category::Lookup.feature(), "geolookup");
        assert_eq!(Category::Astronomy.feature(), "astronomy");
    }

    #[test]
    fn only_history_and_planner_take_dates() {
        let dated: Vec<_> = Category::all().iter().filter(|c| c.takes_date()).collect();
        assert_eq!(dated, [&Category::History, &Category::Planner]);
    }

    #[test]
    fn unknown_category_error() {
        let err = Category::try_from("radar").unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
    }
}
