//! Fixed city list and the location autocomplete used by the job forms.

/// A city the job forms can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub city: &'static str,
    pub state: &'static str,
}

impl Location {
    const fn new(city: &'static str, state: &'static str) -> Self {
        Self { city, state }
    }

    /// The text written into the location field when selected.
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Case-insensitive substring match against city or state.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.city.to_lowercase().contains(&query) || self.state.to_lowercase().contains(&query)
    }
}

pub static LOCATIONS: &[Location] = &[
    Location::new("Remote", "Anywhere in India"),
    Location::new("Mumbai", "Maharashtra"),
    Location::new("Pune", "Maharashtra"),
    Location::new("Nagpur", "Maharashtra"),
    Location::new("Nashik", "Maharashtra"),
    Location::new("Navi Mumbai", "Maharashtra"),
    Location::new("Thane", "Maharashtra"),
    Location::new("Bengaluru", "Karnataka"),
    Location::new("Mysuru", "Karnataka"),
    Location::new("Mangaluru", "Karnataka"),
    Location::new("Hubballi", "Karnataka"),
    Location::new("Hyderabad", "Telangana"),
    Location::new("Warangal", "Telangana"),
    Location::new("Chennai", "Tamil Nadu"),
    Location::new("Coimbatore", "Tamil Nadu"),
    Location::new("Madurai", "Tamil Nadu"),
    Location::new("Tiruchirappalli", "Tamil Nadu"),
    Location::new("Kochi", "Kerala"),
    Location::new("Thiruvananthapuram", "Kerala"),
    Location::new("Kozhikode", "Kerala"),
    Location::new("New Delhi", "Delhi"),
    Location::new("Delhi", "Delhi"),
    Location::new("Gurugram", "Haryana"),
    Location::new("Faridabad", "Haryana"),
    Location::new("Noida", "Uttar Pradesh"),
    Location::new("Greater Noida", "Uttar Pradesh"),
    Location::new("Ghaziabad", "Uttar Pradesh"),
    Location::new("Lucknow", "Uttar Pradesh"),
    Location::new("Kanpur", "Uttar Pradesh"),
    Location::new("Varanasi", "Uttar Pradesh"),
    Location::new("Agra", "Uttar Pradesh"),
    Location::new("Kolkata", "West Bengal"),
    Location::new("Durgapur", "West Bengal"),
    Location::new("Ahmedabad", "Gujarat"),
    Location::new("Gandhinagar", "Gujarat"),
    Location::new("Surat", "Gujarat"),
    Location::new("Vadodara", "Gujarat"),
    Location::new("Rajkot", "Gujarat"),
    Location::new("Jaipur", "Rajasthan"),
    Location::new("Jodhpur", "Rajasthan"),
    Location::new("Udaipur", "Rajasthan"),
    Location::new("Indore", "Madhya Pradesh"),
    Location::new("Bhopal", "Madhya Pradesh"),
    Location::new("Gwalior", "Madhya Pradesh"),
    Location::new("Chandigarh", "Chandigarh"),
    Location::new("Mohali", "Punjab"),
    Location::new("Ludhiana", "Punjab"),
    Location::new("Amritsar", "Punjab"),
    Location::new("Dehradun", "Uttarakhand"),
    Location::new("Shimla", "Himachal Pradesh"),
    Location::new("Srinagar", "Jammu and Kashmir"),
    Location::new("Jammu", "Jammu and Kashmir"),
    Location::new("Patna", "Bihar"),
    Location::new("Ranchi", "Jharkhand"),
    Location::new("Jamshedpur", "Jharkhand"),
    Location::new("Bhubaneswar", "Odisha"),
    Location::new("Cuttack", "Odisha"),
    Location::new("Raipur", "Chhattisgarh"),
    Location::new("Visakhapatnam", "Andhra Pradesh"),
    Location::new("Vijayawada", "Andhra Pradesh"),
    Location::new("Tirupati", "Andhra Pradesh"),
    Location::new("Guwahati", "Assam"),
    Location::new("Shillong", "Meghalaya"),
    Location::new("Imphal", "Manipur"),
    Location::new("Panaji", "Goa"),
    Location::new("Puducherry", "Puducherry"),
];

/// Every location matching `query`, in list order. Empty input matches nothing.
pub fn suggest(query: &str) -> Vec<Location> {
    if query.is_empty() {
        return Vec::new();
    }
    LOCATIONS
        .iter()
        .filter(|loc| loc.matches(query))
        .copied()
        .collect()
}

/// Suggestion list state for one location input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    suggestions: Vec<Location>,
    open: bool,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a keystroke: refilter for non-empty input, close otherwise.
    pub fn input(&mut self, value: &str) {
        if value.is_empty() {
            self.suggestions.clear();
            self.open = false;
        } else {
            self.suggestions = suggest(value);
            self.open = true;
        }
    }

    /// Pick a suggestion. Returns the new field value and closes the list.
    pub fn select(&mut self, location: Location) -> String {
        self.suggestions.clear();
        self.open = false;
        location.label()
    }

    /// Reopen on focus when there is something to show.
    pub fn focus(&mut self) {
        if !self.suggestions.is_empty() {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Suggestions to render; empty while closed.
    pub fn visible(&self) -> &[Location] {
        if self.open { &self.suggestions } else { &[] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_city_or_state_ignoring_case() {
        let hits = suggest("KARN");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|l| l.state == "Karnataka"));

        let pune = suggest("pun");
        assert!(pune.iter().any(|l| l.city == "Pune"));
        assert!(pune.iter().any(|l| l.state == "Punjab"));
    }

    #[test]
    fn empty_input_closes_without_filtering() {
        let mut ac = Autocomplete::new();
        ac.input("del");
        assert!(!ac.visible().is_empty());
        ac.input("");
        assert!(ac.visible().is_empty());
        ac.focus();
        assert!(ac.visible().is_empty());
    }

    #[test]
    fn select_writes_label_and_closes() {
        let mut ac = Autocomplete::new();
        ac.input("kochi");
        let first = ac.visible()[0];
        let value = ac.select(first);
        assert_eq!(value, "Kochi, Kerala");
        assert!(ac.visible().is_empty());
    }

    #[test]
    fn blur_then_focus_reopens() {
        let mut ac = Autocomplete::new();
        ac.input("goa");
        ac.close();
        assert!(ac.visible().is_empty());
        ac.focus();
        assert_eq!(ac.visible().len(), 1);
    }
}
