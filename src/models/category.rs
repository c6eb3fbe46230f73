use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Clothing,
    Travel,
    Meeting,
    Other,
}

impl Category {
    /// Categories that carry a budget, in the column order of the budget log.
    pub const TRACKED: [Category; 4] = [
        Category::Food,
        Category::Clothing,
        Category::Travel,
        Category::Meeting,
    ];

    /// Every selectable category, in the order offered to the user.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Clothing,
        Category::Meeting,
        Category::Travel,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Travel => "Travel",
            Category::Meeting => "Meeting",
            Category::Other => "Other",
        }
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    pub fn is_tracked(&self) -> bool {
        !matches!(self, Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
