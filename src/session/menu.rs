//! Menu definitions
//!
//! One enum per menu level. Choices are the digits shown next to each entry.

/// A menu that can be shown and parsed
pub trait Menu: Sized {
    /// Title line
    const TITLE: &'static str;

    /// Entries in display order; entry `i` is chosen with `i + 1`
    const ENTRIES: &'static [&'static str];

    /// Map a (trimmed) choice to a variant
    fn parse(choice: &str) -> Option<Self>;

    /// Menu text ready to print
    fn render() -> String {
        let mut text = format!("\n {}\n", Self::TITLE);
        for (i, entry) in Self::ENTRIES.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, entry));
        }
        text
    }
}

/// Main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    Add,
    Update,
    Search,
    Filter,
    Sort,
    Stats,
    List,
    Exit,
}

impl Menu for MainMenu {
    const TITLE: &'static str = "COUNTRY DATA MANAGEMENT";
    const ENTRIES: &'static [&'static str] = &[
        "Add a country",
        "Update population/area",
        "Search country by name",
        "Filter countries",
        "Sort countries",
        "Show statistics",
        "Show all countries",
        "Save and exit",
    ];

    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MainMenu::Add),
            "2" => Some(MainMenu::Update),
            "3" => Some(MainMenu::Search),
            "4" => Some(MainMenu::Filter),
            "5" => Some(MainMenu::Sort),
            "6" => Some(MainMenu::Stats),
            "7" => Some(MainMenu::List),
            "8" => Some(MainMenu::Exit),
            _ => None,
        }
    }
}

/// Filter submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMenu {
    Continent,
    PopulationRange,
    AreaRange,
    Back,
}

impl Menu for FilterMenu {
    const TITLE: &'static str = "FILTER SUBMENU";
    const ENTRIES: &'static [&'static str] = &[
        "Filter by continent",
        "Filter by population range",
        "Filter by area range",
        "Back to main menu",
    ];

    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(FilterMenu::Continent),
            "2" => Some(FilterMenu::PopulationRange),
            "3" => Some(FilterMenu::AreaRange),
            "4" => Some(FilterMenu::Back),
            _ => None,
        }
    }
}

/// Sort submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMenu {
    Name,
    Population,
    Area,
    Back,
}

impl Menu for SortMenu {
    const TITLE: &'static str = "SORT SUBMENU";
    const ENTRIES: &'static [&'static str] = &[
        "Name (A-Z / Z-A)",
        "Population",
        "Area",
        "Back to main menu",
    ];

    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(SortMenu::Name),
            "2" => Some(SortMenu::Population),
            "3" => Some(SortMenu::Area),
            "4" => Some(SortMenu::Back),
            _ => None,
        }
    }
}

/// Statistics submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMenu {
    Extremes,
    AveragePopulation,
    AverageArea,
    CountByContinent,
    Back,
}

impl Menu for StatsMenu {
    const TITLE: &'static str = "STATISTICS SUBMENU";
    const ENTRIES: &'static [&'static str] = &[
        "Most and least populated country",
        "Average population",
        "Average area",
        "Countries per continent",
        "Back to main menu",
    ];

    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(StatsMenu::Extremes),
            "2" => Some(StatsMenu::AveragePopulation),
            "3" => Some(StatsMenu::AverageArea),
            "4" => Some(StatsMenu::CountByContinent),
            "5" => Some(StatsMenu::Back),
            _ => None,
        }
    }
}
