//! Static site content: navigation links, the menu table, and events.
//!
//! Everything here is `const` and lives for the whole session; nothing in
//! the app mutates these tables at runtime.

/// An in-page navigation link rendered in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Menu", href: "#menu" },
    NavLink { label: "Events", href: "#events" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Pre-formatted price string, e.g. "£26.95".
    pub price: &'static str,
}

/// A named group of menu items. Exactly one category is displayed at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [MenuItem],
}

/// The category shown when the menu browser first mounts.
pub const DEFAULT_CATEGORY: &str = "starters";

pub const MENU_CATEGORIES: [MenuCategory; 4] = [
    MenuCategory {
        id: "starters",
        name: "Starters",
        items: &[
            MenuItem {
                id: 1,
                name: "Crispy Calamari",
                description: "Lightly dusted and fried, served with lemon aioli",
                price: "£9.50",
            },
            MenuItem {
                id: 2,
                name: "Wild Mushroom Arancini",
                description: "Crispy risotto balls with truffle mayo",
                price: "£8.95",
            },
            MenuItem {
                id: 3,
                name: "Smoked Salmon",
                description: "With pickled cucumber, dill crème fraîche",
                price: "£10.50",
            },
            MenuItem {
                id: 4,
                name: "Roasted Beetroot Salad",
                description: "With goat cheese, walnuts and honey dressing",
                price: "£8.25",
            },
        ],
    },
    MenuCategory {
        id: "mains",
        name: "Main Courses",
        items: &[
            MenuItem {
                id: 5,
                name: "Slow-Roasted Pork Belly",
                description: "With apple purée, crackling and cider jus",
                price: "£18.95",
            },
            MenuItem {
                id: 6,
                name: "Pan-Seared Sea Bass",
                description: "With crushed new potatoes, samphire and lemon butter sauce",
                price: "£21.50",
            },
            MenuItem {
                id: 7,
                name: "Aged Sirloin Steak",
                description: "28-day aged beef with triple-cooked chips and peppercorn sauce",
                price: "£26.95",
            },
            MenuItem {
                id: 8,
                name: "Wild Mushroom Risotto",
                description: "With truffle oil and parmesan crisp",
                price: "£16.50",
            },
        ],
    },
    MenuCategory {
        id: "desserts",
        name: "Desserts",
        items: &[
            MenuItem {
                id: 9,
                name: "Sticky Toffee Pudding",
                description: "With butterscotch sauce and vanilla ice cream",
                price: "£7.95",
            },
            MenuItem {
                id: 10,
                name: "Dark Chocolate Fondant",
                description: "With salted caramel ice cream",
                price: "£8.50",
            },
            MenuItem {
                id: 11,
                name: "Lemon Posset",
                description: "With shortbread and fresh berries",
                price: "£7.25",
            },
            MenuItem {
                id: 12,
                name: "Cheese Selection",
                description: "Local and continental cheeses with crackers and chutney",
                price: "£10.95",
            },
        ],
    },
    MenuCategory {
        id: "drinks",
        name: "Drinks",
        items: &[
            MenuItem {
                id: 13,
                name: "House Red Wine",
                description: "Smooth and medium-bodied",
                price: "£6.50 / £24.95",
            },
            MenuItem {
                id: 14,
                name: "Craft Beer Selection",
                description: "Ask your server for today's selection",
                price: "£5.95",
            },
            MenuItem {
                id: 15,
                name: "Signature Cocktails",
                description: "Seasonal ingredients, expertly mixed",
                price: "£9.95",
            },
            MenuItem {
                id: 16,
                name: "Artisan Coffee",
                description: "Locally roasted beans",
                price: "£3.50",
            },
        ],
    },
];

/// Look up a category by id.
pub fn category(id: &str) -> Option<&'static MenuCategory> {
    MENU_CATEGORIES.iter().find(|c| c.id == id)
}

/// Items for a category id; empty for an unknown id, which renders nothing.
pub fn category_items(id: &str) -> &'static [MenuItem] {
    category(id).map(|c| c.items).unwrap_or(&[])
}

/// Icon shown on an event card, rendered as a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventIcon {
    Music,
    Dining,
    Calendar,
    Group,
}

impl EventIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            EventIcon::Music => "\u{266B}",
            EventIcon::Dining => "\u{1F374}",
            EventIcon::Calendar => "\u{1F4C5}",
            EventIcon::Group => "\u{1F465}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInfo {
    pub id: u32,
    pub title: &'static str,
    pub schedule: &'static str,
    pub description: &'static str,
    pub icon: EventIcon,
}

pub const EVENTS: [EventInfo; 4] = [
    EventInfo {
        id: 1,
        title: "Live Jazz Night",
        schedule: "Every Friday, 8pm",
        description: "Enjoy the smooth sounds of our resident jazz trio while sipping on our signature cocktails.",
        icon: EventIcon::Music,
    },
    EventInfo {
        id: 2,
        title: "Wine Tasting Evening",
        schedule: "First Thursday of the month, 7pm",
        description: "Sample a selection of fine wines paired with complementary small plates.",
        icon: EventIcon::Dining,
    },
    EventInfo {
        id: 3,
        title: "Sunday Roast",
        schedule: "Every Sunday, 12pm-4pm",
        description: "Our famous Sunday roast with all the trimmings, perfect for family gatherings.",
        icon: EventIcon::Calendar,
    },
    EventInfo {
        id: 4,
        title: "Private Dining",
        schedule: "Available upon request",
        description: "Host your special occasion in our elegant private dining room, with bespoke menus.",
        icon: EventIcon::Group,
    },
];

/// Venue details shown in the contact section and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const VENUE: Venue = Venue {
    name: "Croft House",
    address: "12 Croft Lane, Birmingham B3 2JR",
    phone: "+44 (0)121 496 0523",
    email: "bookings@crofthouse.co.uk",
};

pub const OPENING_HOURS: [&str; 3] = [
    "Monday - Friday: 12pm - 11pm",
    "Saturday: 11am - 11pm",
    "Sunday: 12pm - 10pm",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_links_target_fragments() {
        assert_eq!(NAV_LINKS.len(), 5);
        for link in &NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
            assert!(link.href.len() > 1);
        }
    }

    #[test]
    fn test_item_ids_unique_across_all_categories() {
        let mut seen = HashSet::new();
        for cat in &MENU_CATEGORIES {
            for item in cat.items {
                assert!(seen.insert(item.id), "duplicate item id {}", item.id);
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_every_item_belongs_to_exactly_one_category() {
        for cat in &MENU_CATEGORIES {
            for item in cat.items {
                let owners: Vec<_> = MENU_CATEGORIES
                    .iter()
                    .filter(|c| c.items.iter().any(|i| i.id == item.id))
                    .map(|c| c.id)
                    .collect();
                assert_eq!(owners, vec![cat.id]);
            }
        }
    }

    #[test]
    fn test_category_lookup_returns_only_member_items() {
        for cat in &MENU_CATEGORIES {
            let items = category_items(cat.id);
            assert_eq!(items.len(), 4);
            assert!(items.iter().all(|i| cat.items.contains(i)));
        }
    }

    #[test]
    fn test_unknown_category_yields_no_items() {
        assert!(category("sides").is_none());
        assert!(category_items("sides").is_empty());
        assert!(category_items("").is_empty());
    }

    #[test]
    fn test_default_category_exists() {
        assert!(category(DEFAULT_CATEGORY).is_some());
    }

    #[test]
    fn test_sirloin_steak_is_a_main_at_26_95() {
        let steak = category_items("mains").iter().find(|i| i.id == 7).unwrap();
        assert_eq!(steak.name, "Aged Sirloin Steak");
        assert_eq!(steak.price, "£26.95");

        for cat in MENU_CATEGORIES.iter().filter(|c| c.id != "mains") {
            assert!(cat.items.iter().all(|i| i.id != 7));
        }
    }

    #[test]
    fn test_events_table() {
        assert_eq!(EVENTS.len(), 4);
        let mut seen = HashSet::new();
        for event in &EVENTS {
            assert!(seen.insert(event.id));
            assert!(!event.icon.glyph().is_empty());
        }
    }
}
