//! Page identifiers and the page → content dispatch table.
//!
//! DESIGN
//! ======
//! Pages form a closed set. Every page maps to exactly one content
//! collaborator, and anything that is not a page token parses to `Home` so
//! the home composite doubles as the default view.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A navigable view of the storefront.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Product,
    TShirts,
    Shirts,
    Bottoms,
    Jackets,
    Accessories,
    NewArrivals,
    Summer2025,
    Cart,
    Admin,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Home,
        Page::Product,
        Page::TShirts,
        Page::Shirts,
        Page::Bottoms,
        Page::Jackets,
        Page::Accessories,
        Page::NewArrivals,
        Page::Summer2025,
        Page::Cart,
        Page::Admin,
    ];

    /// Canonical token used in the URL hash and in `navigate` events.
    pub fn token(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Product => "product",
            Page::TShirts => "t-shirts",
            Page::Shirts => "shirts",
            Page::Bottoms => "bottoms",
            Page::Jackets => "jackets",
            Page::Accessories => "accessories",
            Page::NewArrivals => "new-arrivals",
            Page::Summer2025 => "summer-2025",
            Page::Cart => "cart",
            Page::Admin => "admin",
        }
    }

    /// Strict parse. Matching is case-insensitive and ignores surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPage`] when `token` names no page.
    pub fn parse(token: &str) -> Result<Self> {
        let normalized = token.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| page.token() == normalized)
            .ok_or(Error::UnknownPage(normalized))
    }

    /// Lenient parse used by the router: unknown and empty tokens are `Home`.
    pub fn from_token(token: &str) -> Self {
        match Page::parse(token) {
            Ok(page) => page,
            Err(err) => {
                if !token.trim().is_empty() {
                    log::debug!("{err}; showing home");
                }
                Page::Home
            }
        }
    }

    /// The content collaborator rendered for this page.
    pub fn content(self) -> Content {
        match self {
            Page::Home => Content::HomeComposite,
            Page::Product => Content::Product,
            Page::TShirts => Content::Category(Category::TShirts),
            Page::Shirts => Content::Category(Category::Shirts),
            Page::Bottoms => Content::Category(Category::Bottoms),
            Page::Jackets => Content::Category(Category::Jackets),
            Page::Accessories => Content::Category(Category::Accessories),
            Page::NewArrivals => Content::Category(Category::NewArrivals),
            Page::Summer2025 => Content::Category(Category::Summer2025),
            Page::Cart => Content::Cart,
            Page::Admin => Content::Admin,
        }
    }

    /// Whether the shared header and footer frame this page.
    ///
    /// The admin panel is full-screen and brings its own chrome.
    pub fn shows_chrome(self) -> bool {
        self != Page::Admin
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::parse(s)
    }
}

/// Content collaborator selected by the router for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    /// Marketing sections stacked into the landing view.
    HomeComposite,
    Category(Category),
    Cart,
    Product,
    Admin,
}

/// Catalog listing pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    TShirts,
    Shirts,
    Bottoms,
    Jackets,
    Accessories,
    NewArrivals,
    Summer2025,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::TShirts => "T-Shirts",
            Category::Shirts => "Shirts",
            Category::Bottoms => "Bottoms",
            Category::Jackets => "Jackets",
            Category::Accessories => "Accessories",
            Category::NewArrivals => "New Arrivals",
            Category::Summer2025 => "Summer 2025",
        }
    }

    /// The page that lists this category.
    pub fn page(self) -> Page {
        match self {
            Category::TShirts => Page::TShirts,
            Category::Shirts => Page::Shirts,
            Category::Bottoms => Page::Bottoms,
            Category::Jackets => Page::Jackets,
            Category::Accessories => Page::Accessories,
            Category::NewArrivals => Page::NewArrivals,
            Category::Summer2025 => Page::Summer2025,
        }
    }
}
