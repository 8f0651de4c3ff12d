use super::*;

// =============================================================
// Tokens
// =============================================================

#[test]
fn every_page_parses_from_its_own_token() {
    for page in Page::ALL {
        assert_eq!(Page::parse(page.token()).unwrap(), page);
    }
}

#[test]
fn tokens_are_unique() {
    for (i, a) in Page::ALL.iter().enumerate() {
        for b in &Page::ALL[i + 1..] {
            assert_ne!(a.token(), b.token());
        }
    }
}

#[test]
fn parse_ignores_case_and_whitespace() {
    assert_eq!(Page::parse("  Cart ").unwrap(), Page::Cart);
    assert_eq!(Page::parse("SUMMER-2025").unwrap(), Page::Summer2025);
}

#[test]
fn parse_rejects_unknown_token() {
    let err = Page::parse("checkout").unwrap_err();
    assert!(matches!(err, Error::UnknownPage(ref t) if t == "checkout"));
    assert_eq!(err.to_string(), "unknown page: checkout");
}

#[test]
fn from_token_falls_back_to_home() {
    assert_eq!(Page::from_token("checkout"), Page::Home);
    assert_eq!(Page::from_token(""), Page::Home);
    assert_eq!(Page::from_token("jackets"), Page::Jackets);
}

#[test]
fn from_str_matches_parse() {
    assert_eq!("admin".parse::<Page>().unwrap(), Page::Admin);
    assert!("nope".parse::<Page>().is_err());
}

#[test]
fn display_writes_token() {
    assert_eq!(Page::NewArrivals.to_string(), "new-arrivals");
}

#[test]
fn default_page_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn pages_dispatch_to_their_content() {
    assert_eq!(Page::Home.content(), Content::HomeComposite);
    assert_eq!(Page::Product.content(), Content::Product);
    assert_eq!(Page::Cart.content(), Content::Cart);
    assert_eq!(Page::Admin.content(), Content::Admin);
    assert_eq!(Page::TShirts.content(), Content::Category(Category::TShirts));
    assert_eq!(Page::Shirts.content(), Content::Category(Category::Shirts));
    assert_eq!(Page::Bottoms.content(), Content::Category(Category::Bottoms));
    assert_eq!(Page::Jackets.content(), Content::Category(Category::Jackets));
    assert_eq!(Page::Accessories.content(), Content::Category(Category::Accessories));
    assert_eq!(Page::NewArrivals.content(), Content::Category(Category::NewArrivals));
    assert_eq!(Page::Summer2025.content(), Content::Category(Category::Summer2025));
}

#[test]
fn unknown_token_dispatches_to_home_composite() {
    assert_eq!(Page::from_token("wishlist").content(), Content::HomeComposite);
}

#[test]
fn category_pages_round_trip_through_content() {
    for page in Page::ALL {
        if let Content::Category(category) = page.content() {
            assert_eq!(category.page(), page);
        }
    }
}

#[test]
fn only_admin_hides_chrome() {
    for page in Page::ALL {
        assert_eq!(page.shows_chrome(), page != Page::Admin);
    }
}

#[test]
fn category_titles_are_human_readable() {
    assert_eq!(Category::TShirts.title(), "T-Shirts");
    assert_eq!(Category::Summer2025.title(), "Summer 2025");
}
