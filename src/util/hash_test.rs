use super::*;

#[test]
fn empty_hash_is_home() {
    assert_eq!(page_from_hash(""), Page::Home);
    assert_eq!(page_from_hash("#"), Page::Home);
    assert_eq!(page_from_hash("#/"), Page::Home);
}

#[test]
fn plain_and_slashed_hashes_resolve() {
    assert_eq!(page_from_hash("#cart"), Page::Cart);
    assert_eq!(page_from_hash("#/cart"), Page::Cart);
    assert_eq!(page_from_hash("cart"), Page::Cart);
}

#[test]
fn trailing_segments_and_queries_are_ignored() {
    assert_eq!(page_from_hash("#product/42"), Page::Product);
    assert_eq!(page_from_hash("#t-shirts?size=m"), Page::TShirts);
    assert_eq!(page_from_hash("#/summer-2025&ref=banner"), Page::Summer2025);
}

#[test]
fn hash_matching_is_case_insensitive() {
    assert_eq!(page_from_hash("#ADMIN"), Page::Admin);
    assert_eq!(page_from_hash("  #New-Arrivals "), Page::NewArrivals);
}

#[test]
fn unknown_hash_is_home() {
    assert_eq!(page_from_hash("#wishlist"), Page::Home);
    assert_eq!(page_from_hash("#//"), Page::Home);
}

#[test]
fn token_from_hash_strips_decoration() {
    assert_eq!(token_from_hash("#/jackets/winter"), "jackets");
    assert_eq!(token_from_hash("#"), "");
}

#[test]
fn hash_for_round_trips_every_page() {
    for page in Page::ALL {
        assert_eq!(page_from_hash(&hash_for(page)), page);
    }
    assert_eq!(hash_for(Page::Cart), "#cart");
}

#[test]
fn event_detail_resolves_like_a_token() {
    assert_eq!(page_from_event_detail(Some("bottoms")), Page::Bottoms);
    assert_eq!(page_from_event_detail(Some("???")), Page::Home);
    assert_eq!(page_from_event_detail(None), Page::Home);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_noops_without_hydrate() {
    assert_eq!(current_page(), Page::Home);
    navigate_to_page(Page::Cart);
    dispatch_navigate(Page::Admin);
}
