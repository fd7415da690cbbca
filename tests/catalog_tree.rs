//! Integration test for the category tree utilities.
//!
//! Loads the jewellery catalogue fixture (two main categories, subs and
//! bases underneath) and exercises the selector pipeline the storefront
//! admin uses: flatten for the dropdown, slug lookup for routing, and the
//! cascading main → sub → base filters.

use testresult::TestResult;

use vitrine::fixtures::Fixture;
use vitrine::prelude::*;

#[test]
fn flatten_orders_depth_first_with_indentation() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;

    let flat = flatten(fixture.categories(), Locale::En);

    let labels: Vec<&str> = flat.iter().map(FlatCategory::label).collect();

    assert_eq!(
        labels,
        vec![
            "Jewellery",
            "  Rings",
            "    Engagement",
            "    Wedding Bands",
            "  Necklaces",
            "    Chains",
            "    Pendants",
            "  Earrings",
            "Bridal Sets",
            "  Classic Sets",
        ]
    );

    assert!(flat.iter().all(|entry| entry.level() <= CategoryLevel::Base));

    Ok(())
}

#[test]
fn flatten_localizes_labels() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;

    let flat = flatten(fixture.categories(), Locale::Ur);

    let first = flat.first().map(FlatCategory::label);

    assert_eq!(first, Some("زیورات"));

    Ok(())
}

#[test]
fn slug_lookup_returns_subtree() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;

    let rings = find_by_slug(fixture.categories(), "rings").ok_or("rings not found")?;

    assert_eq!(rings.level, CategoryLevel::Sub);
    assert_eq!(rings.parent, Some(CategoryId::from("cat-jewellery")));

    let base_slugs: Vec<&str> = rings.children.iter().map(|c| c.slug.as_str()).collect();

    assert_eq!(base_slugs, vec!["engagement", "wedding-bands"]);

    assert!(find_by_slug(fixture.categories(), "watches").is_none());

    Ok(())
}

#[test]
fn cascading_selects_walk_main_to_base() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;
    let flat = flatten(fixture.categories(), Locale::En);

    let subs: Vec<&str> =
        filter_by_parent(&flat, &CategoryId::from("cat-jewellery"), CategoryLevel::Sub)
            .map(FlatCategory::slug)
            .collect();

    assert_eq!(subs, vec!["rings", "necklaces", "earrings"]);

    let bases: Vec<&str> =
        filter_by_parent(&flat, &CategoryId::from("cat-necklaces"), CategoryLevel::Base)
            .map(FlatCategory::slug)
            .collect();

    assert_eq!(bases, vec!["chains", "pendants"]);

    // A leaf has no further options to offer.
    let below_base =
        filter_by_parent(&flat, &CategoryId::from("cat-chains"), CategoryLevel::Base).count();

    assert_eq!(below_base, 0, "base categories have no children");

    Ok(())
}

#[test]
fn index_agrees_with_tree_traversal() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;
    let tree = fixture.categories();
    let index = CategoryIndex::new(tree);

    assert_eq!(index.len(), 10);

    for slug in ["jewellery", "rings", "pendants", "bridal"] {
        let via_index = index.by_slug(slug).map(|c| c.id.as_str());
        let via_tree = find_by_slug(tree, slug).map(|c| c.id.as_str());

        assert_eq!(via_index, via_tree, "index and DFS disagree on {slug}");
    }

    let earring_children = index.children_of(&CategoryId::from("cat-earrings"));

    assert!(earring_children.is_empty());

    Ok(())
}

#[test]
fn fixture_tree_passes_boundary_validation() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;

    validate_tree(fixture.categories())?;

    Ok(())
}
