//! Extraction module tests
//!
//! These tests run the table extractor over pages shaped like the reference
//! site's equipment listings.

use equipment_randomizer::extraction::TableExtractor;
use equipment_randomizer::items::Item;
use pretty_assertions::assert_eq;

const WEAPONS_PAGE: &str = r#"
<html>
  <head><title>Weapons</title></head>
  <body>
    <table class="nav"><tr><td><a href="Weapons.aspx?Proficiency=Sniper">Sniper</a></td></tr></table>
    <h2>One-Handed</h2>
    <table>
      <tr><th>Name</th><th>Level</th><th>Price</th><th>Damage</th></tr>
      <tr><td><a href="WeaponDisplay.aspx?ItemName=Azimuth">Azimuth laser pistol</a></td><td>1</td><td>350</td><td>1d4 F</td></tr>
      <tr><td>Corona laser pistol</td><td> 6 </td><td>4,270</td><td>2d4 F</td></tr>
    </table>
    <h2>Two-Handed</h2>
    <table>
      <tr><th>Price</th><th>Damage</th><th>Level</th><th>Name</th></tr>
      <tr><td>425</td><td>1d8 F</td><td>1</td><td>Azimuth laser rifle</td></tr>
      <tr><td>—</td><td>—</td><td>—</td><td>Unlisted rifle</td></tr>
    </table>
  </body>
</html>"#;

#[test]
fn test_columns_found_per_table() {
    let items = TableExtractor::extract_items(WEAPONS_PAGE).unwrap();
    assert_eq!(
        items,
        vec![
            Item::new("Azimuth laser pistol", 1),
            Item::new("Corona laser pistol", 6),
            Item::new("Azimuth laser rifle", 1),
        ]
    );
}

#[test]
fn test_table_without_headers_is_skipped() {
    let html = r#"
        <table>
          <tr><td>Second skin</td><td>1</td></tr>
        </table>"#;
    assert!(TableExtractor::extract_items(html).unwrap().is_empty());
}

#[test]
fn test_short_rows_are_skipped() {
    let html = r#"
        <table>
          <tr><th>Price</th><th>Name</th><th>Level</th></tr>
          <tr><td colspan="3">Ammunition is sold in cartridges</td></tr>
          <tr><td>40</td><td>Battery</td><td>1</td></tr>
        </table>"#;
    assert_eq!(
        TableExtractor::extract_items(html).unwrap(),
        vec![Item::new("Battery", 1)]
    );
}

#[test]
fn test_headers_must_match_exactly() {
    let html = r#"
        <table>
          <tr><th>Item Name</th><th>Level</th></tr>
          <tr><td>Flight suit</td><td>2</td></tr>
        </table>"#;
    assert!(TableExtractor::extract_items(html).unwrap().is_empty());
}

#[test]
fn test_repeated_header_uses_last_column() {
    let html = r#"
        <table>
          <tr><th>Name</th><th>Level</th><th>Price</th><th>Level</th></tr>
          <tr><td>Widget</td><td>x</td><td>100</td><td>7</td></tr>
        </table>"#;
    let items = TableExtractor::extract_items(html).unwrap();
    assert_eq!(items, vec![Item::new("Widget", 7)]);
    assert_eq!(items[0].to_string(), "Widget (Lvl 7)");
}

#[test]
fn test_empty_page() {
    assert!(TableExtractor::extract_items("").unwrap().is_empty());
}
