#![allow(dead_code)]

use dramlog::Bottle;

pub struct Label<'a> {
    pub id: i64,
    pub name: &'a str,
    pub kind: &'a str,
    pub region: &'a str,
    pub country: &'a str,
    pub age: f64,
    pub abv: f64,
    pub rating: f64,
}

pub fn bottle(label: &Label<'_>) -> Bottle {
    Bottle {
        id: label.id,
        name: Some(label.name.to_string()),
        whiskey_type: Some(label.kind.to_string()),
        region: Some(label.region.to_string()),
        country: Some(label.country.to_string()),
        age: Some(label.age),
        abv: Some(label.abv),
        rating: Some(label.rating),
        ..Bottle::default()
    }
}

/// Five-bottle reference collection.
pub fn shelf() -> Vec<Bottle> {
    let mut buffalo = bottle(&Label {
        id: 1,
        name: "Buffalo Trace",
        kind: "bourbon",
        region: "Kentucky",
        country: "USA",
        age: 8.0,
        abv: 45.0,
        rating: 8.5,
    });
    buffalo.distillery = Some("Buffalo Trace".to_string());
    buffalo.purchase_price = Some(30.0);
    buffalo.limited_edition = Some(false);
    buffalo.natural_color = Some(false);
    buffalo.chill_filtered = Some(true);
    buffalo.is_opened = Some(true);

    let mut pappy = bottle(&Label {
        id: 2,
        name: "Pappy Van Winkle 20",
        kind: "bourbon",
        region: "Kentucky",
        country: "USA",
        age: 20.0,
        abv: 45.2,
        rating: 9.8,
    });
    pappy.distillery = Some("Buffalo Trace".to_string());
    pappy.purchase_price = Some(2000.0);
    pappy.limited_edition = Some(true);

    let mut lagavulin = bottle(&Label {
        id: 3,
        name: "Lagavulin 16",
        kind: "scotch",
        region: "Islay",
        country: "Scotland",
        age: 16.0,
        abv: 43.0,
        rating: 9.0,
    });
    lagavulin.distillery = Some("Lagavulin".to_string());
    lagavulin.purchase_price = Some(100.0);
    lagavulin.chill_filtered = Some(true);
    lagavulin.is_opened = Some(true);

    let mut yamazaki = bottle(&Label {
        id: 4,
        name: "Yamazaki 18",
        kind: "japanese",
        region: "Osaka",
        country: "Japan",
        age: 18.0,
        abv: 43.0,
        rating: 9.5,
    });
    yamazaki.distillery = Some("Yamazaki".to_string());
    yamazaki.purchase_price = Some(500.0);

    let mut redbreast = bottle(&Label {
        id: 5,
        name: "Redbreast 12",
        kind: "irish",
        region: "Cork",
        country: "Ireland",
        age: 12.0,
        abv: 40.0,
        rating: 8.0,
    });
    redbreast.distillery = Some("Midleton".to_string());
    redbreast.msrp = Some(65.0);

    vec![buffalo, pappy, lagavulin, yamazaki, redbreast]
}

pub fn ids(records: &[Bottle]) -> Vec<i64> {
    records.iter().map(|b| b.id).collect()
}
