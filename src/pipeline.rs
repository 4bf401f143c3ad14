use crate::error::FeedError;
use crate::feed::{Feed, Property};
use crate::record::PropertyRecord;

// Create a predicate for property elements based on the city. Both sides of
// the comparison are lower-cased and trimmed. A property without a city node
// is an error, never a silent non-match.
pub fn city_filter(city: &str) -> impl Fn(&Property) -> Result<bool, FeedError> {
    let needle = city.trim().to_lowercase();
    move |property: &Property| {
        let city = property.city()?;
        Ok(city.trim().to_lowercase() == needle)
    }
}

// Total bedroom count for a property: the sum over its floorplans of
// unit count times bedrooms per unit. Zero floorplans sum to zero.
pub fn total_bedrooms(property: &Property) -> Result<f64, FeedError> {
    let label = property.label();
    let mut total = 0.0;
    for floorplan in &property.floorplans {
        total += floorplan.units(&label)? * floorplan.bedrooms_per_unit(&label)?;
    }
    Ok(total)
}

// Project one property element onto the output schema. All-or-nothing: any
// absent required field fails the whole record.
pub fn map_property(property: &Property) -> Result<PropertyRecord, FeedError> {
    let raw_id = property.id_value()?;
    let property_id = raw_id.trim().parse::<i64>().map_err(|_| FeedError::InvalidNumber {
        property: property.label(),
        path: "PropertyID/Identification/@IDValue",
        value: raw_id.to_string(),
    })?;

    Ok(PropertyRecord {
        property_id,
        name: property.marketing_name()?.to_string(),
        email: property.email()?.to_string(),
        total_rooms: total_bedrooms(property)?,
    })
}

// The filter-and-map stage of the pipeline. Stable: surviving records keep
// the relative order of their Property elements in the feed. The first
// error aborts the run; there is no partial-success mode.
pub struct FeedPipeline {
    city: String,
}

impl FeedPipeline {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }

    pub fn run(&self, feed: &Feed) -> Result<Vec<PropertyRecord>, FeedError> {
        let matches_city = city_filter(&self.city);

        let mut records = Vec::new();
        for property in &feed.properties {
            if !matches_city(property)? {
                continue;
            }
            records.push(map_property(property)?);
        }
        Ok(records)
    }
}
