use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::FeedError;

// Structures for XML deserialization. Every required leaf is optional at
// the serde layer; the typed accessors below upgrade an absent node to a
// MissingField error naming the property and the field path.
#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Feed {
    #[serde(rename = "Property")]
    pub properties: Vec<Property>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Property {
    #[serde(rename = "PropertyID")]
    pub property_id: PropertyId,
    #[serde(rename = "Floorplan")]
    pub floorplans: Vec<Floorplan>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PropertyId {
    pub identification: Identification,
    pub marketing_name: Option<String>,
    pub email: Option<String>,
    pub address: Address,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Identification {
    #[serde(rename = "@IDValue")]
    pub id_value: Option<String>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Address {
    pub city: Option<String>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Floorplan {
    pub unit_count: Option<String>,
    #[serde(rename = "Room")]
    pub rooms: Vec<Room>,
}

#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Room {
    #[serde(rename = "@RoomType")]
    pub room_type: Option<String>,
    pub count: Option<String>,
}

// Parse raw feed text into the document tree. The root element name is not
// checked; only the Property children matter.
pub fn parse_feed(xml: &str) -> Result<Feed, FeedError> {
    from_str(xml).map_err(|e| FeedError::Parse(e.to_string()))
}

impl Property {
    // Identifier used in diagnostics: the IDValue when present, else the
    // marketing name, else a placeholder.
    pub fn label(&self) -> String {
        if let Some(id) = self.property_id.identification.id_value.as_deref() {
            return id.to_string();
        }
        if let Some(name) = self.property_id.marketing_name.as_deref() {
            return name.to_string();
        }
        "<unidentified>".to_string()
    }

    pub fn id_value(&self) -> Result<&str, FeedError> {
        self.property_id
            .identification
            .id_value
            .as_deref()
            .ok_or_else(|| FeedError::missing(&self.label(), "PropertyID/Identification/@IDValue"))
    }

    pub fn marketing_name(&self) -> Result<&str, FeedError> {
        self.property_id
            .marketing_name
            .as_deref()
            .ok_or_else(|| FeedError::missing(&self.label(), "PropertyID/MarketingName"))
    }

    pub fn email(&self) -> Result<&str, FeedError> {
        self.property_id
            .email
            .as_deref()
            .ok_or_else(|| FeedError::missing(&self.label(), "PropertyID/Email"))
    }

    pub fn city(&self) -> Result<&str, FeedError> {
        self.property_id
            .address
            .city
            .as_deref()
            .ok_or_else(|| FeedError::missing(&self.label(), "PropertyID/Address/City"))
    }
}

impl Floorplan {
    pub fn units(&self, property: &str) -> Result<f64, FeedError> {
        let raw = self
            .unit_count
            .as_deref()
            .ok_or_else(|| FeedError::missing(property, "Floorplan/UnitCount"))?;
        parse_count(property, "Floorplan/UnitCount", raw)
    }

    // Count of bedrooms per unit, from the Room child with RoomType "Bedroom".
    // A floorplan without such a room is an error, never an implicit zero.
    pub fn bedrooms_per_unit(&self, property: &str) -> Result<f64, FeedError> {
        let room = self
            .rooms
            .iter()
            .find(|r| r.room_type.as_deref() == Some("Bedroom"))
            .ok_or_else(|| FeedError::missing(property, "Floorplan/Room[@RoomType='Bedroom']"))?;
        let raw = room
            .count
            .as_deref()
            .ok_or_else(|| FeedError::missing(property, "Floorplan/Room[@RoomType='Bedroom']/Count"))?;
        parse_count(property, "Floorplan/Room[@RoomType='Bedroom']/Count", raw)
    }
}

fn parse_count(property: &str, path: &'static str, raw: &str) -> Result<f64, FeedError> {
    raw.trim().parse::<f64>().map_err(|_| FeedError::InvalidNumber {
        property: property.to_string(),
        path,
        value: raw.to_string(),
    })
}

// A small sample for inline testing; samples/sample_feed.xml carries the
// same records for tests that go through the file loader.
pub const SAMPLE_FEED_XML: &str = r#"
<PhysicalProperty>
  <Property>
    <PropertyID>
      <Identification IDType="Property" IDValue="20360"/>
      <MarketingName>Washington Court</MarketingName>
      <Email>leasing@washingtoncourt.example.com</Email>
      <Address>
        <City>Madison</City>
      </Address>
    </PropertyID>
    <Floorplan>
      <UnitCount>2</UnitCount>
      <Room RoomType="Bedroom">
        <Count>1</Count>
      </Room>
      <Room RoomType="Bathroom">
        <Count>1</Count>
      </Room>
    </Floorplan>
    <Floorplan>
      <UnitCount>3</UnitCount>
      <Room RoomType="Bedroom">
        <Count>2</Count>
      </Room>
    </Floorplan>
  </Property>
  <Property>
    <PropertyID>
      <Identification IDType="Property" IDValue="20533"/>
      <MarketingName>Sunset Flats</MarketingName>
      <Email>contact@sunsetflats.example.com</Email>
      <Address>
        <City>  MADISON  </City>
      </Address>
    </PropertyID>
    <Floorplan>
      <UnitCount>5</UnitCount>
      <Room RoomType="Bedroom">
        <Count>1</Count>
      </Room>
    </Floorplan>
  </Property>
  <Property>
    <PropertyID>
      <Identification IDType="Property" IDValue="20777"/>
      <MarketingName>Lakeshore Lofts</MarketingName>
      <Email>info@lakeshorelofts.example.com</Email>
      <Address>
        <City>Milwaukee</City>
      </Address>
    </PropertyID>
  </Property>
</PhysicalProperty>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_feed() {
        let feed = parse_feed(SAMPLE_FEED_XML).unwrap();
        assert_eq!(feed.properties.len(), 3);

        let ids: Vec<&str> = feed
            .properties
            .iter()
            .map(|p| p.id_value().unwrap())
            .collect();
        // Document order is preserved
        assert_eq!(ids, vec!["20360", "20533", "20777"]);
    }

    #[test]
    fn test_accessors_on_well_formed_property() {
        let feed = parse_feed(SAMPLE_FEED_XML).unwrap();
        let property = &feed.properties[0];

        assert_eq!(property.marketing_name().unwrap(), "Washington Court");
        assert_eq!(
            property.email().unwrap(),
            "leasing@washingtoncourt.example.com"
        );
        assert_eq!(property.city().unwrap(), "Madison");
        assert_eq!(property.floorplans.len(), 2);
        assert_eq!(property.floorplans[0].units("20360").unwrap(), 2.0);
        assert_eq!(
            property.floorplans[0].bedrooms_per_unit("20360").unwrap(),
            1.0
        );
    }

    #[test]
    fn test_feed_without_properties_is_empty() {
        let feed = parse_feed("<PhysicalProperty></PhysicalProperty>").unwrap();
        assert!(feed.properties.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_a_parse_error() {
        let result = parse_feed("<PhysicalProperty><Property></PhysicalProperty>");
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_label_falls_back_to_marketing_name() {
        let xml = r#"
        <PhysicalProperty>
          <Property>
            <PropertyID>
              <MarketingName>No Id Apartments</MarketingName>
            </PropertyID>
          </Property>
        </PhysicalProperty>
        "#;
        let feed = parse_feed(xml).unwrap();
        assert_eq!(feed.properties[0].label(), "No Id Apartments");
        assert!(matches!(
            feed.properties[0].id_value(),
            Err(FeedError::MissingField { .. })
        ));
    }

    #[test]
    fn test_missing_bedroom_room_is_an_error() {
        let xml = r#"
        <PhysicalProperty>
          <Property>
            <PropertyID>
              <Identification IDValue="1"/>
            </PropertyID>
            <Floorplan>
              <UnitCount>4</UnitCount>
              <Room RoomType="Bathroom">
                <Count>2</Count>
              </Room>
            </Floorplan>
          </Property>
        </PhysicalProperty>
        "#;
        let feed = parse_feed(xml).unwrap();
        let result = feed.properties[0].floorplans[0].bedrooms_per_unit("1");
        match result {
            Err(FeedError::MissingField { property, path }) => {
                assert_eq!(property, "1");
                assert_eq!(path, "Floorplan/Room[@RoomType='Bedroom']");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_unit_count_is_an_error() {
        let xml = r#"
        <PhysicalProperty>
          <Property>
            <PropertyID>
              <Identification IDValue="1"/>
            </PropertyID>
            <Floorplan>
              <UnitCount>two</UnitCount>
              <Room RoomType="Bedroom">
                <Count>1</Count>
              </Room>
            </Floorplan>
          </Property>
        </PhysicalProperty>
        "#;
        let feed = parse_feed(xml).unwrap();
        let result = feed.properties[0].floorplans[0].units("1");
        assert!(matches!(
            result,
            Err(FeedError::InvalidNumber { value, .. }) if value == "two"
        ));
    }
}
