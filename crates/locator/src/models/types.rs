//! Core stop type and crate errors.

use std::sync::Arc;

use geo::Point;

use bus_api_types::BusStopDto;

use crate::identifiers::StopId;

/// A named physical bus stop.
///
/// `location` is `Some` only when the backend record carried BOTH a
/// latitude and a longitude; a stop without a location is still searchable
/// by name but can never be returned by proximity resolution.
///
/// Cheap to clone: text lives in `Arc<str>`.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopId,
    pub name: Arc<str>,
    pub city: Arc<str>,
    /// x = longitude, y = latitude, decimal degrees.
    pub location: Option<Point>,
    /// Direction labels of the routes serving this stop (may be empty).
    pub directions: Vec<Arc<str>>,
}

impl Stop {
    /// The label shown next to a selected stop, if it has one.
    pub fn primary_direction(&self) -> Option<&str> {
        self.directions.first().map(|d| d.as_ref())
    }
}

impl From<BusStopDto> for Stop {
    fn from(dto: BusStopDto) -> Self {
        // Half-filled coordinates on the wire degrade to "no location"
        // rather than erroring; such stops are simply never resolved.
        let location = match (dto.latitude, dto.longitude) {
            (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
            _ => None,
        };

        // An admin-set direction wins only when the route-derived list is
        // absent, mirroring how the backend assembles the record.
        let directions: Vec<Arc<str>> = match dto.directions {
            Some(list) if !list.is_empty() => list.into_iter().map(Into::into).collect(),
            _ => dto.direction.into_iter().map(Into::into).collect(),
        };

        Self {
            id: StopId::new(dto.id),
            name: dto.name.into(),
            city: dto.city.unwrap_or_default().into(),
            location,
            directions,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("stop list payload was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] bus_api_types::ApiError),

    #[error("stop source failed: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, LocatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: u64) -> BusStopDto {
        BusStopDto {
            id,
            name: "Rynek".into(),
            city: Some("Kłodawa".into()),
            latitude: Some(52.79),
            longitude: Some(15.21),
            direction: None,
            directions: None,
            distance: None,
        }
    }

    #[test]
    fn test_from_dto_with_coordinates() {
        let stop = Stop::from(dto(1));
        assert_eq!(stop.id, StopId::new(1));
        assert_eq!(&*stop.name, "Rynek");
        assert_eq!(&*stop.city, "Kłodawa");

        let location = stop.location.unwrap();
        assert_eq!(location.x(), 15.21); // longitude
        assert_eq!(location.y(), 52.79); // latitude
    }

    #[test]
    fn test_half_coordinates_degrade_to_none() {
        let mut lat_only = dto(2);
        lat_only.longitude = None;
        assert!(Stop::from(lat_only).location.is_none());

        let mut lon_only = dto(3);
        lon_only.latitude = None;
        assert!(Stop::from(lon_only).location.is_none());

        let mut neither = dto(4);
        neither.latitude = None;
        neither.longitude = None;
        assert!(Stop::from(neither).location.is_none());
    }

    #[test]
    fn test_direction_merging() {
        let mut both = dto(5);
        both.direction = Some("Gorzów Wlkp.".into());
        both.directions = Some(vec!["Gorzów Wlkp.".into(), "Wojcieszyce".into()]);
        let stop = Stop::from(both);
        assert_eq!(stop.directions.len(), 2);
        assert_eq!(stop.primary_direction(), Some("Gorzów Wlkp."));

        let mut single = dto(6);
        single.direction = Some("Santocko".into());
        single.directions = Some(vec![]);
        let stop = Stop::from(single);
        assert_eq!(stop.directions.len(), 1);
        assert_eq!(stop.primary_direction(), Some("Santocko"));

        let stop = Stop::from(dto(7));
        assert!(stop.directions.is_empty());
        assert_eq!(stop.primary_direction(), None);
    }

    #[test]
    fn test_missing_city_becomes_empty() {
        let mut no_city = dto(8);
        no_city.city = None;
        assert_eq!(&*Stop::from(no_city).city, "");
    }
}
