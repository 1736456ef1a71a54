use crate::models::itinerary::Coordinate;
use serde::Serialize;
use url::Url;

/// Destination for a navigation/rideshare link. Coordinates win over the
/// address when both are present.
#[derive(Debug, Clone)]
pub struct DeepLinkTarget {
    pub address: String,
    pub coordinates: Option<Coordinate>,
}

/// The full set of links the UI offers for one stop.
#[derive(Debug, Serialize)]
pub struct TransportLinks {
    pub uber: String,
    pub lyft: String,
    #[serde(rename = "googleMaps")]
    pub google_maps: String,
    #[serde(rename = "appleMaps")]
    pub apple_maps: String,
    pub waze: String,
}

pub fn transport_links(target: &DeepLinkTarget) -> TransportLinks {
    TransportLinks {
        uber: uber_link(target),
        lyft: lyft_link(target),
        google_maps: google_maps_link(target),
        apple_maps: apple_maps_link(target),
        waze: waze_link(target),
    }
}

/// Universal link that works on web, iOS and Android. Pickup stays at the
/// rider's current location.
pub fn uber_link(target: &DeepLinkTarget) -> String {
    let mut url = base_url("https://m.uber.com/ul/");
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("action", "setPickup")
            .append_pair("pickup[latitude]", "my_location")
            .append_pair("pickup[longitude]", "my_location")
            .append_pair("pickup[nickname]", "Current Location");
        if let Some(coords) = &target.coordinates {
            pairs
                .append_pair("dropoff[latitude]", &coords.lat.to_string())
                .append_pair("dropoff[longitude]", &coords.lng.to_string());
        }
        pairs.append_pair("dropoff[formatted_address]", &target.address);
    }
    url.to_string()
}

pub fn lyft_link(target: &DeepLinkTarget) -> String {
    let mut url = base_url("https://lyft.com/ride");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("id", "lyft");
        if let Some(coords) = &target.coordinates {
            pairs
                .append_pair("destination[latitude]", &coords.lat.to_string())
                .append_pair("destination[longitude]", &coords.lng.to_string());
        }
    }
    url.to_string()
}

pub fn google_maps_link(target: &DeepLinkTarget) -> String {
    let mut url = base_url("https://www.google.com/maps/dir/");
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("api", "1")
            .append_pair("travelmode", "driving")
            .append_pair("destination", &destination_value(target));
    }
    url.to_string()
}

pub fn apple_maps_link(target: &DeepLinkTarget) -> String {
    let mut url = base_url("https://maps.apple.com/");
    {
        let mut pairs = url.query_pairs_mut();
        // dirflg=d requests driving directions
        pairs
            .append_pair("dirflg", "d")
            .append_pair("daddr", &destination_value(target));
    }
    url.to_string()
}

pub fn waze_link(target: &DeepLinkTarget) -> String {
    let mut url = base_url("https://waze.com/ul");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("navigate", "yes");
        match &target.coordinates {
            Some(coords) => {
                pairs.append_pair("ll", &format!("{},{}", coords.lat, coords.lng));
            }
            None => {
                pairs.append_pair("q", &target.address);
            }
        }
    }
    url.to_string()
}

fn destination_value(target: &DeepLinkTarget) -> String {
    match &target.coordinates {
        Some(coords) => format!("{},{}", coords.lat, coords.lng),
        None => target.address.clone(),
    }
}

fn base_url(base: &str) -> Url {
    // All bases are static, valid URLs.
    Url::parse(base).unwrap()
}
