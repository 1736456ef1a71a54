use crate::models::travel_info::EmergencyInfo;

/// (lookup key, display country, police, ambulance, fire, universal number).
/// Keys include common aliases so "usa" and "united states" both resolve.
const EMERGENCY_DATA: &[(&str, &str, &str, &str, &str, &str)] = &[
    // Americas
    ("united states", "United States", "911", "911", "911", "911"),
    ("usa", "United States", "911", "911", "911", "911"),
    ("canada", "Canada", "911", "911", "911", "911"),
    ("mexico", "Mexico", "911", "911", "911", "911"),
    ("brazil", "Brazil", "190", "192", "193", "190"),
    ("argentina", "Argentina", "911", "107", "100", "911"),
    ("chile", "Chile", "133", "131", "132", "131"),
    ("colombia", "Colombia", "123", "123", "123", "123"),
    ("peru", "Peru", "105", "117", "116", "105"),
    ("paraguay", "Paraguay", "911", "911", "911", "911"),
    ("uruguay", "Uruguay", "911", "911", "911", "911"),
    // Europe (112 is the universal EU number)
    ("united kingdom", "United Kingdom", "999", "999", "999", "999"),
    ("uk", "United Kingdom", "999", "999", "999", "999"),
    ("england", "United Kingdom", "999", "999", "999", "999"),
    ("france", "France", "17", "15", "18", "112"),
    ("germany", "Germany", "110", "112", "112", "112"),
    ("italy", "Italy", "113", "118", "115", "112"),
    ("spain", "Spain", "091", "061", "080", "112"),
    ("portugal", "Portugal", "112", "112", "112", "112"),
    ("netherlands", "Netherlands", "112", "112", "112", "112"),
    ("belgium", "Belgium", "101", "112", "112", "112"),
    ("switzerland", "Switzerland", "117", "144", "118", "112"),
    ("austria", "Austria", "133", "144", "122", "112"),
    ("greece", "Greece", "100", "166", "199", "112"),
    ("ireland", "Ireland", "999", "999", "999", "112"),
    ("sweden", "Sweden", "112", "112", "112", "112"),
    ("norway", "Norway", "112", "113", "110", "112"),
    ("denmark", "Denmark", "112", "112", "112", "112"),
    ("finland", "Finland", "112", "112", "112", "112"),
    ("poland", "Poland", "997", "999", "998", "112"),
    ("czech republic", "Czech Republic", "158", "155", "150", "112"),
    ("czechia", "Czech Republic", "158", "155", "150", "112"),
    ("hungary", "Hungary", "107", "104", "105", "112"),
    ("turkey", "Turkey", "155", "112", "110", "112"),
    ("russia", "Russia", "102", "103", "101", "112"),
    // Asia
    ("japan", "Japan", "110", "119", "119", "110"),
    ("south korea", "South Korea", "112", "119", "119", "112"),
    ("korea", "South Korea", "112", "119", "119", "112"),
    ("china", "China", "110", "120", "119", "110"),
    ("hong kong", "Hong Kong", "999", "999", "999", "999"),
    ("taiwan", "Taiwan", "110", "119", "119", "110"),
    ("singapore", "Singapore", "999", "995", "995", "999"),
    ("thailand", "Thailand", "191", "1669", "199", "191"),
    ("vietnam", "Vietnam", "113", "115", "114", "113"),
    ("indonesia", "Indonesia", "110", "118", "113", "112"),
    ("malaysia", "Malaysia", "999", "999", "994", "999"),
    ("philippines", "Philippines", "117", "911", "911", "911"),
    ("india", "India", "100", "102", "101", "112"),
    ("israel", "Israel", "100", "101", "102", "100"),
    ("uae", "UAE", "999", "998", "997", "999"),
    ("dubai", "UAE", "999", "998", "997", "999"),
    ("saudi arabia", "Saudi Arabia", "999", "997", "998", "911"),
    // Oceania
    ("australia", "Australia", "000", "000", "000", "000"),
    ("new zealand", "New Zealand", "111", "111", "111", "111"),
    // Africa
    ("south africa", "South Africa", "10111", "10177", "10111", "112"),
    ("egypt", "Egypt", "122", "123", "180", "122"),
    ("morocco", "Morocco", "19", "15", "15", "19"),
    ("kenya", "Kenya", "999", "999", "999", "999"),
];

/// Lowercased city to its country key in EMERGENCY_DATA.
const CITY_COUNTRIES: &[(&str, &str)] = &[
    // Americas
    ("new york", "united states"),
    ("los angeles", "united states"),
    ("miami", "united states"),
    ("chicago", "united states"),
    ("las vegas", "united states"),
    ("san francisco", "united states"),
    ("seattle", "united states"),
    ("boston", "united states"),
    ("washington", "united states"),
    ("hawaii", "united states"),
    ("honolulu", "united states"),
    ("toronto", "canada"),
    ("vancouver", "canada"),
    ("montreal", "canada"),
    ("mexico city", "mexico"),
    ("cancun", "mexico"),
    ("guadalajara", "mexico"),
    ("sao paulo", "brazil"),
    ("rio de janeiro", "brazil"),
    ("buenos aires", "argentina"),
    ("lima", "peru"),
    ("bogota", "colombia"),
    ("santiago", "chile"),
    ("asuncion", "paraguay"),
    ("montevideo", "uruguay"),
    // Europe
    ("london", "united kingdom"),
    ("edinburgh", "united kingdom"),
    ("manchester", "united kingdom"),
    ("paris", "france"),
    ("nice", "france"),
    ("marseille", "france"),
    ("lyon", "france"),
    ("rome", "italy"),
    ("milan", "italy"),
    ("florence", "italy"),
    ("venice", "italy"),
    ("naples", "italy"),
    ("barcelona", "spain"),
    ("madrid", "spain"),
    ("seville", "spain"),
    ("valencia", "spain"),
    ("lisbon", "portugal"),
    ("porto", "portugal"),
    ("berlin", "germany"),
    ("munich", "germany"),
    ("frankfurt", "germany"),
    ("hamburg", "germany"),
    ("amsterdam", "netherlands"),
    ("rotterdam", "netherlands"),
    ("brussels", "belgium"),
    ("bruges", "belgium"),
    ("vienna", "austria"),
    ("salzburg", "austria"),
    ("zurich", "switzerland"),
    ("geneva", "switzerland"),
    ("bern", "switzerland"),
    ("athens", "greece"),
    ("santorini", "greece"),
    ("mykonos", "greece"),
    ("dublin", "ireland"),
    ("stockholm", "sweden"),
    ("copenhagen", "denmark"),
    ("oslo", "norway"),
    ("helsinki", "finland"),
    ("prague", "czech republic"),
    ("budapest", "hungary"),
    ("warsaw", "poland"),
    ("krakow", "poland"),
    ("istanbul", "turkey"),
    ("moscow", "russia"),
    ("st petersburg", "russia"),
    // Asia
    ("tokyo", "japan"),
    ("osaka", "japan"),
    ("kyoto", "japan"),
    ("seoul", "south korea"),
    ("busan", "south korea"),
    ("beijing", "china"),
    ("shanghai", "china"),
    ("hong kong", "hong kong"),
    ("taipei", "taiwan"),
    ("singapore", "singapore"),
    ("bangkok", "thailand"),
    ("phuket", "thailand"),
    ("chiang mai", "thailand"),
    ("kuala lumpur", "malaysia"),
    ("bali", "indonesia"),
    ("jakarta", "indonesia"),
    ("manila", "philippines"),
    ("cebu", "philippines"),
    ("ho chi minh", "vietnam"),
    ("hanoi", "vietnam"),
    ("mumbai", "india"),
    ("delhi", "india"),
    ("goa", "india"),
    ("jaipur", "india"),
    ("tel aviv", "israel"),
    ("jerusalem", "israel"),
    ("dubai", "uae"),
    ("abu dhabi", "uae"),
    ("riyadh", "saudi arabia"),
    // Oceania
    ("sydney", "australia"),
    ("melbourne", "australia"),
    ("brisbane", "australia"),
    ("perth", "australia"),
    ("auckland", "new zealand"),
    ("queenstown", "new zealand"),
    // Africa
    ("cape town", "south africa"),
    ("johannesburg", "south africa"),
    ("cairo", "egypt"),
    ("marrakech", "morocco"),
    ("nairobi", "kenya"),
];

fn lookup_country(key: &str) -> Option<EmergencyInfo> {
    EMERGENCY_DATA
        .iter()
        .find(|(k, _, _, _, _, _)| *k == key)
        .map(
            |(_, country, police, ambulance, fire, universal)| EmergencyInfo {
                country: country.to_string(),
                police: police.to_string(),
                ambulance: ambulance.to_string(),
                fire: fire.to_string(),
                emergency_number: universal.to_string(),
            },
        )
}

/// Emergency numbers for a destination. The input may be a known city or a
/// country name; anything unrecognized falls back to 112, the most widely
/// deployed universal number.
pub fn emergency_info(city_or_country: &str) -> EmergencyInfo {
    let normalized = city_or_country.trim().to_lowercase();

    let country_key = CITY_COUNTRIES
        .iter()
        .find(|(c, _)| *c == normalized)
        .map(|(_, key)| *key);

    if let Some(key) = country_key {
        if let Some(info) = lookup_country(key) {
            return info;
        }
    }

    if let Some(info) = lookup_country(&normalized) {
        return info;
    }

    EmergencyInfo {
        country: "Unknown".to_string(),
        police: "112".to_string(),
        ambulance: "112".to_string(),
        fire: "112".to_string(),
        emergency_number: "112".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_resolves_through_country() {
        let info = emergency_info("Tokyo");
        assert_eq!(info.country, "Japan");
        assert_eq!(info.police, "110");
        assert_eq!(info.ambulance, "119");
    }

    #[test]
    fn test_country_name_works_directly() {
        let info = emergency_info("France");
        assert_eq!(info.police, "17");
        assert_eq!(info.ambulance, "15");
        assert_eq!(info.emergency_number, "112");
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(emergency_info("UK"), emergency_info("United Kingdom"));
        assert_eq!(emergency_info("czechia"), emergency_info("Czech Republic"));
    }

    #[test]
    fn test_dubai_is_both_city_and_country_key() {
        let info = emergency_info("Dubai");
        assert_eq!(info.country, "UAE");
        assert_eq!(info.ambulance, "998");
    }

    #[test]
    fn test_unknown_destination_falls_back_to_112() {
        let info = emergency_info("Atlantis");
        assert_eq!(info.country, "Unknown");
        assert_eq!(info.police, "112");
        assert_eq!(info.ambulance, "112");
        assert_eq!(info.fire, "112");
        assert_eq!(info.emergency_number, "112");
    }

    #[test]
    fn test_input_is_trimmed_and_case_insensitive() {
        assert_eq!(emergency_info("  TOKYO  "), emergency_info("tokyo"));
    }
}
