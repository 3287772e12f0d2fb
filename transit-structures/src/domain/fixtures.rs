//! JSON fixtures shared by the record tests.

use serde_json::{Value, json};

pub fn station(name: &str, kind: &str, city: &str, country: &str) -> Value {
    json!({
        "name": name,
        "type": kind,
        "latitude": 22.3,
        "longitude": 113.9,
        "city": city,
        "country": country
    })
}

pub fn hkg_airport() -> Value {
    json!({
        "code": "HKG",
        "airport_type": "international",
        "name": "Hong Kong International Airport",
        "operating_city": "HKG",
        "id": "ap-hkg",
        "station": station("Chek Lap Kok", "airport", "Hong Kong", "Hong Kong")
    })
}

pub fn sin_airport() -> Value {
    json!({
        "code": "SIN",
        "airport_type": "international",
        "name": "Singapore Changi Airport",
        "operating_city": "SIN",
        "id": "ap-sin",
        "station": station("Changi", "airport", "Singapore", "Singapore")
    })
}

pub fn star_alliance() -> Value {
    json!({
        "name": "Star Alliance",
        "id": "al-star",
        "worldwide": true,
        "website": "https://www.staralliance.com"
    })
}

pub fn singapore_airlines() -> Value {
    json!({
        "name": "Singapore Airlines",
        "code": "SQ",
        "id": "sq",
        "country": "Singapore",
        "hub_airports": [sin_airport()],
        "alliance": star_alliance(),
        "website": "https://www.singaporeair.com"
    })
}

pub fn sq_flight() -> Value {
    json!({
        "flight_number": "SQ891",
        "airline": singapore_airlines(),
        "departure_airport": sin_airport(),
        "arrival_airport": hkg_airport(),
        "departure_time": "07:45",
        "arrival_time": "11:40",
        "duration": 235
    })
}

pub fn west_kowloon() -> Value {
    json!({
        "code": "XJA",
        "name": "香港西九龍",
        "name_en": "Hong Kong West Kowloon",
        "id": "ts-xja",
        "station": station("West Kowloon", "train", "Hong Kong", "Hong Kong")
    })
}

pub fn shenzhen_north() -> Value {
    json!({
        "code": "IOQ",
        "name": "深圳北",
        "id": "ts-ioq",
        "station": station("Shenzhen North", "train", "Shenzhen", "China")
    })
}

pub fn futian() -> Value {
    json!({
        "code": "IZQ",
        "name": "福田",
        "name_en": "Futian",
        "id": "ts-izq",
        "station": station("Futian", "train", "Shenzhen", "China")
    })
}

pub fn china_railway() -> Value {
    json!({
        "name": "China Railway",
        "country": "China",
        "abbr": "CR"
    })
}

pub fn g_train() -> Value {
    json!({
        "train_number": "G6538",
        "carrier": china_railway(),
        "region": "Guangdong",
        "departure_station": west_kowloon(),
        "arrival_station": shenzhen_north(),
        "departure_time": "08:30",
        "arrival_time": "08:51",
        "duration": 21
    })
}

pub fn metro_station(code: &str, name: &str) -> Value {
    json!({
        "code": code,
        "name": name,
        "id": format!("ms-{}", code.to_lowercase()),
        "station": station(name, "metro", "Hong Kong", "Hong Kong")
    })
}

pub fn island_line() -> Value {
    json!({
        "name": "港島綫",
        "name_en": "Island Line",
        "id": "ml-isl",
        "color": "#007DC5"
    })
}
