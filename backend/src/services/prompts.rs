//! Prompt templates sent to the text generation provider

use shared::{ForecastHour, LocationSummary, WeatherSnapshot};

/// Prompt asking for a short summary of the forecast at a date and time
pub fn analysis_prompt(
    location: &LocationSummary,
    date: &str,
    time: &str,
    weather: &WeatherSnapshot,
) -> String {
    format!(
        "Analyze the following weather forecast and provide a brief, helpful summary:

Location: {name}, {country}
Date & Time: {date} at {time}

Temperature: {current}°C (Feels like: {feels_like}°C)
Daily Range: {min}°C to {max}°C
Condition: {condition}
Wind: {wind_speed} km/h {wind_direction}
Chance of Rain: {chance_of_rain}%
Precipitation: {precipitation} mm
Humidity: {humidity}%
Visibility: {visibility} km
UV Index: {uv}

Provide a concise 2-3 sentence summary of what to expect.",
        name = location.name,
        country = location.country,
        current = weather.temperature.current,
        feels_like = weather.temperature.feels_like,
        min = weather.temperature.min,
        max = weather.temperature.max,
        condition = weather.condition.text,
        wind_speed = weather.wind.speed_kph,
        wind_direction = weather.wind.direction,
        chance_of_rain = weather.precipitation.chance_of_rain,
        precipitation = weather.precipitation.amount_mm,
        humidity = weather.humidity,
        visibility = weather.visibility_km,
        uv = weather.uv_index,
    )
}

/// Compact description of one forecast hour
pub fn weather_details(hour: &ForecastHour) -> String {
    format!(
        "Temperature: {temp}°C (Feels like: {feels_like}°C)
Condition: {condition}
Wind Speed: {wind} km/h
Chance of Rain: {chance_of_rain}%
Humidity: {humidity}%
UV Index: {uv}",
        temp = hour.temp_c,
        feels_like = hour.feelslike_c,
        condition = hour.condition.text,
        wind = hour.wind_kph,
        chance_of_rain = hour.chance_of_rain,
        humidity = hour.humidity,
        uv = hour.uv,
    )
}

/// Prompt asking for 4-5 dash-prefixed recommendations.
///
/// The reply is returned as-is; nothing checks that it follows the format.
pub fn recommendations_prompt(hour: &ForecastHour) -> String {
    format!(
        "Based on the following weather conditions, provide ONLY 4-5 SHORT bullet points with specific recommendations.

{details}

Rules:
- Each point must be maximum 8-10 words
- Start each point with a dash (-)
- Focus on: clothing, items to bring (umbrella/sunscreen/raincoat), and precautions
- NO introductory text, NO explanations, NO extra sentences
- ONLY the bullet points

Example format:
- Wear light cotton clothes
- Carry umbrella, 60% rain expected
- Apply SPF 30+ sunscreen
- Stay hydrated, high humidity",
        details = weather_details(hour),
    )
}
