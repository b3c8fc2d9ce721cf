use crate::{CurrentWeather, Forecast, ForecastDay, WeatherCondition};

pub(crate) fn condition(main: &str, description: &str, icon: &str) -> WeatherCondition {
    WeatherCondition {
        id: None,
        main: main.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

pub(crate) fn sample_current(main: &str) -> CurrentWeather {
    CurrentWeather {
        location: "Boston".to_string(),
        country: "US".to_string(),
        temperature: 68.4,
        feels_like: 66.5,
        humidity: 55.0,
        wind_speed: 5.75,
        weather_condition: condition(main, "clear sky", "01d"),
        timestamp: None,
    }
}

pub(crate) fn sample_forecast() -> Forecast {
    Forecast {
        location: Some("Boston".to_string()),
        country: Some("US".to_string()),
        daily_forecast: vec![
            ForecastDay {
                date: "2024-06-03".to_string(),
                temperature_max: 75.2,
                temperature_min: 60.0,
                weather_condition: condition("Rain", "light rain", "10d"),
                humidity: Some(70.0),
            },
            ForecastDay {
                date: "2024-06-04".to_string(),
                temperature_max: 71.5,
                temperature_min: 58.4,
                weather_condition: condition("Mist", "mist", "50d"),
                humidity: None,
            },
        ],
    }
}
