use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub pricing: PricingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Ценовая политика зала: передний и задний ярусы плюс порог
// "маленького зала", в котором весь зал идет по передней цене
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub front_price: i64,
    pub rear_price: i64,
    pub small_hall_seats: i32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            front_price: 10,
            rear_price: 8,
            small_hall_seats: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_manager=debug".to_string()),
            },
            pricing: PricingConfig {
                front_price: env::var("FRONT_PRICE")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("FRONT_PRICE must be a valid number"),
                rear_price: env::var("REAR_PRICE")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .expect("REAR_PRICE must be a valid number"),
                small_hall_seats: env::var("SMALL_HALL_SEATS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .expect("SMALL_HALL_SEATS must be a valid number"),
            },
        }
    }
}
