//! theater.rs
//!
//! Ядро приложения: зал кинотеатра с сеткой мест и ценовой политикой.
//!
//! Включает в себя следующую функциональность:
//! - Бронирование и возврат мест с симметричной проверкой границ.
//! - Расчет цены билета по ряду (передний/задний ярус).
//! - Подсчет статистики (занятость, текущая и потенциальная выручка).
//! - Отрисовка схемы зала.

use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

use crate::config::PricingConfig;
use crate::models::SeatState;

/// Ошибки операций с местами. Все три - ожидаемые пользовательские
/// ситуации, а не сбои программы: вызывающая сторона переводит их в
/// сообщения и запрашивает ввод заново.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("row or seat is outside the hall")]
    OutOfRange,
    #[error("seat is already booked")]
    AlreadyBooked,
    #[error("seat is not booked")]
    NotBooked,
}

/// Срез статистики зала на момент вызова.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub booked_count: i32,
    pub occupancy_percent: f64,
    pub current_revenue: i64,
    pub total_potential_revenue: i64,
}

pub struct Theater {
    width: i32,
    height: i32,
    seats: Vec<Vec<SeatState>>,
    pricing: PricingConfig,
    current_revenue: i64,
    total_potential_revenue: i64,
    booked_count: i32,
}

impl Theater {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_pricing(width, height, PricingConfig::default())
    }

    pub fn with_pricing(width: i32, height: i32, pricing: PricingConfig) -> Self {
        // Отрицательные размеры приводим к нулю до любых расчетов цен
        let width = width.max(0);
        let height = height.max(0);
        let seats = vec![vec![SeatState::Available; width as usize]; height as usize];
        let mut theater = Theater {
            width,
            height,
            seats,
            pricing,
            current_revenue: 0,
            total_potential_revenue: 0,
            booked_count: 0,
        };
        // Потенциальная выручка - та же ярусная ставка, просуммированная
        // по всем местам, а не отдельная формула
        theater.total_potential_revenue = (1..=theater.height)
            .map(|row| theater.price_for_row(row) * i64::from(theater.width))
            .sum();
        theater
    }

    /// Цена билета для ряда. Чистая функция размеров зала и ценовой
    /// политики: в маленьком зале весь зал по передней цене, иначе
    /// передняя половина рядов дороже задней.
    pub fn price_for_row(&self, row: i32) -> i64 {
        let total_seats = i64::from(self.width) * i64::from(self.height);
        if total_seats < i64::from(self.pricing.small_hall_seats) {
            return self.pricing.front_price;
        }
        if row <= self.height / 2 {
            self.pricing.front_price
        } else {
            self.pricing.rear_price
        }
    }

    // Границы проверяются одинаково для бронирования и возврата
    fn check_bounds(&self, row: i32, seat: i32) -> Result<(usize, usize), BookingError> {
        if row < 1 || seat < 1 || row > self.height || seat > self.width {
            return Err(BookingError::OutOfRange);
        }
        Ok(((row - 1) as usize, (seat - 1) as usize))
    }

    /// Бронирует место и возвращает цену билета. При любой ошибке
    /// состояние зала не меняется.
    pub fn book_seat(&mut self, row: i32, seat: i32) -> Result<i64, BookingError> {
        let (r, c) = self.check_bounds(row, seat)?;
        if self.seats[r][c] == SeatState::Booked {
            return Err(BookingError::AlreadyBooked);
        }
        self.seats[r][c] = SeatState::Booked;
        self.booked_count += 1;
        let price = self.price_for_row(row);
        self.current_revenue += price;
        Ok(price)
    }

    /// Возврат билета: место снова свободно, выручка уменьшается на
    /// цену ряда.
    pub fn cancel_seat(&mut self, row: i32, seat: i32) -> Result<(), BookingError> {
        let (r, c) = self.check_bounds(row, seat)?;
        if self.seats[r][c] == SeatState::Available {
            return Err(BookingError::NotBooked);
        }
        self.seats[r][c] = SeatState::Available;
        self.booked_count -= 1;
        self.current_revenue -= self.price_for_row(row);
        Ok(())
    }

    pub fn statistics(&self) -> StatsSnapshot {
        let total_seats = i64::from(self.width) * i64::from(self.height);
        // Пустой зал отдает 0%, а не NaN
        let occupancy_percent = if total_seats == 0 {
            0.0
        } else {
            f64::from(self.booked_count) / total_seats as f64 * 100.0
        };
        StatsSnapshot {
            booked_count: self.booked_count,
            occupancy_percent,
            current_revenue: self.current_revenue,
            total_potential_revenue: self.total_potential_revenue,
        }
    }

    /// Схема зала: заголовок с номерами мест, затем ряды с их номерами.
    pub fn render_grid(&self) -> String {
        let mut out = String::from("Cinema:\n");
        out.push(' ');
        for col in 1..=self.width {
            let _ = write!(out, " {}", col);
        }
        out.push('\n');
        for (r, row) in self.seats.iter().enumerate() {
            let _ = write!(out, "{}", r + 1);
            for state in row {
                let _ = write!(out, " {}", state.glyph());
            }
            out.push('\n');
        }
        out
    }
}
