//! console.rs
//!
//! Тонкий слой ввода-вывода над залом: главное меню, диспетчеризация
//! команд и помощник для чтения целых чисел с повторным запросом.
//! Обобщен по `BufRead`/`Write`, чтобы полные сессии можно было
//! прогонять в тестах через буферы в памяти.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::theater::{BookingError, Theater};

const MENU_ITEMS: [&str; 5] = [
    "1. Show the seats",
    "2. Buy a ticket",
    "3. Statistics",
    "4. Return a ticket",
    "0. Exit",
];

/// Запускает консольный цикл: запрашивает размеры зала, затем
/// обрабатывает команды меню до выхода. Отрицательный размер зала
/// завершает программу сразу.
pub fn run<R: BufRead, W: Write>(config: &Config, input: &mut R, output: &mut W) -> Result<()> {
    let height = prompt_int(input, output, "Enter the number of rows:")?;
    if height < 0 {
        return Ok(());
    }
    let width = prompt_int(input, output, "Enter the number of seats in each row:")?;
    if width < 0 {
        return Ok(());
    }

    let mut theater = Theater::with_pricing(width, height, config.pricing.clone());
    info!("Hall ready: {} rows x {} seats per row", height, width);

    loop {
        for item in MENU_ITEMS {
            writeln!(output, "{}", item)?;
        }
        let command = prompt_int(input, output, "")?;
        match command {
            0 => return Ok(()),
            1 => show_seats(&theater, output)?,
            2 => buy_ticket(&mut theater, input, output)?,
            3 => show_statistics(&theater, output)?,
            4 => return_ticket(&mut theater, input, output)?,
            other => {
                debug!("unknown menu command {}", other);
                writeln!(output, "Unidentified command id.")?;
            }
        }
    }
}

/* ---------- helpers ---------- */

// Печатает приглашение (если оно не пустое) и читает строки до первого
// валидного целого. Конец потока ввода - ошибка.
fn prompt_int<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i32> {
    loop {
        if !prompt.is_empty() {
            writeln!(output, "{}", prompt)?;
        }
        output.flush()?;
        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            bail!("input stream closed");
        }
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Inappropriate input. Please enter an integer.")?,
        }
    }
}

/* ---------- commands ---------- */

fn show_seats<W: Write>(theater: &Theater, output: &mut W) -> Result<()> {
    write!(output, "{}", theater.render_grid())?;
    writeln!(output)?;
    Ok(())
}

// Покупка крутится до успешной брони: на ошибку печатаем сообщение и
// запрашиваем ряд и место заново
fn buy_ticket<R: BufRead, W: Write>(
    theater: &mut Theater,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let row = prompt_int(input, output, "Enter a row number:")?;
        let seat = prompt_int(input, output, "Enter a seat number in that row:")?;
        match theater.book_seat(row, seat) {
            Ok(price) => {
                debug!("booked seat {}:{} for {}", row, seat, price);
                writeln!(output, "Ticket Price: ${}", price)?;
                writeln!(output)?;
                return Ok(());
            }
            Err(BookingError::AlreadyBooked) => {
                writeln!(output, "That ticket has already been purchased!")?;
                writeln!(output)?;
            }
            Err(_) => {
                writeln!(output, "Wrong input!")?;
                writeln!(output)?;
            }
        }
    }
}

fn show_statistics<W: Write>(theater: &Theater, output: &mut W) -> Result<()> {
    let stats = theater.statistics();
    writeln!(output, "Number of purchased tickets: {}", stats.booked_count)?;
    writeln!(output, "Percentage: {:.2}%", stats.occupancy_percent)?;
    writeln!(output, "Current income: ${}", stats.current_revenue)?;
    writeln!(output, "Total income: ${}", stats.total_potential_revenue)?;
    Ok(())
}

// Возврат - одна попытка: сообщение об исходе и обратно в меню
fn return_ticket<R: BufRead, W: Write>(
    theater: &mut Theater,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let row = prompt_int(input, output, "Enter a row number:")?;
    let seat = prompt_int(input, output, "Enter a seat number in that row:")?;
    match theater.cancel_seat(row, seat) {
        Ok(()) => {
            debug!("returned seat {}:{}", row, seat);
            writeln!(output, "Ticket returned.")?;
        }
        Err(BookingError::NotBooked) => {
            writeln!(output, "This seat is already available.")?;
        }
        Err(_) => {
            writeln!(output, "Wrong input!")?;
        }
    }
    writeln!(output)?;
    Ok(())
}
