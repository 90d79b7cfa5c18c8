use std::io::Cursor;

use cinema_manager::config::{AppConfig, Config, PricingConfig};
use cinema_manager::console;

fn test_config() -> Config {
    Config {
        app: AppConfig {
            environment: "test".to_string(),
            rust_log: "off".to_string(),
        },
        pricing: PricingConfig::default(),
    }
}

// Runs a full scripted session and returns everything written to stdout
fn run_session(script: &str) -> String {
    let config = test_config();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    console::run(&config, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn full_session_walks_the_menu() {
    // 3x3 hall: show seats, buy (1,1), statistics, exit
    let out = run_session("3\n3\n1\n2\n1\n1\n3\n0\n");
    assert!(out.contains("Enter the number of rows:"));
    assert!(out.contains("Enter the number of seats in each row:"));
    assert!(out.contains("1. Show the seats"));
    assert!(out.contains("4. Return a ticket"));
    assert!(out.contains("Cinema:"));
    assert!(out.contains("1 S S S"));
    assert!(out.contains("Ticket Price: $10"));
    assert!(out.contains("Number of purchased tickets: 1"));
    assert!(out.contains("Percentage: 11.11%"));
    assert!(out.contains("Current income: $10"));
    assert!(out.contains("Total income: $90"));
}

#[test]
fn shown_grid_reflects_bookings() {
    let out = run_session("3\n3\n2\n2\n2\n1\n0\n");
    assert!(out.contains("2 S B S"));
}

#[test]
fn non_integer_input_reprompts() {
    let out = run_session("abc\n3\n3\n0\n");
    assert!(out.contains("Inappropriate input. Please enter an integer."));
    // the prompt is repeated after the bad line
    assert_eq!(out.matches("Enter the number of rows:").count(), 2);
}

#[test]
fn negative_dimension_exits_immediately() {
    let out = run_session("-1\n");
    assert!(out.contains("Enter the number of rows:"));
    assert!(!out.contains("1. Show the seats"));

    let out = run_session("3\n-4\n");
    assert!(out.contains("Enter the number of seats in each row:"));
    assert!(!out.contains("1. Show the seats"));
}

#[test]
fn double_booking_reprompts_until_a_free_seat() {
    // buy (1,1), then try (1,1) again and settle on (1,2)
    let out = run_session("3\n3\n2\n1\n1\n2\n1\n1\n1\n2\n0\n");
    assert!(out.contains("That ticket has already been purchased!"));
    assert_eq!(out.matches("Ticket Price: $10").count(), 2);
}

#[test]
fn out_of_range_booking_reprompts() {
    let out = run_session("3\n3\n2\n4\n1\n1\n1\n0\n");
    assert!(out.contains("Wrong input!"));
    assert!(out.contains("Ticket Price: $10"));
}

#[test]
fn return_ticket_flow() {
    // buy (1,1), return it, then try to return it again
    let out = run_session("3\n3\n2\n1\n1\n4\n1\n1\n4\n1\n1\n0\n");
    assert!(out.contains("Ticket returned."));
    assert!(out.contains("This seat is already available."));
}

#[test]
fn returned_seat_is_sold_again_at_the_same_price() {
    let out = run_session("3\n3\n2\n1\n1\n4\n1\n1\n2\n1\n1\n3\n0\n");
    assert_eq!(out.matches("Ticket Price: $10").count(), 2);
    assert!(out.contains("Number of purchased tickets: 1"));
    assert!(out.contains("Current income: $10"));
}

#[test]
fn unknown_command_is_reported_and_menu_continues() {
    let out = run_session("3\n3\n7\n0\n");
    assert!(out.contains("Unidentified command id."));
    assert_eq!(out.matches("1. Show the seats").count(), 2);
}

#[test]
fn closed_input_without_exit_is_an_error() {
    let config = test_config();
    let mut input = Cursor::new(b"3\n3\n".to_vec());
    let mut output = Vec::new();
    let result = console::run(&config, &mut input, &mut output);
    assert!(result.is_err());
}
