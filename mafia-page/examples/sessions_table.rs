//! Sorts a sessions table the way a host would: by player count, then
//! flipped, then by mode. Logs go to `sessions-table.log`.
//!
//! Run with: cargo run -p mafia-page --example sessions_table

use std::fs::File;

use log::LevelFilter;
use mafia_page::{Page, PageConfig, paths};
use pagedom::{Document, Element, Event};
use simplelog::{Config, WriteLogger};

fn sessions_table() -> Element {
    let rows = [
        ("Classic", "12", "2025-11-02"),
        ("Sport", "10", "2025-10-28"),
        ("blitz", "8", "2025-11-15"),
        ("Classic", "14", "2025-09-30"),
        ("Sport", "10", "2025-11-01"),
    ];

    Element::table()
        .id("sessions")
        .class("sortable-table")
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("Mode").id("th-mode").data("sort-type", "string"))
                    .child(Element::th("Players").id("th-players").data("sort-type", "number"))
                    .child(Element::th("Date").id("th-date").data("sort-type", "string"))
                    .child(Element::th("Actions")),
            ),
        )
        .child(Element::tbody().children(rows.iter().map(|(mode, players, date)| {
            Element::tr()
                .child(Element::td(*mode))
                .child(Element::td(*players))
                .child(Element::td(*date))
                .child(Element::td("").child(Element::button().inner_text("Open")))
        })))
}

fn print_table(page: &Page, caption: &str) {
    println!("{caption}");
    let Some(body) = page
        .document()
        .get("sessions")
        .and_then(|t| t.first_child_tagged("tbody"))
    else {
        return;
    };
    for row in body.child_elements() {
        let cells: Vec<String> = row
            .child_elements()
            .iter()
            .take(3)
            .map(|c| format!("{:<12}", c.text_content()))
            .collect();
        println!("  {}", cells.join(""));
    }
    println!();
}

fn main() {
    let log_file = File::create("sessions-table.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = match PageConfig::load_or_default(paths::config_file().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    let body = Element::div().id("body").child(sessions_table());
    let mut page = Page::mount(Document::new(body), &config);
    print_table(&page, "As rendered:");

    page.dispatch(&Event::click("th-players"));
    print_table(&page, "Players, ascending:");

    page.dispatch(&Event::click("th-players"));
    print_table(&page, "Players, descending:");

    page.dispatch(&Event::click("th-mode"));
    print_table(&page, "Mode, ascending (ties keep previous order):");
}
